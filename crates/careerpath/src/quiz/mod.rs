//! Quiz submission service, result storage seam, and HTTP routes.

pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use repository::{
    QuizResult, QuizResultView, RepositoryError, ResultId, ResultRepository, TraitLevelEntry,
};
pub use router::{quiz_router, AnswersRequest, MatchRequest};
pub use service::{CareerPathService, ServiceError};
