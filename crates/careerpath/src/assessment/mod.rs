//! Big Five questionnaire model and the score calculator.

pub mod domain;
mod questions;
mod scoring;

pub use domain::{
    PersonalityScores, PersonalityTrait, Question, QuestionWeight, TraitLevel, UnknownTrait,
    UnsupportedWeight,
};
pub use questions::QuestionBank;
pub use scoring::calculate_scores;

pub(crate) use scoring::round_half_up;
