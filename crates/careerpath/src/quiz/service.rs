use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::repository::{QuizResult, RepositoryError, ResultId, ResultRepository};
use crate::assessment::{PersonalityScores, QuestionBank};
use crate::careers::{Career, CareerCatalog, CareerMatch, CareerMatcher, MatchConfig};
use crate::error::AssessmentError;

/// Binds the score calculator and matcher to the loaded catalogs.
pub struct CareerPathService<R> {
    questions: Arc<QuestionBank>,
    careers: Arc<CareerCatalog>,
    matcher: CareerMatcher,
    repository: Arc<R>,
}

static RESULT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_result_id() -> ResultId {
    let id = RESULT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ResultId(format!("result-{id:06}"))
}

impl<R> CareerPathService<R>
where
    R: ResultRepository + 'static,
{
    pub fn new(
        questions: QuestionBank,
        careers: CareerCatalog,
        config: MatchConfig,
        repository: Arc<R>,
    ) -> Self {
        Self {
            questions: Arc::new(questions),
            careers: Arc::new(careers),
            matcher: CareerMatcher::new(config),
            repository,
        }
    }

    pub fn questions(&self) -> &QuestionBank {
        &self.questions
    }

    pub fn careers(&self) -> &CareerCatalog {
        &self.careers
    }

    pub fn career(&self, id: &str) -> Option<&Career> {
        self.careers.get(id)
    }

    /// Scores answers against the loaded questionnaire.
    pub fn calculate_personality_scores(
        &self,
        answers: &[i64],
    ) -> Result<PersonalityScores, AssessmentError> {
        let scores = self.questions.score(answers).map_err(|err| {
            warn!(answers = answers.len(), error = %err, "rejected quiz answers");
            err
        })?;
        debug!(?scores, "computed personality scores");
        Ok(scores)
    }

    /// Ranks the loaded catalog for the given scores.
    pub fn match_careers(&self, scores: &PersonalityScores) -> Vec<CareerMatch> {
        let matches = self.matcher.rank(scores, self.careers.careers());
        debug!(
            matches = matches.len(),
            top = matches.first().map(|entry| entry.career.id.0.as_str()),
            "ranked careers"
        );
        matches
    }

    /// Scores, matches and stores a full quiz submission.
    pub fn submit(&self, answers: &[i64]) -> Result<QuizResult, ServiceError> {
        let scores = self.calculate_personality_scores(answers)?;
        let matches = self.match_careers(&scores);

        let result = QuizResult {
            result_id: next_result_id(),
            scores,
            matches,
            completed_at: Utc::now(),
        };

        let stored = self.repository.insert(result)?;
        info!(
            result_id = %stored.result_id,
            dominant_trait = %stored.scores.dominant_trait(),
            "stored quiz result"
        );
        Ok(stored)
    }

    /// Fetch a stored result for API responses.
    pub fn get(&self, result_id: &ResultId) -> Result<QuizResult, ServiceError> {
        let result = self
            .repository
            .fetch(result_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(result)
    }
}

/// Error raised by the quiz service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
