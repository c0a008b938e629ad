use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessment::{PersonalityScores, PersonalityTrait, TraitLevel};
use crate::careers::CareerMatch;

/// Identifier wrapper for stored quiz results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultId(pub String);

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Completed quiz: computed scores plus the ranked matches at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub result_id: ResultId,
    pub scores: PersonalityScores,
    pub matches: Vec<CareerMatch>,
    pub completed_at: DateTime<Utc>,
}

impl QuizResult {
    pub fn summary_view(&self) -> QuizResultView {
        QuizResultView {
            result_id: self.result_id.clone(),
            scores: self.scores,
            dominant_trait: self.scores.dominant_trait(),
            trait_levels: self
                .scores
                .iter()
                .map(|(personality_trait, value)| TraitLevelEntry {
                    personality_trait,
                    score: value,
                    level: TraitLevel::from_score(value),
                })
                .collect(),
            matches: self.matches.clone(),
            completed_at: self.completed_at,
        }
    }
}

/// Storage abstraction so results can outlive the request that produced them.
pub trait ResultRepository: Send + Sync {
    fn insert(&self, result: QuizResult) -> Result<QuizResult, RepositoryError>;
    fn fetch(&self, id: &ResultId) -> Result<Option<QuizResult>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("result already exists")]
    Conflict,
    #[error("result not found")]
    NotFound,
    #[error("result store unavailable: {0}")]
    Unavailable(String),
}

/// Response shape for a stored result.
#[derive(Debug, Clone, Serialize)]
pub struct QuizResultView {
    pub result_id: ResultId,
    pub scores: PersonalityScores,
    pub dominant_trait: PersonalityTrait,
    pub trait_levels: Vec<TraitLevelEntry>,
    pub matches: Vec<CareerMatch>,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TraitLevelEntry {
    #[serde(rename = "trait")]
    pub personality_trait: PersonalityTrait,
    pub score: u8,
    pub level: TraitLevel,
}
