mod config;
mod rules;

pub use config::{MatchConfig, DEFAULT_RESULT_LIMIT};
pub use rules::{
    calculate_match_score, match_components, trait_weight, TraitContribution,
    FALLBACK_MATCH_SCORE,
};

use super::domain::{Career, CareerMatch};
use crate::assessment::PersonalityScores;

/// Stateless matcher that ranks a catalog against one set of trait scores.
#[derive(Debug, Clone, Default)]
pub struct CareerMatcher {
    config: MatchConfig,
}

impl CareerMatcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Scores every career, sorts descending (catalog order on ties) and keeps the top entries.
    pub fn rank(&self, scores: &PersonalityScores, careers: &[Career]) -> Vec<CareerMatch> {
        let mut matches: Vec<CareerMatch> = careers
            .iter()
            .map(|career| CareerMatch {
                career: career.clone(),
                match_score: calculate_match_score(scores, career),
            })
            .collect();

        matches.sort_by(|left, right| right.match_score.cmp(&left.match_score));
        matches.truncate(self.config.result_limit);
        matches
    }
}

/// Ranks `careers` with the default top-five limit.
pub fn match_careers(scores: &PersonalityScores, careers: &[Career]) -> Vec<CareerMatch> {
    CareerMatcher::default().rank(scores, careers)
}
