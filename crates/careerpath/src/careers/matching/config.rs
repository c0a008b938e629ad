use serde::{Deserialize, Serialize};

/// Number of careers returned by a match run unless configured otherwise.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Tunables for a match run. The scoring constants themselves are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub result_limit: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}
