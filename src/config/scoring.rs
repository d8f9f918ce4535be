//! Scoring limits
//!
//! Upper bounds on request sizes accepted at the application boundary.
//! The pure scoring functions themselves have no limits.

use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Maximum answers accepted in one submission
    #[serde(default = "default_max_answers")]
    pub max_answers_per_submission: usize,

    /// Maximum members considered when building a team matrix
    #[serde(default = "default_max_roster")]
    pub max_roster_size: usize,
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_answers_per_submission == 0 {
            return Err(ValidationError::InvalidScoringLimit("max_answers_per_submission"));
        }
        if self.max_roster_size == 0 {
            return Err(ValidationError::InvalidScoringLimit("max_roster_size"));
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_answers_per_submission: default_max_answers(),
            max_roster_size: default_max_roster(),
        }
    }
}

fn default_max_answers() -> usize {
    1000
}

fn default_max_roster() -> usize {
    500
}
