//! Scoring command and query handlers.

mod get_scoring_result;
mod score_submission;

pub use get_scoring_result::{GetScoringResultHandler, GetScoringResultQuery};
pub use score_submission::{
    ScoreSubmissionCommand, ScoreSubmissionHandler, ScoreSubmissionResult,
};
