//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod compatibility;
pub mod scoring;

pub use compatibility::{
    BuildAdHocMatrixCommand, BuildAdHocMatrixHandler, BuildTeamMatrixHandler,
    BuildTeamMatrixQuery, ListPairScoresHandler, SetPairScoreCommand, SetPairScoreHandler,
};
pub use scoring::{
    GetScoringResultHandler, GetScoringResultQuery, ScoreSubmissionCommand,
    ScoreSubmissionHandler, ScoreSubmissionResult,
};
