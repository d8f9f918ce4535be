//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Scoring handlers
    GetScoringResultHandler, GetScoringResultQuery, ScoreSubmissionCommand,
    ScoreSubmissionHandler, ScoreSubmissionResult,
    // Compatibility handlers
    BuildAdHocMatrixCommand, BuildAdHocMatrixHandler, BuildTeamMatrixHandler,
    BuildTeamMatrixQuery, ListPairScoresHandler, SetPairScoreCommand, SetPairScoreHandler,
};
