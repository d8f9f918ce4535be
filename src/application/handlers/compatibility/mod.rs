//! Compatibility command and query handlers.

mod build_team_matrix;
mod list_pair_scores;
mod set_pair_score;

pub use build_team_matrix::{
    BuildAdHocMatrixCommand, BuildAdHocMatrixHandler, BuildTeamMatrixHandler,
    BuildTeamMatrixQuery,
};
pub use list_pair_scores::ListPairScoresHandler;
pub use set_pair_score::{SetPairScoreCommand, SetPairScoreHandler};
