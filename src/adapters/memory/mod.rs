//! In-memory adapters.
//!
//! Back every port with `tokio::sync::RwLock` maps. Used by tests and by
//! the server when no database is configured for local development.

mod compatibility_pairs;
mod scoring_results;
mod team_rosters;
mod weight_tables;

pub use compatibility_pairs::InMemoryCompatibilityPairRepository;
pub use scoring_results::InMemoryScoringResultRepository;
pub use team_rosters::InMemoryTeamRosterStore;
pub use weight_tables::InMemoryWeightTableStore;
