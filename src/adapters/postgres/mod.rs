//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresWeightTableReader` - Weight rows validated into a `WeightTable`
//! - `PostgresScoringResultRepository` - Upserted scoring records
//! - `PostgresCompatibilityPairRepository` - Canonical pair scores
//! - `PostgresTeamRosterReader` - Team members with their latest exact profile
//!
//! Schema lives in `migrations/`.

mod compatibility_pair_repository;
mod scoring_result_repository;
mod team_roster_reader;
mod weight_table_reader;

pub use compatibility_pair_repository::PostgresCompatibilityPairRepository;
pub use scoring_result_repository::PostgresScoringResultRepository;
pub use team_roster_reader::PostgresTeamRosterReader;
pub use weight_table_reader::PostgresWeightTableReader;
