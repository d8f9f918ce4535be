//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Scoring Ports
//!
//! - `WeightTableReader` - Validated weight table per organization and test
//! - `ScoringResultRepository` - Latest scoring record per taker
//!
//! ## Compatibility Ports
//!
//! - `CompatibilityPairRepository` - Canonical pair scores per organization
//! - `TeamRosterReader` - Team members with their stored exact profile

mod compatibility_pair_repository;
mod scoring_result_repository;
mod team_roster_reader;
mod weight_table_reader;

pub use compatibility_pair_repository::CompatibilityPairRepository;
pub use scoring_result_repository::ScoringResultRepository;
pub use team_roster_reader::TeamRosterReader;
pub use weight_table_reader::WeightTableReader;
