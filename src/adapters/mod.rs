//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API
//! - `postgres` - sqlx-backed ports
//! - `memory` - In-memory ports for tests and local runs

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::{
    InMemoryCompatibilityPairRepository, InMemoryScoringResultRepository,
    InMemoryTeamRosterStore, InMemoryWeightTableStore,
};
pub use postgres::{
    PostgresCompatibilityPairRepository, PostgresScoringResultRepository,
    PostgresTeamRosterReader, PostgresWeightTableReader,
};
