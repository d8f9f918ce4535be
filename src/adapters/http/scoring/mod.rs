//! Scoring HTTP adapter module.
//!
//! Endpoints for scoring a submission and reading a stored result.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ScoringAppState;
pub use routes::scoring_routes;
