//! Compatibility HTTP adapter module.
//!
//! Endpoints for pair scores and team matrices.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::CompatibilityAppState;
pub use routes::compatibility_routes;
