//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod compatibility;
pub mod error;
pub mod router;
pub mod scoring;

// Re-export key types for convenience
pub use compatibility::{compatibility_routes, CompatibilityAppState};
pub use error::{ApiError, ErrorResponse};
pub use router::api_router;
pub use scoring::{scoring_routes, ScoringAppState};
