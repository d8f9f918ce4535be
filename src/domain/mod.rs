//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `scoring` - Answer aggregation and profile derivation
//! - `compatibility` - Pair score tables and team compatibility matrices

pub mod compatibility;
pub mod foundation;
pub mod scoring;
