//! Assessly - Scoring engine for multi-tenant psychometric assessments
//!
//! Turns a taker's answers into per-frequency and per-profile totals,
//! derives the exact profile (`A1`..`D2`) and builds team compatibility
//! matrices from organization-specific pair scores.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
