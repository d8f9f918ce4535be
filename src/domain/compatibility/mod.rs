//! Compatibility Module - Pairwise profile scores and team matrices.
//!
//! # Components
//!
//! - `PairScoreTable` - Canonical `(min, max)` keyed pair scores
//! - `CompatibilityMatrixBuilder` - Roster + pair table -> 8x8 matrix, team score, counts
//!
//! Like scoring, these are pure functions over caller-supplied snapshots.

mod matrix;
mod pair;

pub use matrix::{
    CompatibilityMatrix, CompatibilityMatrixBuilder, FrequencyCounts, TeamCompatibility,
    TeamMember,
};
pub use pair::{CanonicalPairKey, CompatibilityPair, CompatibilityScore, PairScoreTable};
