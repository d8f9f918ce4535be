//! HTTP DTOs for compatibility endpoints.
//!
//! Pair rows and the team view already serialize in their wire shape, so
//! they are re-exported directly.

pub use crate::domain::compatibility::{CompatibilityPair, TeamCompatibility};

use serde::{Deserialize, Serialize};

use crate::domain::compatibility::TeamMember;
use crate::domain::foundation::TakerId;

/// Request body for setting one pair score. Keys may be given in either order.
#[derive(Debug, Clone, Deserialize)]
pub struct SetPairScoreRequest {
    pub a_key: String,
    pub b_key: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PairListResponse {
    pub pairs: Vec<CompatibilityPair>,
}

/// One member of an ad hoc roster.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterMemberDto {
    /// Generated when omitted.
    #[serde(default)]
    pub id: Option<TakerId>,
    #[serde(default)]
    pub exact_profile: Option<String>,
}

/// Request body for building a matrix over an explicit roster.
#[derive(Debug, Clone, Deserialize)]
pub struct AdHocMatrixRequest {
    pub members: Vec<RosterMemberDto>,
}

impl AdHocMatrixRequest {
    pub fn into_members(self) -> Vec<TeamMember> {
        self.members
            .into_iter()
            .map(|m| TeamMember {
                id: m.id.unwrap_or_default(),
                exact_profile: m.exact_profile,
            })
            .collect()
    }
}
