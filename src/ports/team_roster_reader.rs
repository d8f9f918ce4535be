//! Team roster reader port.

use async_trait::async_trait;

use crate::domain::compatibility::TeamMember;
use crate::domain::foundation::{DomainError, OrganizationId, TeamId};

/// Reader port for team rosters.
///
/// Each member carries the exact profile key as stored by the latest
/// scoring run, unvalidated. Members that never completed a test carry
/// `None`.
#[async_trait]
pub trait TeamRosterReader: Send + Sync {
    /// List a team's members.
    ///
    /// Returns `TeamNotFound` when the team does not exist in the organization.
    async fn list_members(
        &self,
        organization_id: OrganizationId,
        team_id: TeamId,
    ) -> Result<Vec<TeamMember>, DomainError>;
}
