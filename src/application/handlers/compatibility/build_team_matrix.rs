//! Matrix handlers - Build a compatibility matrix for a stored team or an
//! ad hoc roster.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::compatibility::{CompatibilityMatrixBuilder, TeamCompatibility, TeamMember};
use crate::domain::foundation::{DomainError, ErrorCode, OrganizationId, TeamId};
use crate::ports::{CompatibilityPairRepository, TeamRosterReader};

fn check_roster_size(len: usize, max: usize) -> Result<(), DomainError> {
    if len > max {
        return Err(DomainError::new(
            ErrorCode::LimitExceeded,
            format!("Roster has {} members; at most {} are accepted", len, max),
        ));
    }
    Ok(())
}

/// Query for a stored team's compatibility view.
#[derive(Debug, Clone)]
pub struct BuildTeamMatrixQuery {
    pub organization_id: OrganizationId,
    pub team_id: TeamId,
}

/// Handler that builds the matrix for a team loaded from storage.
pub struct BuildTeamMatrixHandler {
    rosters: Arc<dyn TeamRosterReader>,
    pairs: Arc<dyn CompatibilityPairRepository>,
    max_roster_size: usize,
}

impl BuildTeamMatrixHandler {
    pub fn new(
        rosters: Arc<dyn TeamRosterReader>,
        pairs: Arc<dyn CompatibilityPairRepository>,
        max_roster_size: usize,
    ) -> Self {
        Self {
            rosters,
            pairs,
            max_roster_size,
        }
    }

    pub async fn handle(&self, query: BuildTeamMatrixQuery) -> Result<TeamCompatibility, DomainError> {
        // 1. Load roster
        let members = self
            .rosters
            .list_members(query.organization_id, query.team_id)
            .await?;
        check_roster_size(members.len(), self.max_roster_size)?;

        // 2. Snapshot pair scores
        let table = self.pairs.load_table(query.organization_id).await?;

        // 3. Build
        let result = CompatibilityMatrixBuilder::build(&members, &table);

        if !result.excluded.is_empty() {
            debug!(
                team_id = %query.team_id,
                excluded = result.excluded.len(),
                "Members without a valid profile left out of matrix"
            );
        }
        info!(
            organization_id = %query.organization_id,
            team_id = %query.team_id,
            members = result.member_count,
            team_score = result.team_score,
            "Built team compatibility matrix"
        );

        Ok(result)
    }
}

/// Command carrying a caller-supplied roster.
#[derive(Debug, Clone)]
pub struct BuildAdHocMatrixCommand {
    pub organization_id: OrganizationId,
    pub members: Vec<TeamMember>,
}

/// Handler that builds the matrix for an arbitrary roster.
pub struct BuildAdHocMatrixHandler {
    pairs: Arc<dyn CompatibilityPairRepository>,
    max_roster_size: usize,
}

impl BuildAdHocMatrixHandler {
    pub fn new(pairs: Arc<dyn CompatibilityPairRepository>, max_roster_size: usize) -> Self {
        Self {
            pairs,
            max_roster_size,
        }
    }

    pub async fn handle(&self, cmd: BuildAdHocMatrixCommand) -> Result<TeamCompatibility, DomainError> {
        check_roster_size(cmd.members.len(), self.max_roster_size)?;
        let table = self.pairs.load_table(cmd.organization_id).await?;
        let result = CompatibilityMatrixBuilder::build(&cmd.members, &table);

        debug!(
            organization_id = %cmd.organization_id,
            members = result.member_count,
            team_score = result.team_score,
            "Built ad hoc compatibility matrix"
        );

        Ok(result)
    }
}
