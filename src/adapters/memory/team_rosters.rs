//! In-memory team roster store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::compatibility::TeamMember;
use crate::domain::foundation::{DomainError, ErrorCode, OrganizationId, TeamId};
use crate::ports::TeamRosterReader;

#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamRosterStore {
    teams: Arc<RwLock<HashMap<(OrganizationId, TeamId), Vec<TeamMember>>>>,
}

impl InMemoryTeamRosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace a team's roster.
    pub async fn insert_team(
        &self,
        organization_id: OrganizationId,
        team_id: TeamId,
        members: Vec<TeamMember>,
    ) {
        self.teams
            .write()
            .await
            .insert((organization_id, team_id), members);
    }
}

#[async_trait]
impl TeamRosterReader for InMemoryTeamRosterStore {
    async fn list_members(
        &self,
        organization_id: OrganizationId,
        team_id: TeamId,
    ) -> Result<Vec<TeamMember>, DomainError> {
        self.teams
            .read()
            .await
            .get(&(organization_id, team_id))
            .cloned()
            .ok_or_else(|| {
                DomainError::new(ErrorCode::TeamNotFound, format!("Team {} not found", team_id))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TakerId;

    #[tokio::test]
    async fn teams_are_scoped_by_organization() {
        let store = InMemoryTeamRosterStore::new();
        let org = OrganizationId::new();
        let team = TeamId::new();
        store
            .insert_team(org, team, vec![TeamMember::new(TakerId::new(), Some("B1"))])
            .await;

        assert_eq!(store.list_members(org, team).await.unwrap().len(), 1);
        let err = store
            .list_members(OrganizationId::new(), team)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TeamNotFound);
    }
}
