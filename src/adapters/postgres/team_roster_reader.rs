//! PostgreSQL implementation of TeamRosterReader.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::compatibility::TeamMember;
use crate::domain::foundation::{DomainError, ErrorCode, OrganizationId, TakerId, TeamId};
use crate::ports::TeamRosterReader;

pub struct PostgresTeamRosterReader {
    pool: PgPool,
}

impl PostgresTeamRosterReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    taker_id: Uuid,
    exact_profile: Option<String>,
}

impl From<MemberRow> for TeamMember {
    fn from(row: MemberRow) -> Self {
        TeamMember {
            id: TakerId::from_uuid(row.taker_id),
            exact_profile: row.exact_profile,
        }
    }
}

#[async_trait]
impl TeamRosterReader for PostgresTeamRosterReader {
    async fn list_members(
        &self,
        organization_id: OrganizationId,
        team_id: TeamId,
    ) -> Result<Vec<TeamMember>, DomainError> {
        let exists: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM teams WHERE id = $1 AND organization_id = $2")
                .bind(team_id.as_uuid())
                .bind(organization_id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to find team", e))?;

        if exists.is_none() {
            return Err(DomainError::new(
                ErrorCode::TeamNotFound,
                format!("Team {} not found", team_id),
            ));
        }

        // Latest scoring run across all tests supplies each member's profile
        let rows: Vec<MemberRow> = sqlx::query_as(
            r#"
            SELECT m.taker_id, latest.exact_profile
            FROM team_members m
            LEFT JOIN LATERAL (
                SELECT r.exact_profile
                FROM scoring_results r
                WHERE r.organization_id = $1 AND r.taker_id = m.taker_id
                ORDER BY r.scored_at DESC
                LIMIT 1
            ) latest ON TRUE
            WHERE m.team_id = $2
            ORDER BY m.taker_id
            "#,
        )
        .bind(organization_id.as_uuid())
        .bind(team_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list team members", e))?;

        Ok(rows.into_iter().map(TeamMember::from).collect())
    }
}
