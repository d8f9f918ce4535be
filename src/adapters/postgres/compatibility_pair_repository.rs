//! PostgreSQL implementation of CompatibilityPairRepository.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;

use crate::domain::compatibility::{CompatibilityPair, CompatibilityScore, PairScoreTable};
use crate::domain::foundation::{DomainError, ErrorCode, OrganizationId};
use crate::ports::CompatibilityPairRepository;

pub struct PostgresCompatibilityPairRepository {
    pool: PgPool,
}

impl PostgresCompatibilityPairRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PairRow {
    a_key: String,
    b_key: String,
    score: f64,
}

impl TryFrom<PairRow> for CompatibilityPair {
    type Error = DomainError;

    fn try_from(row: PairRow) -> Result<Self, Self::Error> {
        let invalid = |e: crate::domain::foundation::ValidationError| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid pair row {}|{}: {}", row.a_key, row.b_key, e),
            )
        };
        let a = row.a_key.parse().map_err(invalid)?;
        let b = row.b_key.parse().map_err(invalid)?;
        let score = CompatibilityScore::try_new(row.score).map_err(invalid)?;
        CompatibilityPair::new(a, b, score).map_err(invalid)
    }
}

/// Builds the snapshot, skipping rows that no longer validate.
fn build_pair_table(organization_id: OrganizationId, rows: Vec<PairRow>) -> PairScoreTable {
    let mut pairs = Vec::with_capacity(rows.len());
    for row in rows {
        match CompatibilityPair::try_from(row) {
            Ok(pair) => pairs.push(pair),
            Err(e) => {
                warn!(organization_id = %organization_id, error = %e, "Skipping malformed pair row")
            }
        }
    }
    PairScoreTable::from_pairs(pairs)
}

#[async_trait]
impl CompatibilityPairRepository for PostgresCompatibilityPairRepository {
    async fn load_table(&self, organization_id: OrganizationId) -> Result<PairScoreTable, DomainError> {
        let rows: Vec<PairRow> = sqlx::query_as(
            r#"
            SELECT a_key, b_key, score
            FROM compatibility_pairs
            WHERE organization_id = $1
            "#,
        )
        .bind(organization_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to load pair scores", e))?;

        Ok(build_pair_table(organization_id, rows))
    }

    async fn upsert(
        &self,
        organization_id: OrganizationId,
        pair: &CompatibilityPair,
    ) -> Result<(), DomainError> {
        let key = pair.key();

        sqlx::query(
            r#"
            INSERT INTO compatibility_pairs (organization_id, a_key, b_key, score, updated_at)
            VALUES ($1, $2, $3, $4, now())
            ON CONFLICT (organization_id, a_key, b_key)
            DO UPDATE SET score = EXCLUDED.score, updated_at = now()
            "#,
        )
        .bind(organization_id.as_uuid())
        .bind(key.low().as_str())
        .bind(key.high().as_str())
        .bind(pair.score.value())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to save pair score", e))?;

        Ok(())
    }
}
