//! PostgreSQL implementation of WeightTableReader.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;

use crate::domain::foundation::{DomainError, ErrorCode, OrganizationId, TestId};
use crate::domain::scoring::{WeightTable, WeightTableEntry};
use crate::ports::WeightTableReader;

/// Reads `weight_table_entries` rows and validates them into a `WeightTable`.
pub struct PostgresWeightTableReader {
    pool: PgPool,
}

impl PostgresWeightTableReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct WeightRow {
    question_id: String,
    option_index: i32,
    frequency: String,
    profile: String,
    points: f64,
}

impl TryFrom<WeightRow> for WeightTableEntry {
    type Error = DomainError;

    fn try_from(row: WeightRow) -> Result<Self, Self::Error> {
        let option_index = u32::try_from(row.option_index).map_err(|_| {
            DomainError::new(
                ErrorCode::InvalidWeightTable,
                format!(
                    "Question '{}' has negative option index {}",
                    row.question_id, row.option_index
                ),
            )
        })?;

        Ok(WeightTableEntry {
            question_id: row.question_id,
            option_index,
            frequency: row.frequency,
            profile: row.profile,
            points: row.points,
        })
    }
}

#[async_trait]
impl WeightTableReader for PostgresWeightTableReader {
    async fn load_weight_table(
        &self,
        organization_id: OrganizationId,
        test_id: TestId,
    ) -> Result<WeightTable, DomainError> {
        let rows: Vec<WeightRow> = sqlx::query_as(
            r#"
            SELECT question_id, option_index, frequency, profile, points
            FROM weight_table_entries
            WHERE organization_id = $1 AND test_id = $2
            "#,
        )
        .bind(organization_id.as_uuid())
        .bind(test_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to load weight table", e))?;

        build_table(test_id, rows)
    }
}

/// Validates fetched rows into a table; no rows means the test has no table.
fn build_table(test_id: TestId, rows: Vec<WeightRow>) -> Result<WeightTable, DomainError> {
    if rows.is_empty() {
        return Err(DomainError::new(
            ErrorCode::WeightTableNotFound,
            format!("No weight table for test {}", test_id),
        ));
    }

    let entries = rows
        .into_iter()
        .map(WeightTableEntry::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    WeightTable::load(entries).map_err(|e| {
        warn!(test_id = %test_id, error = %e, "Stored weight table failed validation");
        DomainError::from(e)
    })
}
