//! PostgreSQL implementation of ScoringResultRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, OrganizationId, TakerId, TestId, Timestamp};
use crate::domain::scoring::{
    DerivedResult, Frequency, FrequencyTotals, ProfileCode, ProfileTotals, ScoreTotals,
    ScoringRecord,
};
use crate::ports::ScoringResultRepository;

pub struct PostgresScoringResultRepository {
    pool: PgPool,
}

impl PostgresScoringResultRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a scoring result.
#[derive(Debug, sqlx::FromRow)]
struct ScoringResultRow {
    organization_id: Uuid,
    test_id: Uuid,
    taker_id: Uuid,
    frequency_a: i64,
    frequency_b: i64,
    frequency_c: i64,
    frequency_d: i64,
    profile_a1: i64,
    profile_a2: i64,
    profile_b1: i64,
    profile_b2: i64,
    profile_c1: i64,
    profile_c2: i64,
    profile_d1: i64,
    profile_d2: i64,
    top_frequency: String,
    exact_profile: String,
    scored_at: DateTime<Utc>,
}

fn to_total(column: &str, value: i64) -> Result<u64, DomainError> {
    u64::try_from(value).map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Negative total in column {}: {}", column, value),
        )
    })
}

fn to_column(column: &str, value: u64) -> Result<i64, DomainError> {
    i64::try_from(value).map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Total too large for column {}: {}", column, value),
        )
    })
}

/// Totals in column order: `frequency_a..frequency_d`, then `profile_a1..profile_d2`.
fn total_columns(totals: &ScoreTotals) -> Result<[i64; 12], DomainError> {
    let f = &totals.frequency_totals;
    let p = &totals.profile_totals;
    Ok([
        to_column("frequency_a", f.get(Frequency::A))?,
        to_column("frequency_b", f.get(Frequency::B))?,
        to_column("frequency_c", f.get(Frequency::C))?,
        to_column("frequency_d", f.get(Frequency::D))?,
        to_column("profile_a1", p.get(ProfileCode::A1))?,
        to_column("profile_a2", p.get(ProfileCode::A2))?,
        to_column("profile_b1", p.get(ProfileCode::B1))?,
        to_column("profile_b2", p.get(ProfileCode::B2))?,
        to_column("profile_c1", p.get(ProfileCode::C1))?,
        to_column("profile_c2", p.get(ProfileCode::C2))?,
        to_column("profile_d1", p.get(ProfileCode::D1))?,
        to_column("profile_d2", p.get(ProfileCode::D2))?,
    ])
}

impl TryFrom<ScoringResultRow> for ScoringRecord {
    type Error = DomainError;

    fn try_from(row: ScoringResultRow) -> Result<Self, Self::Error> {
        let frequency_totals = FrequencyTotals::from_pairs([
            (Frequency::A, to_total("frequency_a", row.frequency_a)?),
            (Frequency::B, to_total("frequency_b", row.frequency_b)?),
            (Frequency::C, to_total("frequency_c", row.frequency_c)?),
            (Frequency::D, to_total("frequency_d", row.frequency_d)?),
        ]);
        let profile_totals = ProfileTotals::from_pairs([
            (ProfileCode::A1, to_total("profile_a1", row.profile_a1)?),
            (ProfileCode::A2, to_total("profile_a2", row.profile_a2)?),
            (ProfileCode::B1, to_total("profile_b1", row.profile_b1)?),
            (ProfileCode::B2, to_total("profile_b2", row.profile_b2)?),
            (ProfileCode::C1, to_total("profile_c1", row.profile_c1)?),
            (ProfileCode::C2, to_total("profile_c2", row.profile_c2)?),
            (ProfileCode::D1, to_total("profile_d1", row.profile_d1)?),
            (ProfileCode::D2, to_total("profile_d2", row.profile_d2)?),
        ]);

        let top_frequency: Frequency = row.top_frequency.parse().map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid top_frequency: {}", e))
        })?;
        let exact_profile: ProfileCode = row.exact_profile.parse().map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid exact_profile: {}", e))
        })?;

        Ok(ScoringRecord {
            organization_id: OrganizationId::from_uuid(row.organization_id),
            test_id: TestId::from_uuid(row.test_id),
            taker_id: TakerId::from_uuid(row.taker_id),
            totals: ScoreTotals {
                frequency_totals,
                profile_totals,
            },
            derived: DerivedResult {
                top_frequency,
                exact_profile,
            },
            scored_at: Timestamp::from_datetime(row.scored_at),
        })
    }
}

#[async_trait]
impl ScoringResultRepository for PostgresScoringResultRepository {
    async fn save(&self, record: &ScoringRecord) -> Result<(), DomainError> {
        let [fa, fb, fc, fd, a1, a2, b1, b2, c1, c2, d1, d2] = total_columns(&record.totals)?;

        sqlx::query(
            r#"
            INSERT INTO scoring_results (
                organization_id, test_id, taker_id,
                frequency_a, frequency_b, frequency_c, frequency_d,
                profile_a1, profile_a2, profile_b1, profile_b2,
                profile_c1, profile_c2, profile_d1, profile_d2,
                top_frequency, exact_profile, scored_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            ON CONFLICT (organization_id, test_id, taker_id) DO UPDATE SET
                frequency_a = EXCLUDED.frequency_a,
                frequency_b = EXCLUDED.frequency_b,
                frequency_c = EXCLUDED.frequency_c,
                frequency_d = EXCLUDED.frequency_d,
                profile_a1 = EXCLUDED.profile_a1,
                profile_a2 = EXCLUDED.profile_a2,
                profile_b1 = EXCLUDED.profile_b1,
                profile_b2 = EXCLUDED.profile_b2,
                profile_c1 = EXCLUDED.profile_c1,
                profile_c2 = EXCLUDED.profile_c2,
                profile_d1 = EXCLUDED.profile_d1,
                profile_d2 = EXCLUDED.profile_d2,
                top_frequency = EXCLUDED.top_frequency,
                exact_profile = EXCLUDED.exact_profile,
                scored_at = EXCLUDED.scored_at
            "#,
        )
        .bind(record.organization_id.as_uuid())
        .bind(record.test_id.as_uuid())
        .bind(record.taker_id.as_uuid())
        .bind(fa)
        .bind(fb)
        .bind(fc)
        .bind(fd)
        .bind(a1)
        .bind(a2)
        .bind(b1)
        .bind(b2)
        .bind(c1)
        .bind(c2)
        .bind(d1)
        .bind(d2)
        .bind(record.derived.top_frequency.as_str())
        .bind(record.derived.exact_profile.as_str())
        .bind(record.scored_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to save scoring result", e))?;

        Ok(())
    }

    async fn find(
        &self,
        organization_id: OrganizationId,
        test_id: TestId,
        taker_id: TakerId,
    ) -> Result<Option<ScoringRecord>, DomainError> {
        let row: Option<ScoringResultRow> = sqlx::query_as(
            r#"
            SELECT organization_id, test_id, taker_id,
                   frequency_a, frequency_b, frequency_c, frequency_d,
                   profile_a1, profile_a2, profile_b1, profile_b2,
                   profile_c1, profile_c2, profile_d1, profile_d2,
                   top_frequency, exact_profile, scored_at
            FROM scoring_results
            WHERE organization_id = $1 AND test_id = $2 AND taker_id = $3
            "#,
        )
        .bind(organization_id.as_uuid())
        .bind(test_id.as_uuid())
        .bind(taker_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to find scoring result", e))?;

        row.map(ScoringRecord::try_from).transpose()
    }
}
