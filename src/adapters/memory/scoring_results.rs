//! In-memory scoring result repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, OrganizationId, TakerId, TestId};
use crate::domain::scoring::ScoringRecord;
use crate::ports::ScoringResultRepository;

type RecordKey = (OrganizationId, TestId, TakerId);

/// Latest scoring record per taker and test.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScoringResultRepository {
    records: Arc<RwLock<HashMap<RecordKey, ScoringRecord>>>,
}

impl InMemoryScoringResultRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl ScoringResultRepository for InMemoryScoringResultRepository {
    async fn save(&self, record: &ScoringRecord) -> Result<(), DomainError> {
        self.records.write().await.insert(
            (record.organization_id, record.test_id, record.taker_id),
            record.clone(),
        );
        Ok(())
    }

    async fn find(
        &self,
        organization_id: OrganizationId,
        test_id: TestId,
        taker_id: TakerId,
    ) -> Result<Option<ScoringRecord>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .get(&(organization_id, test_id, taker_id))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::scoring::{DerivedResult, Frequency, ProfileCode, ScoreTotals};

    fn record(profile: ProfileCode) -> ScoringRecord {
        ScoringRecord {
            organization_id: OrganizationId::new(),
            test_id: TestId::new(),
            taker_id: TakerId::new(),
            totals: ScoreTotals::ZERO,
            derived: DerivedResult {
                top_frequency: profile.frequency(),
                exact_profile: profile,
            },
            scored_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn rescoring_replaces_previous_record() {
        let repo = InMemoryScoringResultRepository::new();
        let first = record(ProfileCode::A1);
        repo.save(&first).await.unwrap();

        let second = ScoringRecord {
            derived: DerivedResult {
                top_frequency: Frequency::C,
                exact_profile: ProfileCode::C2,
            },
            ..first.clone()
        };
        repo.save(&second).await.unwrap();

        assert_eq!(repo.len().await, 1);
        let found = repo
            .find(first.organization_id, first.test_id, first.taker_id)
            .await
            .unwrap();
        assert_eq!(found, Some(second));
    }

    #[tokio::test]
    async fn find_misses_return_none() {
        let repo = InMemoryScoringResultRepository::new();
        let found = repo
            .find(OrganizationId::new(), TestId::new(), TakerId::new())
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
