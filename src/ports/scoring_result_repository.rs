//! Scoring result repository port.
//!
//! Stores the latest `ScoringRecord` per `(organization, test, taker)`.
//! Re-scoring a taker replaces the previous record.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OrganizationId, TakerId, TestId};
use crate::domain::scoring::ScoringRecord;

/// Repository port for scoring results.
#[async_trait]
pub trait ScoringResultRepository: Send + Sync {
    /// Insert or replace the record for the record's taker and test.
    async fn save(&self, record: &ScoringRecord) -> Result<(), DomainError>;

    /// Find the stored record, if any.
    async fn find(
        &self,
        organization_id: OrganizationId,
        test_id: TestId,
        taker_id: TakerId,
    ) -> Result<Option<ScoringRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullRepository;

    #[async_trait]
    impl ScoringResultRepository for NullRepository {
        async fn save(&self, _record: &ScoringRecord) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find(
            &self,
            _organization_id: OrganizationId,
            _test_id: TestId,
            _taker_id: TakerId,
        ) -> Result<Option<ScoringRecord>, DomainError> {
            Ok(None)
        }
    }

    #[test]
    fn scoring_result_repository_is_object_safe() {
        let _repo: Box<dyn ScoringResultRepository> = Box::new(NullRepository);
    }
}
