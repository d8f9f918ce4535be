//! Compatibility pair repository port.
//!
//! Pair scores are scoped per organization and always stored canonically
//! (`a_key < b_key`). Implementations must upsert on the canonical key so a
//! reversed write updates the existing row instead of adding a second one.

use async_trait::async_trait;

use crate::domain::compatibility::{CompatibilityPair, PairScoreTable};
use crate::domain::foundation::{DomainError, OrganizationId};

/// Repository port for compatibility pair scores.
#[async_trait]
pub trait CompatibilityPairRepository: Send + Sync {
    /// Snapshot of every pair score for an organization.
    async fn load_table(&self, organization_id: OrganizationId)
        -> Result<PairScoreTable, DomainError>;

    /// Insert or update one canonical pair.
    async fn upsert(
        &self,
        organization_id: OrganizationId,
        pair: &CompatibilityPair,
    ) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyRepository;

    #[async_trait]
    impl CompatibilityPairRepository for EmptyRepository {
        async fn load_table(
            &self,
            _organization_id: OrganizationId,
        ) -> Result<PairScoreTable, DomainError> {
            Ok(PairScoreTable::new())
        }

        async fn upsert(
            &self,
            _organization_id: OrganizationId,
            _pair: &CompatibilityPair,
        ) -> Result<(), DomainError> {
            Ok(())
        }
    }

    #[test]
    fn compatibility_pair_repository_is_object_safe() {
        let _repo: Box<dyn CompatibilityPairRepository> = Box::new(EmptyRepository);
    }
}
