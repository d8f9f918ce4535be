//! In-memory compatibility pair repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::compatibility::{CompatibilityPair, PairScoreTable};
use crate::domain::foundation::{DomainError, OrganizationId};
use crate::ports::CompatibilityPairRepository;

/// One `PairScoreTable` per organization.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCompatibilityPairRepository {
    tables: Arc<RwLock<HashMap<OrganizationId, PairScoreTable>>>,
}

impl InMemoryCompatibilityPairRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompatibilityPairRepository for InMemoryCompatibilityPairRepository {
    async fn load_table(&self, organization_id: OrganizationId) -> Result<PairScoreTable, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .get(&organization_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn upsert(
        &self,
        organization_id: OrganizationId,
        pair: &CompatibilityPair,
    ) -> Result<(), DomainError> {
        self.tables
            .write()
            .await
            .entry(organization_id)
            .or_default()
            .upsert(*pair);
        Ok(())
    }
}
