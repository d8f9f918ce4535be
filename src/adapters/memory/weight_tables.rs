//! In-memory weight table store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, OrganizationId, TestId};
use crate::domain::scoring::{WeightTable, WeightTableEntry};
use crate::ports::WeightTableReader;

/// Weight tables keyed by organization and test.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWeightTableStore {
    tables: Arc<RwLock<HashMap<(OrganizationId, TestId), WeightTable>>>,
}

impl InMemoryWeightTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an already-validated table, replacing any previous one.
    pub async fn insert(&self, organization_id: OrganizationId, test_id: TestId, table: WeightTable) {
        self.tables
            .write()
            .await
            .insert((organization_id, test_id), table);
    }

    /// Validate raw rows and store the resulting table.
    pub async fn insert_entries(
        &self,
        organization_id: OrganizationId,
        test_id: TestId,
        entries: Vec<WeightTableEntry>,
    ) -> Result<(), DomainError> {
        let table = WeightTable::load(entries)?;
        self.insert(organization_id, test_id, table).await;
        Ok(())
    }
}

#[async_trait]
impl WeightTableReader for InMemoryWeightTableStore {
    async fn load_weight_table(
        &self,
        organization_id: OrganizationId,
        test_id: TestId,
    ) -> Result<WeightTable, DomainError> {
        self.tables
            .read()
            .await
            .get(&(organization_id, test_id))
            .cloned()
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::WeightTableNotFound,
                    format!("No weight table for test {}", test_id),
                )
            })
    }
}
