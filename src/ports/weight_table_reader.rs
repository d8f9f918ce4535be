//! Weight table reader port.
//!
//! Loads the validated weight table for one organization's test. Adapters
//! must run stored rows through `WeightTable::load` so scoring only ever
//! sees a table whose options agree with the taxonomy.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OrganizationId, TestId};
use crate::domain::scoring::WeightTable;

/// Reader port for per-test weight tables.
#[async_trait]
pub trait WeightTableReader: Send + Sync {
    /// Load the weight table for a test.
    ///
    /// # Errors
    ///
    /// - `WeightTableNotFound` if the test has no weight rows
    /// - `InvalidWeightTable` if stored rows fail validation
    /// - `DatabaseError` on storage failure
    async fn load_weight_table(
        &self,
        organization_id: OrganizationId,
        test_id: TestId,
    ) -> Result<WeightTable, DomainError>;
}
