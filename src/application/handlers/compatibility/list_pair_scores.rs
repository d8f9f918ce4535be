//! ListPairScoresHandler - Query handler for an organization's pair scores.

use std::sync::Arc;

use crate::domain::compatibility::CompatibilityPair;
use crate::domain::foundation::{DomainError, OrganizationId};
use crate::ports::CompatibilityPairRepository;

pub struct ListPairScoresHandler {
    pairs: Arc<dyn CompatibilityPairRepository>,
}

impl ListPairScoresHandler {
    pub fn new(pairs: Arc<dyn CompatibilityPairRepository>) -> Self {
        Self { pairs }
    }

    /// Every stored pair, sorted by canonical key.
    pub async fn handle(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<CompatibilityPair>, DomainError> {
        Ok(self.pairs.load_table(organization_id).await?.pairs())
    }
}
