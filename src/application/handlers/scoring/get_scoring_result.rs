//! GetScoringResultHandler - Query handler for a taker's stored result.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, OrganizationId, TakerId, TestId};
use crate::domain::scoring::ScoringRecord;
use crate::ports::ScoringResultRepository;

/// Query for one taker's latest result on a test.
#[derive(Debug, Clone)]
pub struct GetScoringResultQuery {
    pub organization_id: OrganizationId,
    pub test_id: TestId,
    pub taker_id: TakerId,
}

pub struct GetScoringResultHandler {
    results: Arc<dyn ScoringResultRepository>,
}

impl GetScoringResultHandler {
    pub fn new(results: Arc<dyn ScoringResultRepository>) -> Self {
        Self { results }
    }

    pub async fn handle(&self, query: GetScoringResultQuery) -> Result<ScoringRecord, DomainError> {
        self.results
            .find(query.organization_id, query.test_id, query.taker_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ResultNotFound,
                    format!("No result for taker {} on test {}", query.taker_id, query.test_id),
                )
            })
    }
}
