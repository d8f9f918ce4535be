//! Persisted outcome of scoring one taker's submission.

use serde::{Deserialize, Serialize};

use super::deriver::DerivedResult;
use super::totals::ScoreTotals;
use crate::domain::foundation::{OrganizationId, TakerId, TestId, Timestamp};

/// Totals and derived profile for one taker on one test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRecord {
    pub organization_id: OrganizationId,
    pub test_id: TestId,
    pub taker_id: TakerId,
    pub totals: ScoreTotals,
    pub derived: DerivedResult,
    pub scored_at: Timestamp,
}
