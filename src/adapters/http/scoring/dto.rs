//! HTTP DTOs for scoring endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{QuestionId, TakerId, TestId, ValidationError};
use crate::domain::scoring::{Answer, Frequency, FrequencyTotals, ProfileCode, ProfileTotals, ScoringRecord};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One answer as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerDto {
    pub question_id: String,
    pub option_index: i64,
}

/// Request body for scoring a submission.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreSubmissionRequest {
    pub answers: Vec<AnswerDto>,
}

impl ScoreSubmissionRequest {
    /// Converts to domain answers; empty question ids are rejected.
    pub fn into_answers(self) -> Result<Vec<Answer>, ValidationError> {
        self.answers
            .into_iter()
            .map(|dto| {
                QuestionId::new(dto.question_id).map(|id| Answer::new(id, dto.option_index))
            })
            .collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Stored scoring result.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringResultResponse {
    pub test_id: TestId,
    pub taker_id: TakerId,
    pub frequency_totals: FrequencyTotals,
    pub profile_totals: ProfileTotals,
    /// Profile totals keyed `1`..`8` (A1=1 .. D2=8).
    pub numbered_profile_totals: BTreeMap<u8, u64>,
    pub top_frequency: Frequency,
    pub exact_profile: ProfileCode,
    pub scored_at: DateTime<Utc>,
}

impl From<&ScoringRecord> for ScoringResultResponse {
    fn from(record: &ScoringRecord) -> Self {
        Self {
            test_id: record.test_id,
            taker_id: record.taker_id,
            frequency_totals: record.totals.frequency_totals,
            profile_totals: record.totals.profile_totals,
            numbered_profile_totals: record
                .totals
                .profile_totals
                .by_ordinal()
                .into_iter()
                .collect(),
            top_frequency: record.derived.top_frequency,
            exact_profile: record.derived.exact_profile,
            scored_at: *record.scored_at.as_datetime(),
        }
    }
}

/// Response to a scoring request.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSubmissionResponse {
    #[serde(flatten)]
    pub result: ScoringResultResponse,
    pub skipped_answers: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_rejects_empty_question_id() {
        let request: ScoreSubmissionRequest = serde_json::from_str(
            r#"{"answers":[{"question_id":"q1","option_index":0},{"question_id":" ","option_index":1}]}"#,
        )
        .unwrap();
        assert!(request.into_answers().is_err());
    }

    #[test]
    fn request_keeps_negative_indices() {
        let request: ScoreSubmissionRequest =
            serde_json::from_str(r#"{"answers":[{"question_id":"q1","option_index":-1}]}"#).unwrap();
        let answers = request.into_answers().unwrap();
        assert_eq!(answers[0].option_index, -1);
    }
}
