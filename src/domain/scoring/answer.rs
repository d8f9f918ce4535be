//! A taker's selection for one question.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionId;

/// `(question_id, option_index)` as submitted by a taker.
///
/// The index is signed so that out-of-range submissions (including negative
/// ones) survive deserialization and are dropped during aggregation rather
/// than rejecting the whole submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: QuestionId,
    pub option_index: i64,
}

impl Answer {
    pub fn new(question_id: QuestionId, option_index: i64) -> Self {
        Self {
            question_id,
            option_index,
        }
    }
}
