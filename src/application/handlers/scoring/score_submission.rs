//! ScoreSubmissionHandler - Command handler that scores one taker's answers.
//!
//! Loads the test's weight table, aggregates the answers, derives the exact
//! profile and stores the resulting record.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{DomainError, ErrorCode, OrganizationId, TakerId, TestId, Timestamp};
use crate::domain::scoring::{Answer, AnswerAggregator, ProfileDeriver, ScoringRecord};
use crate::ports::{ScoringResultRepository, WeightTableReader};

/// Command to score a completed submission.
#[derive(Debug, Clone)]
pub struct ScoreSubmissionCommand {
    pub organization_id: OrganizationId,
    pub test_id: TestId,
    pub taker_id: TakerId,
    pub answers: Vec<Answer>,
}

/// Result of a successful scoring run.
#[derive(Debug, Clone)]
pub struct ScoreSubmissionResult {
    pub record: ScoringRecord,
    /// Answers dropped for referencing an unknown question or option.
    pub skipped_answers: usize,
}

/// Handler for scoring submissions.
pub struct ScoreSubmissionHandler {
    weight_tables: Arc<dyn WeightTableReader>,
    results: Arc<dyn ScoringResultRepository>,
    max_answers: usize,
}

impl ScoreSubmissionHandler {
    pub fn new(
        weight_tables: Arc<dyn WeightTableReader>,
        results: Arc<dyn ScoringResultRepository>,
        max_answers: usize,
    ) -> Self {
        Self {
            weight_tables,
            results,
            max_answers,
        }
    }

    pub async fn handle(
        &self,
        cmd: ScoreSubmissionCommand,
    ) -> Result<ScoreSubmissionResult, DomainError> {
        if cmd.answers.len() > self.max_answers {
            return Err(DomainError::new(
                ErrorCode::LimitExceeded,
                format!(
                    "Submission has {} answers; at most {} are accepted",
                    cmd.answers.len(),
                    self.max_answers
                ),
            ));
        }

        let table = self
            .weight_tables
            .load_weight_table(cmd.organization_id, cmd.test_id)
            .await?;

        let outcome = AnswerAggregator::tally(&cmd.answers, &table);
        let derived = ProfileDeriver::derive_exact(&outcome.totals.frequency_totals);

        if outcome.skipped > 0 {
            debug!(
                taker_id = %cmd.taker_id,
                test_id = %cmd.test_id,
                skipped = outcome.skipped,
                "Dropped answers with unknown question or option"
            );
        }

        let record = ScoringRecord {
            organization_id: cmd.organization_id,
            test_id: cmd.test_id,
            taker_id: cmd.taker_id,
            totals: outcome.totals,
            derived,
            scored_at: Timestamp::now(),
        };
        self.results.save(&record).await?;

        info!(
            organization_id = %cmd.organization_id,
            test_id = %cmd.test_id,
            taker_id = %cmd.taker_id,
            exact_profile = %derived.exact_profile,
            "Scored submission"
        );

        Ok(ScoreSubmissionResult {
            record,
            skipped_answers: outcome.skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryScoringResultRepository, InMemoryWeightTableStore};
    use crate::domain::foundation::QuestionId;
    use crate::domain::scoring::{Frequency, ProfileCode, WeightTable, WeightTableEntry};

    fn entry(question: &str, index: u32, profile: &str, points: f64) -> WeightTableEntry {
        WeightTableEntry {
            question_id: question.to_string(),
            option_index: index,
            frequency: profile[..1].to_string(),
            profile: profile.to_string(),
            points,
        }
    }

    fn answer(question: &str, index: i64) -> Answer {
        Answer::new(QuestionId::new(question).unwrap(), index)
    }

    struct Fixture {
        handler: ScoreSubmissionHandler,
        results: Arc<InMemoryScoringResultRepository>,
        organization_id: OrganizationId,
        test_id: TestId,
    }

    async fn fixture(max_answers: usize) -> Fixture {
        let organization_id = OrganizationId::new();
        let test_id = TestId::new();
        let tables = Arc::new(InMemoryWeightTableStore::new());
        let table = WeightTable::load(vec![
            entry("q1", 0, "A1", 3.0),
            entry("q2", 0, "B2", 1.0),
            entry("q2", 1, "A2", 5.0),
            entry("q3", 0, "B1", 2.0),
        ])
        .unwrap();
        tables.insert(organization_id, test_id, table).await;

        let results = Arc::new(InMemoryScoringResultRepository::new());
        let handler = ScoreSubmissionHandler::new(tables, results.clone(), max_answers);
        Fixture {
            handler,
            results,
            organization_id,
            test_id,
        }
    }

    #[tokio::test]
    async fn scores_and_persists_submission() {
        let f = fixture(100).await;
        let taker_id = TakerId::new();

        let result = f
            .handler
            .handle(ScoreSubmissionCommand {
                organization_id: f.organization_id,
                test_id: f.test_id,
                taker_id,
                answers: vec![answer("q1", 0), answer("q2", 1), answer("q3", 0)],
            })
            .await
            .unwrap();

        let totals = result.record.totals;
        assert_eq!(totals.frequency_totals.get(Frequency::A), 8);
        assert_eq!(totals.frequency_totals.get(Frequency::B), 2);
        assert_eq!(result.record.derived.top_frequency, Frequency::A);
        assert_eq!(result.record.derived.exact_profile, ProfileCode::A1);
        assert_eq!(result.skipped_answers, 0);

        let stored = f
            .results
            .find(f.organization_id, f.test_id, taker_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored, result.record);
    }

    #[tokio::test]
    async fn reports_skipped_answers() {
        let f = fixture(100).await;
        let result = f
            .handler
            .handle(ScoreSubmissionCommand {
                organization_id: f.organization_id,
                test_id: f.test_id,
                taker_id: TakerId::new(),
                answers: vec![answer("q1", 0), answer("q9", 0), answer("q2", 5)],
            })
            .await
            .unwrap();

        assert_eq!(result.skipped_answers, 2);
        assert_eq!(result.record.totals.frequency_totals.sum(), 3);
    }

    #[tokio::test]
    async fn empty_submission_scores_as_a1() {
        let f = fixture(100).await;
        let result = f
            .handler
            .handle(ScoreSubmissionCommand {
                organization_id: f.organization_id,
                test_id: f.test_id,
                taker_id: TakerId::new(),
                answers: vec![],
            })
            .await
            .unwrap();

        assert_eq!(result.record.derived.exact_profile, ProfileCode::A1);
    }

    #[tokio::test]
    async fn rejects_oversized_submission() {
        let f = fixture(2).await;
        let err = f
            .handler
            .handle(ScoreSubmissionCommand {
                organization_id: f.organization_id,
                test_id: f.test_id,
                taker_id: TakerId::new(),
                answers: vec![answer("q1", 0); 3],
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::LimitExceeded);
    }

    #[tokio::test]
    async fn unknown_test_is_not_found() {
        let f = fixture(100).await;
        let err = f
            .handler
            .handle(ScoreSubmissionCommand {
                organization_id: f.organization_id,
                test_id: TestId::new(),
                taker_id: TakerId::new(),
                answers: vec![answer("q1", 0)],
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::WeightTableNotFound);
    }
}
