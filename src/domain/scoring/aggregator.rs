//! Answer Aggregator - Reduces a taker's answers into score totals.

use super::answer::Answer;
use super::totals::ScoreTotals;
use super::weight_table::WeightTable;

/// Totals plus bookkeeping on how many answers contributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationOutcome {
    pub totals: ScoreTotals,
    pub applied: usize,
    pub skipped: usize,
}

/// Aggregation of answers against a weight table.
pub struct AnswerAggregator;

impl AnswerAggregator {
    /// Sums points per frequency and per profile.
    ///
    /// # Edge Cases
    /// - Empty answers: all buckets zero
    /// - Unknown question or out-of-range option: answer skipped
    /// - All answers malformed: all buckets zero, not an error
    pub fn aggregate(answers: &[Answer], table: &WeightTable) -> ScoreTotals {
        Self::tally(answers, table).totals
    }

    /// Same as [`AnswerAggregator::aggregate`], also counting skipped answers.
    pub fn tally(answers: &[Answer], table: &WeightTable) -> AggregationOutcome {
        let mut totals = ScoreTotals::ZERO;
        let mut applied = 0;

        for option in answers.iter().filter_map(|answer| table.resolve(answer)) {
            let points = u64::from(option.points());
            totals.frequency_totals.add(option.frequency(), points);
            totals.profile_totals.add(option.profile(), points);
            applied += 1;
        }

        AggregationOutcome {
            totals,
            applied,
            skipped: answers.len() - applied,
        }
    }
}
