//! Scoring Module - Turns raw answers into totals and a derived profile.
//!
//! Data flows one way:
//! answers -> `AnswerAggregator` -> `ScoreTotals` -> `ProfileDeriver` -> `DerivedResult`.
//!
//! Everything here is a pure function of its inputs. Weight tables are
//! validated once at load time (`WeightTable::load`); aggregation assumes a
//! valid table and never fails.

mod aggregator;
mod answer;
mod deriver;
mod record;
mod taxonomy;
mod totals;
mod weight_table;

pub use aggregator::{AggregationOutcome, AnswerAggregator};
pub use answer::Answer;
pub use deriver::{DerivedResult, ProfileDeriver};
pub use record::ScoringRecord;
pub use taxonomy::{Frequency, ProfileCode};
pub use totals::{FrequencyTotals, ProfileTotals, ScoreTotals};
pub use weight_table::{WeightTable, WeightTableEntry, WeightTableError, WeightedOption};
