//! Per-test weight table: the scored options behind every question.
//!
//! Tables are validated once, when loaded from their stored rows. Scoring
//! code relies on these invariants and never re-checks them:
//!
//! - every option's profile belongs to the option's frequency
//! - points are whole, non-negative numbers (fractional source weights are
//!   rounded here, half away from zero)
//! - a question's options are indexed densely from zero

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use super::answer::Answer;
use super::taxonomy::{Frequency, ProfileCode};
use crate::domain::foundation::{DomainError, ErrorCode, QuestionId};

/// Configuration errors detected while loading a weight table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightTableError {
    #[error("Question id cannot be empty")]
    EmptyQuestionId,

    #[error("Question '{question_id}' option {option_index}: unknown frequency '{value}'")]
    UnknownFrequency {
        question_id: String,
        option_index: u32,
        value: String,
    },

    #[error("Question '{question_id}' option {option_index}: unknown profile '{value}'")]
    UnknownProfile {
        question_id: String,
        option_index: u32,
        value: String,
    },

    #[error("Profile {profile} does not belong to frequency {frequency}")]
    ProfileFrequencyMismatch {
        profile: ProfileCode,
        frequency: Frequency,
    },

    #[error("Question '{question_id}' option {option_index}: invalid points {points}")]
    InvalidPoints {
        question_id: String,
        option_index: u32,
        points: f64,
    },

    #[error("Question '{question_id}' has option {option_index} more than once")]
    DuplicateOption {
        question_id: String,
        option_index: u32,
    },

    #[error("Question '{question_id}' is missing option {option_index}")]
    MissingOption {
        question_id: String,
        option_index: u32,
    },
}

impl From<WeightTableError> for DomainError {
    fn from(err: WeightTableError) -> Self {
        DomainError::new(ErrorCode::InvalidWeightTable, err.to_string())
    }
}

/// One selectable, scored answer choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeightedOption {
    points: u32,
    frequency: Frequency,
    profile: ProfileCode,
}

impl WeightedOption {
    /// Creates an option, rejecting a profile that belongs to another frequency.
    pub fn new(
        points: u32,
        frequency: Frequency,
        profile: ProfileCode,
    ) -> Result<Self, WeightTableError> {
        if profile.frequency() != frequency {
            return Err(WeightTableError::ProfileFrequencyMismatch { profile, frequency });
        }
        Ok(Self {
            points,
            frequency,
            profile,
        })
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn profile(&self) -> ProfileCode {
        self.profile
    }
}

/// A stored weight-table row, as read from persistence or an import file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTableEntry {
    pub question_id: String,
    pub option_index: u32,
    pub frequency: String,
    pub profile: String,
    pub points: f64,
}

/// Validated lookup from question to its ordered options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightTable {
    questions: HashMap<QuestionId, Vec<WeightedOption>>,
}

impl WeightTable {
    /// Validates stored rows and builds the table.
    ///
    /// Row order does not matter; options are placed by `option_index`.
    pub fn load(
        entries: impl IntoIterator<Item = WeightTableEntry>,
    ) -> Result<Self, WeightTableError> {
        let mut grouped: HashMap<QuestionId, BTreeMap<u32, WeightedOption>> = HashMap::new();

        for entry in entries {
            let question_id = QuestionId::new(entry.question_id.clone())
                .map_err(|_| WeightTableError::EmptyQuestionId)?;
            let option = parse_entry(&entry)?;

            let options = grouped.entry(question_id).or_default();
            if options.insert(entry.option_index, option).is_some() {
                return Err(WeightTableError::DuplicateOption {
                    question_id: entry.question_id,
                    option_index: entry.option_index,
                });
            }
        }

        let mut questions = HashMap::with_capacity(grouped.len());
        for (question_id, options) in grouped {
            for (expected, index) in options.keys().enumerate() {
                let expected = expected as u32;
                if *index != expected {
                    return Err(WeightTableError::MissingOption {
                        question_id: question_id.to_string(),
                        option_index: expected,
                    });
                }
            }
            questions.insert(question_id, options.into_values().collect());
        }

        Ok(Self { questions })
    }

    /// Resolves an answer to its option.
    ///
    /// Returns `None` for an unknown question or an index outside
    /// `[0, options.len())`.
    pub fn resolve(&self, answer: &Answer) -> Option<&WeightedOption> {
        let options = self.questions.get(&answer.question_id)?;
        usize::try_from(answer.option_index)
            .ok()
            .and_then(|index| options.get(index))
    }

    pub fn options(&self, question_id: &QuestionId) -> Option<&[WeightedOption]> {
        self.questions.get(question_id).map(Vec::as_slice)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn parse_entry(entry: &WeightTableEntry) -> Result<WeightedOption, WeightTableError> {
    let frequency: Frequency = entry.frequency.trim().parse().map_err(|_| {
        WeightTableError::UnknownFrequency {
            question_id: entry.question_id.clone(),
            option_index: entry.option_index,
            value: entry.frequency.clone(),
        }
    })?;

    let profile = ProfileCode::parse_label(&entry.profile).map_err(|_| {
        WeightTableError::UnknownProfile {
            question_id: entry.question_id.clone(),
            option_index: entry.option_index,
            value: entry.profile.clone(),
        }
    })?;

    let points = round_points(entry.points).ok_or_else(|| WeightTableError::InvalidPoints {
        question_id: entry.question_id.clone(),
        option_index: entry.option_index,
        points: entry.points,
    })?;

    WeightedOption::new(points, frequency, profile)
}

/// Rounds a source weight to whole points, half away from zero.
fn round_points(points: f64) -> Option<u32> {
    if !points.is_finite() || points < 0.0 {
        return None;
    }
    let rounded = points.round();
    if rounded > f64::from(u32::MAX) {
        return None;
    }
    Some(rounded as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(question: &str, index: u32, frequency: &str, profile: &str, points: f64) -> WeightTableEntry {
        WeightTableEntry {
            question_id: question.to_string(),
            option_index: index,
            frequency: frequency.to_string(),
            profile: profile.to_string(),
            points,
        }
    }

    fn q(id: &str) -> QuestionId {
        QuestionId::new(id).unwrap()
    }

    #[test]
    fn load_groups_and_orders_options() {
        let table = WeightTable::load(vec![
            entry("q1", 1, "B", "B2", 2.0),
            entry("q1", 0, "A", "A1", 3.0),
            entry("q2", 0, "D", "D1", 1.0),
        ])
        .unwrap();

        assert_eq!(table.question_count(), 2);
        let options = table.options(&q("q1")).unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].profile(), ProfileCode::A1);
        assert_eq!(options[1].profile(), ProfileCode::B2);
    }

    #[test]
    fn load_rejects_profile_from_other_frequency() {
        let err = WeightTable::load(vec![entry("q1", 0, "A", "B1", 1.0)]).unwrap_err();
        assert_eq!(
            err,
            WeightTableError::ProfileFrequencyMismatch {
                profile: ProfileCode::B1,
                frequency: Frequency::A,
            }
        );
    }

    #[test]
    fn load_rejects_unknown_codes() {
        assert!(matches!(
            WeightTable::load(vec![entry("q1", 0, "E", "A1", 1.0)]),
            Err(WeightTableError::UnknownFrequency { .. })
        ));
        assert!(matches!(
            WeightTable::load(vec![entry("q1", 0, "A", "A3", 1.0)]),
            Err(WeightTableError::UnknownProfile { .. })
        ));
    }

    #[test]
    fn load_accepts_numbered_profiles() {
        let table = WeightTable::load(vec![entry("q1", 0, "C", "6", 2.0)]).unwrap();
        assert_eq!(table.options(&q("q1")).unwrap()[0].profile(), ProfileCode::C2);
    }

    #[test]
    fn load_rounds_fractional_points() {
        let table = WeightTable::load(vec![
            entry("q1", 0, "A", "A1", 2.5),
            entry("q1", 1, "A", "A2", 2.4),
        ])
        .unwrap();
        let options = table.options(&q("q1")).unwrap();
        assert_eq!(options[0].points(), 3);
        assert_eq!(options[1].points(), 2);
    }

    #[test]
    fn load_rejects_negative_or_non_finite_points() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let result = WeightTable::load(vec![entry("q1", 0, "A", "A1", bad)]);
            assert!(matches!(result, Err(WeightTableError::InvalidPoints { .. })));
        }
    }

    #[test]
    fn load_rejects_duplicate_option_index() {
        let result = WeightTable::load(vec![
            entry("q1", 0, "A", "A1", 1.0),
            entry("q1", 0, "B", "B1", 1.0),
        ]);
        assert!(matches!(result, Err(WeightTableError::DuplicateOption { .. })));
    }

    #[test]
    fn load_rejects_gaps_in_option_indices() {
        let result = WeightTable::load(vec![
            entry("q1", 0, "A", "A1", 1.0),
            entry("q1", 2, "B", "B1", 1.0),
        ]);
        assert_eq!(
            result.unwrap_err(),
            WeightTableError::MissingOption {
                question_id: "q1".to_string(),
                option_index: 1,
            }
        );
    }

    #[test]
    fn load_rejects_empty_question_id() {
        let result = WeightTable::load(vec![entry(" ", 0, "A", "A1", 1.0)]);
        assert_eq!(result.unwrap_err(), WeightTableError::EmptyQuestionId);
    }

    #[test]
    fn resolve_handles_out_of_range_indices() {
        let table = WeightTable::load(vec![entry("q1", 0, "A", "A1", 1.0)]).unwrap();
        assert!(table.resolve(&Answer::new(q("q1"), 0)).is_some());
        assert!(table.resolve(&Answer::new(q("q1"), 1)).is_none());
        assert!(table.resolve(&Answer::new(q("q1"), -1)).is_none());
        assert!(table.resolve(&Answer::new(q("q9"), 0)).is_none());
    }

    #[test]
    fn weighted_option_constructor_checks_taxonomy() {
        assert!(WeightedOption::new(1, Frequency::D, ProfileCode::D2).is_ok());
        assert!(WeightedOption::new(1, Frequency::D, ProfileCode::C2).is_err());
    }
}
