//! Compatibility pairs and the canonical pair table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::domain::foundation::ValidationError;
use crate::domain::scoring::ProfileCode;

/// A compatibility score on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CompatibilityScore(f64);

impl CompatibilityScore {
    pub const ZERO: Self = Self(0.0);

    /// Creates a score, rejecting non-finite values and values outside 0-100.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range("score", 0.0, 100.0, value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for CompatibilityScore {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<CompatibilityScore> for f64 {
    fn from(score: CompatibilityScore) -> Self {
        score.0
    }
}

/// Unordered pair of profile codes stored as `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalPairKey {
    low: ProfileCode,
    high: ProfileCode,
}

impl CanonicalPairKey {
    /// Orders the two codes; `(B1, A1)` and `(A1, B1)` produce the same key.
    pub fn new(a: ProfileCode, b: ProfileCode) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> ProfileCode {
        self.low
    }

    pub fn high(&self) -> ProfileCode {
        self.high
    }

    /// True when both sides are the same code (a diagonal cell).
    pub fn is_self_pair(&self) -> bool {
        self.low == self.high
    }
}

impl fmt::Display for CanonicalPairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.low, self.high)
    }
}

/// One stored row: a canonical key and its score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityPair {
    pub a_key: ProfileCode,
    pub b_key: ProfileCode,
    pub score: CompatibilityScore,
}

impl CompatibilityPair {
    /// Builds a canonical row; self pairs are rejected.
    pub fn new(
        a: ProfileCode,
        b: ProfileCode,
        score: CompatibilityScore,
    ) -> Result<Self, ValidationError> {
        let key = CanonicalPairKey::new(a, b);
        if key.is_self_pair() {
            return Err(ValidationError::invalid_format(
                "pair_key",
                format!("a profile cannot be paired with itself ({})", a),
            ));
        }
        Ok(Self {
            a_key: key.low(),
            b_key: key.high(),
            score,
        })
    }

    pub fn key(&self) -> CanonicalPairKey {
        CanonicalPairKey::new(self.a_key, self.b_key)
    }
}

/// Read-only snapshot of an organization's pair scores, keyed canonically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairScoreTable {
    scores: HashMap<CanonicalPairKey, CompatibilityScore>,
}

impl PairScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = CompatibilityPair>) -> Self {
        let mut table = Self::new();
        for pair in pairs {
            table.upsert(pair);
        }
        table
    }

    /// Writes a pair, replacing any existing row for the same unordered pair.
    ///
    /// Returns the previous score when one was replaced.
    pub fn upsert(&mut self, pair: CompatibilityPair) -> Option<CompatibilityScore> {
        self.scores.insert(pair.key(), pair.score)
    }

    /// Looks up a score in either argument order.
    pub fn get(&self, a: ProfileCode, b: ProfileCode) -> Option<CompatibilityScore> {
        self.scores.get(&CanonicalPairKey::new(a, b)).copied()
    }

    /// Score for a pair, `0` when nothing is recorded.
    pub fn score_or_zero(&self, a: ProfileCode, b: ProfileCode) -> f64 {
        self.get(a, b).map(|s| s.value()).unwrap_or(0.0)
    }

    /// All rows sorted by canonical key.
    pub fn pairs(&self) -> Vec<CompatibilityPair> {
        let mut rows: Vec<CompatibilityPair> = self
            .scores
            .iter()
            .map(|(key, score)| CompatibilityPair {
                a_key: key.low(),
                b_key: key.high(),
                score: *score,
            })
            .collect();
        rows.sort_by_key(|row| row.key());
        rows
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
