//! Team compatibility matrix and the builder that fills it from a roster.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use super::pair::PairScoreTable;
use crate::domain::foundation::TakerId;
use crate::domain::scoring::{Frequency, ProfileCode};

/// A roster entry as stored: the exact profile may be missing or malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: TakerId,
    pub exact_profile: Option<String>,
}

impl TeamMember {
    pub fn new(id: TakerId, exact_profile: Option<impl Into<String>>) -> Self {
        Self {
            id,
            exact_profile: exact_profile.map(Into::into),
        }
    }

    /// The member's profile when it matches `[A-D][1-2]` exactly.
    pub fn valid_profile(&self) -> Option<ProfileCode> {
        self.exact_profile.as_deref()?.parse().ok()
    }
}

/// Dense 8x8 symmetric matrix indexed by profile code.
///
/// Diagonal cells are always `None`; every other cell starts at `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompatibilityMatrix {
    cells: [[Option<f64>; 8]; 8],
}

impl CompatibilityMatrix {
    pub fn new() -> Self {
        let mut cells = [[Some(0.0); 8]; 8];
        for (i, row) in cells.iter_mut().enumerate() {
            row[i] = None;
        }
        Self { cells }
    }

    pub fn get(&self, row: ProfileCode, col: ProfileCode) -> Option<f64> {
        self.cells[row.index()][col.index()]
    }

    /// Writes both `[a][b]` and `[b][a]`. Diagonal writes are ignored.
    pub fn set_symmetric(&mut self, a: ProfileCode, b: ProfileCode, score: f64) {
        if a == b {
            return;
        }
        self.cells[a.index()][b.index()] = Some(score);
        self.cells[b.index()][a.index()] = Some(score);
    }
}

impl Default for CompatibilityMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for CompatibilityMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ProfileCode::ALL.len()))?;
        for row in ProfileCode::ALL {
            let cols: BTreeMap<&'static str, Option<f64>> = ProfileCode::ALL
                .iter()
                .map(|col| (col.as_str(), self.get(row, *col)))
                .collect();
            map.serialize_entry(row.as_str(), &cols)?;
        }
        map.end()
    }
}

/// Count of valid members per leading frequency letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrequencyCounts([usize; 4]);

impl FrequencyCounts {
    pub fn get(&self, frequency: Frequency) -> usize {
        self.0[frequency.index()]
    }

    fn increment(&mut self, frequency: Frequency) {
        self.0[frequency.index()] += 1;
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

impl Serialize for FrequencyCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Frequency::ALL.len()))?;
        for frequency in Frequency::ALL {
            map.serialize_entry(frequency.as_str(), &self.get(frequency))?;
        }
        map.end()
    }
}

/// Result of building a team's compatibility view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamCompatibility {
    pub matrix: CompatibilityMatrix,
    /// Mean over every distinct member pair, rounded to two decimals.
    pub team_score: f64,
    pub counts: FrequencyCounts,
    /// Members with a valid profile code.
    pub member_count: usize,
    /// Distinct member pairs averaged into `team_score`.
    pub pair_count: usize,
    /// Members left out because their profile code was missing or invalid.
    pub excluded: Vec<TakerId>,
}

/// Builds team matrices from a roster and a pair table.
pub struct CompatibilityMatrixBuilder;

impl CompatibilityMatrixBuilder {
    /// Builds the matrix, team score and frequency counts.
    ///
    /// # Algorithm
    /// Enumerates every `i < j` member pair (quadratic in roster size, fine
    /// for teams of tens). Each pair's score is looked up canonically and
    /// written symmetrically; the team score averages over all member pairs.
    ///
    /// # Edge Cases
    /// - Invalid or missing profile: member excluded, not an error
    /// - Missing pair score: counts as `0`
    /// - Two members sharing a code: the pair lands on the diagonal, so it
    ///   writes no cell and contributes `0` to the average
    /// - Fewer than two valid members: `team_score` is `0`
    pub fn build(members: &[TeamMember], pairs: &PairScoreTable) -> TeamCompatibility {
        let mut valid: Vec<ProfileCode> = Vec::with_capacity(members.len());
        let mut excluded = Vec::new();
        let mut counts = FrequencyCounts::default();

        for member in members {
            match member.valid_profile() {
                Some(code) => {
                    counts.increment(code.frequency());
                    valid.push(code);
                }
                None => excluded.push(member.id),
            }
        }

        let mut matrix = CompatibilityMatrix::new();
        let mut sum = 0.0;
        let mut pair_count = 0usize;

        for (i, a) in valid.iter().enumerate() {
            for b in &valid[i + 1..] {
                let score = if a == b {
                    0.0
                } else {
                    pairs.score_or_zero(*a, *b)
                };
                matrix.set_symmetric(*a, *b, score);
                sum += score;
                pair_count += 1;
            }
        }

        let team_score = if pair_count == 0 {
            0.0
        } else {
            round_to_cents(sum / pair_count as f64)
        };

        TeamCompatibility {
            matrix,
            team_score,
            counts,
            member_count: valid.len(),
            pair_count,
            excluded,
        }
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compatibility::{CompatibilityPair, CompatibilityScore};
    use proptest::prelude::*;

    fn member(code: Option<&str>) -> TeamMember {
        TeamMember::new(TakerId::new(), code)
    }

    fn pair(a: ProfileCode, b: ProfileCode, v: f64) -> CompatibilityPair {
        CompatibilityPair::new(a, b, CompatibilityScore::try_new(v).unwrap()).unwrap()
    }

    fn assert_symmetric(matrix: &CompatibilityMatrix) {
        for x in ProfileCode::ALL {
            assert_eq!(matrix.get(x, x), None);
            for y in ProfileCode::ALL {
                assert_eq!(matrix.get(x, y), matrix.get(y, x));
            }
        }
    }

    #[test]
    fn new_matrix_has_null_diagonal_and_zero_elsewhere() {
        let matrix = CompatibilityMatrix::new();
        assert_eq!(matrix.get(ProfileCode::C1, ProfileCode::C1), None);
        assert_eq!(matrix.get(ProfileCode::C1, ProfileCode::D2), Some(0.0));
        assert_symmetric(&matrix);
    }

    #[test]
    fn two_members_fill_both_cells() {
        let table = PairScoreTable::from_pairs(vec![pair(ProfileCode::A1, ProfileCode::B2, 60.0)]);
        let result = CompatibilityMatrixBuilder::build(
            &[member(Some("B2")), member(Some("A1"))],
            &table,
        );

        assert_eq!(result.matrix.get(ProfileCode::A1, ProfileCode::B2), Some(60.0));
        assert_eq!(result.matrix.get(ProfileCode::B2, ProfileCode::A1), Some(60.0));
        assert_eq!(result.team_score, 60.0);
        assert_eq!(result.pair_count, 1);
    }

    #[test]
    fn same_code_members_contribute_zero() {
        // A1-B2, A1-A1, B2-A1 -> (60 + 0 + 60) / 3
        let table = PairScoreTable::from_pairs(vec![pair(ProfileCode::A1, ProfileCode::B2, 60.0)]);
        let result = CompatibilityMatrixBuilder::build(
            &[member(Some("A1")), member(Some("B2")), member(Some("A1"))],
            &table,
        );

        assert_eq!(result.pair_count, 3);
        assert_eq!(result.team_score, 40.0);
        assert_eq!(result.matrix.get(ProfileCode::A1, ProfileCode::A1), None);
        assert_symmetric(&result.matrix);
    }

    #[test]
    fn invalid_profiles_are_excluded() {
        let bad = member(Some("E7"));
        let missing = member(None);
        let lowercase = member(Some("a1"));
        let members = vec![
            member(Some("C1")),
            bad.clone(),
            member(Some("D2")),
            missing.clone(),
            lowercase.clone(),
        ];
        let table = PairScoreTable::from_pairs(vec![pair(ProfileCode::C1, ProfileCode::D2, 75.0)]);

        let result = CompatibilityMatrixBuilder::build(&members, &table);

        assert_eq!(result.member_count, 2);
        assert_eq!(result.excluded, vec![bad.id, missing.id, lowercase.id]);
        assert_eq!(result.team_score, 75.0);
        assert_eq!(result.counts.total(), 2);
    }

    #[test]
    fn fewer_than_two_members_scores_zero() {
        let table = PairScoreTable::from_pairs(vec![pair(ProfileCode::A1, ProfileCode::B1, 90.0)]);

        for roster in [vec![], vec![member(Some("A1"))], vec![member(Some("A1")), member(None)]] {
            let result = CompatibilityMatrixBuilder::build(&roster, &table);
            assert_eq!(result.team_score, 0.0);
            assert_eq!(result.pair_count, 0);
            assert_eq!(result.matrix, CompatibilityMatrix::new());
        }
    }

    #[test]
    fn missing_pair_scores_count_as_zero() {
        let table = PairScoreTable::from_pairs(vec![pair(ProfileCode::A1, ProfileCode::B1, 90.0)]);
        let result = CompatibilityMatrixBuilder::build(
            &[member(Some("A1")), member(Some("B1")), member(Some("D2"))],
            &table,
        );
        // (90 + 0 + 0) / 3
        assert_eq!(result.team_score, 30.0);
        assert_eq!(result.matrix.get(ProfileCode::D2, ProfileCode::A1), Some(0.0));
    }

    #[test]
    fn team_score_rounds_to_two_decimals() {
        let table = PairScoreTable::from_pairs(vec![
            pair(ProfileCode::A1, ProfileCode::B1, 10.0),
            pair(ProfileCode::A1, ProfileCode::C1, 20.0),
            pair(ProfileCode::B1, ProfileCode::C1, 33.0),
        ]);
        let result = CompatibilityMatrixBuilder::build(
            &[member(Some("A1")), member(Some("B1")), member(Some("C1"))],
            &table,
        );
        // 63 / 3 = 21.0; add a fourth member with no scores: 63 / 6 = 10.5
        assert_eq!(result.team_score, 21.0);

        let result = CompatibilityMatrixBuilder::build(
            &[
                member(Some("A1")),
                member(Some("B1")),
                member(Some("C1")),
                member(Some("D1")),
            ],
            &table,
        );
        assert_eq!(result.team_score, 10.5);

        let table = PairScoreTable::from_pairs(vec![pair(ProfileCode::A1, ProfileCode::B1, 10.0)]);
        let result = CompatibilityMatrixBuilder::build(
            &[member(Some("A1")), member(Some("B1")), member(Some("C2"))],
            &table,
        );
        // 10 / 3 = 3.333...
        assert_eq!(result.team_score, 3.33);
    }

    #[test]
    fn counts_use_stored_leading_letter() {
        let result = CompatibilityMatrixBuilder::build(
            &[
                member(Some("A1")),
                member(Some("A2")),
                member(Some("C2")),
                member(Some("D1")),
                member(Some("X1")),
            ],
            &PairScoreTable::new(),
        );
        assert_eq!(result.counts.get(Frequency::A), 2);
        assert_eq!(result.counts.get(Frequency::B), 0);
        assert_eq!(result.counts.get(Frequency::C), 1);
        assert_eq!(result.counts.get(Frequency::D), 1);
    }

    #[test]
    fn serializes_matrix_with_null_diagonal() {
        let result = CompatibilityMatrixBuilder::build(&[], &PairScoreTable::new());
        let value = serde_json::to_value(&result).unwrap();
        assert!(value["matrix"]["B1"]["B1"].is_null());
        assert_eq!(value["matrix"]["B1"]["C2"], serde_json::json!(0.0));
        assert_eq!(value["counts"], serde_json::json!({"A": 0, "B": 0, "C": 0, "D": 0}));
        assert_eq!(value["team_score"], serde_json::json!(0.0));
    }

    fn arb_code() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            8 => (0usize..8).prop_map(|i| Some(ProfileCode::ALL[i].as_str().to_string())),
            1 => Just(None),
            1 => Just(Some("Z3".to_string())),
        ]
    }

    fn arb_table() -> impl Strategy<Value = PairScoreTable> {
        prop::collection::vec((0usize..8, 0usize..8, 0.0f64..=100.0), 0..28).prop_map(|rows| {
            PairScoreTable::from_pairs(rows.into_iter().filter_map(|(a, b, v)| {
                CompatibilityPair::new(
                    ProfileCode::ALL[a],
                    ProfileCode::ALL[b],
                    CompatibilityScore::try_new(v).ok()?,
                )
                .ok()
            }))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_matrix_is_symmetric(codes in prop::collection::vec(arb_code(), 0..20), table in arb_table()) {
            let members: Vec<TeamMember> = codes
                .into_iter()
                .map(|code| TeamMember { id: TakerId::new(), exact_profile: code })
                .collect();

            let result = CompatibilityMatrixBuilder::build(&members, &table);

            for x in ProfileCode::ALL {
                prop_assert_eq!(result.matrix.get(x, x), None);
                for y in ProfileCode::ALL {
                    prop_assert_eq!(result.matrix.get(x, y), result.matrix.get(y, x));
                }
            }
            let n = result.member_count;
            prop_assert_eq!(result.pair_count, n * n.saturating_sub(1) / 2);
            prop_assert_eq!(result.member_count + result.excluded.len(), members.len());
            prop_assert_eq!(result.counts.total(), result.member_count);
            prop_assert!(result.team_score >= 0.0 && result.team_score <= 100.0);
        }
    }
}
