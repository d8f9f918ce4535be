//! Fixed-shape score tallies.
//!
//! Both tallies always carry every key. They serialize as JSON objects keyed
//! by code (`{"A": 8, "B": 2, ...}`) and deserialize with missing keys as zero.

use serde::{Deserialize, Serialize};

use super::taxonomy::{Frequency, ProfileCode};

/// Per-frequency totals, one bucket for each of `A`..`D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "FrequencyTotalsRepr", into = "FrequencyTotalsRepr")]
pub struct FrequencyTotals([u64; 4]);

impl FrequencyTotals {
    /// All buckets zero.
    pub const ZERO: Self = Self([0; 4]);

    /// Builds totals from `(frequency, total)` pairs; unlisted frequencies are zero.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Frequency, u64)>) -> Self {
        let mut totals = Self::ZERO;
        for (frequency, value) in pairs {
            totals.0[frequency.index()] = value;
        }
        totals
    }

    pub fn get(&self, frequency: Frequency) -> u64 {
        self.0[frequency.index()]
    }

    pub fn add(&mut self, frequency: Frequency, points: u64) {
        let slot = &mut self.0[frequency.index()];
        *slot = slot.saturating_add(points);
    }

    /// Iterates every bucket in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Frequency, u64)> + '_ {
        Frequency::ALL.iter().map(move |f| (*f, self.get(*f)))
    }

    pub fn sum(&self) -> u64 {
        self.0.iter().sum()
    }
}

/// Per-profile totals, one bucket for each of `A1`..`D2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "ProfileTotalsRepr", into = "ProfileTotalsRepr")]
pub struct ProfileTotals([u64; 8]);

impl ProfileTotals {
    /// All buckets zero.
    pub const ZERO: Self = Self([0; 8]);

    /// Builds totals from `(profile, total)` pairs; unlisted profiles are zero.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (ProfileCode, u64)>) -> Self {
        let mut totals = Self::ZERO;
        for (profile, value) in pairs {
            totals.0[profile.index()] = value;
        }
        totals
    }

    pub fn get(&self, profile: ProfileCode) -> u64 {
        self.0[profile.index()]
    }

    pub fn add(&mut self, profile: ProfileCode, points: u64) {
        let slot = &mut self.0[profile.index()];
        *slot = slot.saturating_add(points);
    }

    /// Iterates every bucket in lexicographic code order.
    pub fn iter(&self) -> impl Iterator<Item = (ProfileCode, u64)> + '_ {
        ProfileCode::ALL.iter().map(move |p| (*p, self.get(*p)))
    }

    /// Totals keyed by numbered profile (`1..=8`).
    pub fn by_ordinal(&self) -> [(u8, u64); 8] {
        let mut out = [(0u8, 0u64); 8];
        for (slot, (code, value)) in out.iter_mut().zip(self.iter()) {
            *slot = (code.ordinal(), value);
        }
        out
    }

    pub fn sum(&self) -> u64 {
        self.0.iter().sum()
    }
}

/// Output of answer aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScoreTotals {
    pub frequency_totals: FrequencyTotals,
    pub profile_totals: ProfileTotals,
}

impl ScoreTotals {
    /// Every bucket zero.
    pub const ZERO: Self = Self {
        frequency_totals: FrequencyTotals::ZERO,
        profile_totals: ProfileTotals::ZERO,
    };
}

#[derive(Serialize, Deserialize)]
struct FrequencyTotalsRepr {
    #[serde(rename = "A", default)]
    a: u64,
    #[serde(rename = "B", default)]
    b: u64,
    #[serde(rename = "C", default)]
    c: u64,
    #[serde(rename = "D", default)]
    d: u64,
}

impl From<FrequencyTotalsRepr> for FrequencyTotals {
    fn from(r: FrequencyTotalsRepr) -> Self {
        Self([r.a, r.b, r.c, r.d])
    }
}

impl From<FrequencyTotals> for FrequencyTotalsRepr {
    fn from(t: FrequencyTotals) -> Self {
        let [a, b, c, d] = t.0;
        Self { a, b, c, d }
    }
}

#[derive(Serialize, Deserialize)]
struct ProfileTotalsRepr {
    #[serde(rename = "A1", default)]
    a1: u64,
    #[serde(rename = "A2", default)]
    a2: u64,
    #[serde(rename = "B1", default)]
    b1: u64,
    #[serde(rename = "B2", default)]
    b2: u64,
    #[serde(rename = "C1", default)]
    c1: u64,
    #[serde(rename = "C2", default)]
    c2: u64,
    #[serde(rename = "D1", default)]
    d1: u64,
    #[serde(rename = "D2", default)]
    d2: u64,
}

impl From<ProfileTotalsRepr> for ProfileTotals {
    fn from(r: ProfileTotalsRepr) -> Self {
        Self([r.a1, r.a2, r.b1, r.b2, r.c1, r.c2, r.d1, r.d2])
    }
}

impl From<ProfileTotals> for ProfileTotalsRepr {
    fn from(t: ProfileTotals) -> Self {
        let [a1, a2, b1, b2, c1, c2, d1, d2] = t.0;
        Self {
            a1,
            a2,
            b1,
            b2,
            c1,
            c2,
            d1,
            d2,
        }
    }
}
