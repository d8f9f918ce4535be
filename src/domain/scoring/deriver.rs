//! Profile Deriver - Resolves frequency totals into a single exact profile.

use serde::{Deserialize, Serialize};

use super::taxonomy::{Frequency, ProfileCode};
use super::totals::FrequencyTotals;

/// The resolved `(top frequency, exact profile)` for one taker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DerivedResult {
    pub top_frequency: Frequency,
    pub exact_profile: ProfileCode,
}

/// Profile derivation from frequency totals.
pub struct ProfileDeriver;

impl ProfileDeriver {
    /// Returns the frequency with the greatest total.
    ///
    /// Ties go to the earliest frequency in `[A, B, C, D]`.
    pub fn top_frequency(totals: &FrequencyTotals) -> Frequency {
        let mut top = Frequency::A;
        for frequency in Frequency::ALL {
            if totals.get(frequency) > totals.get(top) {
                top = frequency;
            }
        }
        top
    }

    /// Derives the top frequency and the exact profile under it.
    ///
    /// The sub-profile is chosen by comparing two neighbor frequencies
    /// specific to each top frequency (ties favor the `1` variant):
    ///
    /// | top | `1` when  | otherwise |
    /// |-----|-----------|-----------|
    /// | A   | B >= C    | A2        |
    /// | B   | A >= D    | B2        |
    /// | C   | D >= A    | C2        |
    /// | D   | C >= B    | D2        |
    pub fn derive_exact(totals: &FrequencyTotals) -> DerivedResult {
        let top = Self::top_frequency(totals);
        let (left, right) = match top {
            Frequency::A => (Frequency::B, Frequency::C),
            Frequency::B => (Frequency::A, Frequency::D),
            Frequency::C => (Frequency::D, Frequency::A),
            Frequency::D => (Frequency::C, Frequency::B),
        };

        let [first, second] = top.profiles();
        let exact = if totals.get(left) >= totals.get(right) {
            first
        } else {
            second
        };

        DerivedResult {
            top_frequency: top,
            exact_profile: exact,
        }
    }
}
