//! Frequency and profile codes.
//!
//! Four frequencies (`A`..`D`) each own two profiles (`A1`, `A2`, ...).
//! Declaration order of both enums is the canonical order: frequencies are
//! listed in tie-break priority, profiles in lexicographic order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the four top-level behavioral buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Frequency {
    A,
    B,
    C,
    D,
}

impl Frequency {
    /// All frequencies in tie-break priority order.
    pub const ALL: [Frequency; 4] = [Frequency::A, Frequency::B, Frequency::C, Frequency::D];

    /// Position of this frequency in [`Frequency::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The frequency's single-letter code.
    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::A => "A",
            Frequency::B => "B",
            Frequency::C => "C",
            Frequency::D => "D",
        }
    }

    /// The two profiles nested under this frequency.
    pub fn profiles(self) -> [ProfileCode; 2] {
        match self {
            Frequency::A => [ProfileCode::A1, ProfileCode::A2],
            Frequency::B => [ProfileCode::B1, ProfileCode::B2],
            Frequency::C => [ProfileCode::C1, ProfileCode::C2],
            Frequency::D => [ProfileCode::D1, ProfileCode::D2],
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(Frequency::A),
            'B' => Some(Frequency::B),
            'C' => Some(Frequency::C),
            'D' => Some(Frequency::D),
            _ => None,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Frequency::from_letter(letter).ok_or_else(|| {
                ValidationError::invalid_format("frequency", format!("unknown frequency '{}'", s))
            }),
            _ => Err(ValidationError::invalid_format(
                "frequency",
                format!("expected one of A, B, C, D, got '{}'", s),
            )),
        }
    }
}

/// One of the eight fine-grained profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProfileCode {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
    D1,
    D2,
}

impl ProfileCode {
    /// All profile codes in lexicographic order.
    pub const ALL: [ProfileCode; 8] = [
        ProfileCode::A1,
        ProfileCode::A2,
        ProfileCode::B1,
        ProfileCode::B2,
        ProfileCode::C1,
        ProfileCode::C2,
        ProfileCode::D1,
        ProfileCode::D2,
    ];

    /// Position of this code in [`ProfileCode::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The numbered form of this profile, `1..=8` (A1 = 1, D2 = 8).
    pub fn ordinal(self) -> u8 {
        self as u8 + 1
    }

    /// Looks up a profile from its numbered form.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        ordinal
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(usize::from(i)).copied())
    }

    /// The frequency this profile belongs to.
    pub fn frequency(self) -> Frequency {
        match self {
            ProfileCode::A1 | ProfileCode::A2 => Frequency::A,
            ProfileCode::B1 | ProfileCode::B2 => Frequency::B,
            ProfileCode::C1 | ProfileCode::C2 => Frequency::C,
            ProfileCode::D1 | ProfileCode::D2 => Frequency::D,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileCode::A1 => "A1",
            ProfileCode::A2 => "A2",
            ProfileCode::B1 => "B1",
            ProfileCode::B2 => "B2",
            ProfileCode::C1 => "C1",
            ProfileCode::C2 => "C2",
            ProfileCode::D1 => "D1",
            ProfileCode::D2 => "D2",
        }
    }

    /// Parses a stored profile label.
    ///
    /// Accepts the exact-key form (`A1`..`D2`) and the numbered form
    /// (`1`..`8`) that older tests store.
    pub fn parse_label(label: &str) -> Result<Self, ValidationError> {
        let trimmed = label.trim();
        if let Ok(ordinal) = trimmed.parse::<u8>() {
            return Self::from_ordinal(ordinal).ok_or_else(|| {
                ValidationError::invalid_format(
                    "profile",
                    format!("numbered profile must be 1..8, got {}", ordinal),
                )
            });
        }
        trimmed.parse()
    }

    fn from_parts(frequency: Frequency, variant: char) -> Option<Self> {
        let [first, second] = frequency.profiles();
        match variant {
            '1' => Some(first),
            '2' => Some(second),
            _ => None,
        }
    }
}

impl fmt::Display for ProfileCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileCode {
    type Err = ValidationError;

    /// Strict parse: exactly one letter `A`-`D` followed by one digit `1`-`2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let parsed = match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), Some(variant), None) => Frequency::from_letter(letter)
                .and_then(|frequency| ProfileCode::from_parts(frequency, variant)),
            _ => None,
        };
        parsed.ok_or_else(|| {
            ValidationError::invalid_format(
                "profile",
                format!("expected [A-D][1-2], got '{}'", s),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_priority_order_is_a_to_d() {
        let letters: Vec<&str> = Frequency::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(letters, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn frequency_parses_single_letters_only() {
        assert_eq!("C".parse::<Frequency>().unwrap(), Frequency::C);
        assert!("E".parse::<Frequency>().is_err());
        assert!("a".parse::<Frequency>().is_err());
        assert!("AB".parse::<Frequency>().is_err());
        assert!("".parse::<Frequency>().is_err());
    }

    #[test]
    fn every_profile_belongs_to_its_leading_letter() {
        for code in ProfileCode::ALL {
            assert_eq!(code.frequency().as_str(), &code.as_str()[..1]);
            assert!(code.frequency().profiles().contains(&code));
        }
    }

    #[test]
    fn profile_codes_are_lexicographically_ordered() {
        let mut labels: Vec<&str> = ProfileCode::ALL.iter().map(|c| c.as_str()).collect();
        let declared = labels.clone();
        labels.sort();
        assert_eq!(labels, declared);
        assert!(ProfileCode::A2 < ProfileCode::B1);
    }

    #[test]
    fn strict_parse_accepts_pattern() {
        assert_eq!("A1".parse::<ProfileCode>().unwrap(), ProfileCode::A1);
        assert_eq!("D2".parse::<ProfileCode>().unwrap(), ProfileCode::D2);
    }

    #[test]
    fn strict_parse_rejects_everything_else() {
        for bad in ["", "A", "A3", "E1", "a1", "A1 ", "A12", "1", "B0"] {
            assert!(bad.parse::<ProfileCode>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn ordinals_cover_one_to_eight() {
        assert_eq!(ProfileCode::A1.ordinal(), 1);
        assert_eq!(ProfileCode::D2.ordinal(), 8);
        for code in ProfileCode::ALL {
            assert_eq!(ProfileCode::from_ordinal(code.ordinal()), Some(code));
        }
        assert_eq!(ProfileCode::from_ordinal(0), None);
        assert_eq!(ProfileCode::from_ordinal(9), None);
    }

    #[test]
    fn parse_label_accepts_both_forms() {
        assert_eq!(ProfileCode::parse_label("B2").unwrap(), ProfileCode::B2);
        assert_eq!(ProfileCode::parse_label("4").unwrap(), ProfileCode::B2);
        assert_eq!(ProfileCode::parse_label(" 7 ").unwrap(), ProfileCode::D1);
        assert!(ProfileCode::parse_label("9").is_err());
        assert!(ProfileCode::parse_label("Z9").is_err());
    }

    #[test]
    fn codes_serialize_as_plain_strings() {
        assert_eq!(serde_json::to_string(&ProfileCode::C2).unwrap(), "\"C2\"");
        assert_eq!(serde_json::to_string(&Frequency::B).unwrap(), "\"B\"");
        let code: ProfileCode = serde_json::from_str("\"D1\"").unwrap();
        assert_eq!(code, ProfileCode::D1);
    }
}
