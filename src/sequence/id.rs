//! SequenceId: the canonical `A######` identifier

use super::SequenceError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Largest number that still renders as six digits
const MAX_NUMBER: u32 = 999_999;

/// Canonical OEIS identifier, `A` followed by six zero-padded digits
///
/// Serializes as a plain string (`"A000045"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SequenceId(String);

impl SequenceId {
    /// Build an ID from the numeric part, zero-padding to six digits
    pub fn from_number(number: u32) -> Result<Self, SequenceError> {
        if number > MAX_NUMBER {
            return Err(SequenceError::NumberOutOfRange(number));
        }
        Ok(Self(format!("A{:06}", number)))
    }

    /// Parse an ID such as `A000045`; surrounding whitespace is ignored
    pub fn parse(raw: &str) -> Result<Self, SequenceError> {
        let trimmed = raw.trim();
        let bytes = trimmed.as_bytes();
        let valid = bytes.len() == 7
            && bytes[0] == b'A'
            && bytes[1..].iter().all(|b| b.is_ascii_digit());
        if valid {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(SequenceError::InvalidId(raw.to_string()))
        }
    }

    /// The numeric part (`A000045` -> 45)
    pub fn number(&self) -> u32 {
        // Digits are validated on construction.
        self.0[1..].parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The OEIS search query that selects exactly this entry
    pub fn search_query(&self) -> String {
        format!("id:{}", self.0)
    }
}

impl std::fmt::Display for SequenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SequenceId {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SequenceId {
    type Error = SequenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SequenceId> for String {
    fn from(id: SequenceId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_number_pads_to_six_digits() {
        assert_eq!(SequenceId::from_number(45).unwrap().as_str(), "A000045");
        assert_eq!(SequenceId::from_number(0).unwrap().as_str(), "A000000");
        assert_eq!(SequenceId::from_number(999_999).unwrap().as_str(), "A999999");
    }

    #[test]
    fn from_number_rejects_seven_digits() {
        assert_eq!(
            SequenceId::from_number(1_000_000),
            Err(SequenceError::NumberOutOfRange(1_000_000))
        );
    }

    #[test]
    fn parse_accepts_canonical_form() {
        let id: SequenceId = " A000045\n".parse().unwrap();
        assert_eq!(id.as_str(), "A000045");
        assert_eq!(id.number(), 45);
    }

    #[test]
    fn parse_rejects_malformed_ids() {
        for raw in ["", "A00045", "A0000456", "a000045", "B000045", "A00004x", "A０00045"] {
            assert!(SequenceId::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn serde_round_trip_as_plain_string() {
        let id = SequenceId::from_number(108).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"A000108\"");
        let back: SequenceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<SequenceId>("\"oops\"").is_err());
    }

    #[test]
    fn search_query_uses_id_prefix() {
        let id = SequenceId::from_number(45).unwrap();
        assert_eq!(id.search_query(), "id:A000045");
    }
}
