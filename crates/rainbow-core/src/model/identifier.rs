use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Separator between identifier fields. Never valid inside a field segment.
pub const DELIMITER: char = '-';

/// Width of the zero-padded visible number.
pub const SEQUENCE_WIDTH: usize = 7;

/// Accepted visible numbers.
pub const SEQUENCE_RANGE: RangeInclusive<i64> = 1..=9_999_999;

/// Range random visible numbers are drawn from, so generated ones always
/// use all seven digits.
pub const GENERATED_SEQUENCE_RANGE: RangeInclusive<u32> = 1_000_000..=9_999_999;

/// prefix + sequence + suffix
const MIN_SEGMENTS: usize = 3;

/// The visible number of an AI identifier, e.g. `0001721`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct SequenceNumber(u32);

impl SequenceNumber {
    pub fn new(n: i64) -> Result<Self, CoreError> {
        if !SEQUENCE_RANGE.contains(&n) {
            return Err(CoreError::InvalidSequence(format!(
                "{n} is outside {}..={}",
                SEQUENCE_RANGE.start(),
                SEQUENCE_RANGE.end()
            )));
        }
        Ok(Self(n as u32))
    }

    /// Parse textual input such as `"1721"` or `"0001721"`.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidSequence(format!(
                "'{s}' is not a positive integer"
            )));
        }
        let n: i64 = s
            .parse()
            .map_err(|_| CoreError::InvalidSequence(format!("'{s}' is out of range")))?;
        Self::new(n)
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(GENERATED_SEQUENCE_RANGE))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for SequenceNumber {
    type Error = CoreError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<SequenceNumber> for u32 {
    fn from(n: SequenceNumber) -> Self {
        n.0
    }
}

impl std::fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:0width$}", self.0, width = SEQUENCE_WIDTH)
    }
}

/// A structured AI identifier: `<prefix>-<sequence>-<suffix>`.
///
/// The prefix may span several delimited segments (`RC-AI`), and so may the
/// suffix (a hyphenated UUID). Prefix segments always start with a letter,
/// which keeps the first seven-digit segment unambiguous when parsing.
///
/// Serializes as the formatted string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier {
    pub prefix: String,
    pub sequence_number: SequenceNumber,
    pub suffix: String,
}

impl Identifier {
    pub fn new(prefix: &str, sequence_number: i64, suffix: &str) -> Result<Self, CoreError> {
        validate_prefix(prefix)?;
        validate_suffix(suffix)?;
        Ok(Self {
            prefix: prefix.to_string(),
            sequence_number: SequenceNumber::new(sequence_number)?,
            suffix: suffix.to_string(),
        })
    }

    /// Split an identifier string back into its fields. Returns `None` for
    /// anything that is not a well-formed identifier.
    pub fn parse(s: &str) -> Option<Self> {
        let segments: Vec<&str> = s.split(DELIMITER).collect();
        if segments.len() < MIN_SEGMENTS {
            return None;
        }

        let seq_pos = segments
            .iter()
            .skip(1)
            .position(|seg| is_sequence_segment(seg))?
            + 1;

        let prefix = segments[..seq_pos].join("-");
        let suffix = segments[seq_pos + 1..].join("-");
        if validate_prefix(&prefix).is_err() || validate_suffix(&suffix).is_err() {
            return None;
        }
        let sequence_number = SequenceNumber::parse(segments[seq_pos]).ok()?;

        Some(Self {
            prefix,
            sequence_number,
            suffix,
        })
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{DELIMITER}{}{DELIMITER}{}",
            self.prefix, self.sequence_number, self.suffix
        )
    }
}

impl TryFrom<String> for Identifier {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or(CoreError::InvalidIdentifier(s))
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.to_string()
    }
}

/// Result of generating a new identifier, shaped like the backend's
/// identifier-generation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedIdentifier {
    pub id: String,
    pub visible_number: SequenceNumber,
    pub uuid: String,
    pub created_at: DateTime<Utc>,
}

fn is_sequence_segment(seg: &str) -> bool {
    seg.len() == SEQUENCE_WIDTH && seg.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn validate_prefix(prefix: &str) -> Result<(), CoreError> {
    if prefix.is_empty() {
        return Err(CoreError::InvalidPrefix("prefix must not be empty".into()));
    }
    for seg in prefix.split(DELIMITER) {
        let starts_with_letter = seg.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_with_letter || !seg.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CoreError::InvalidPrefix(format!(
                "'{prefix}': each segment must be alphanumeric and start with a letter"
            )));
        }
    }
    Ok(())
}

fn validate_suffix(suffix: &str) -> Result<(), CoreError> {
    if suffix.is_empty() {
        return Err(CoreError::InvalidSuffix("suffix must not be empty".into()));
    }
    if suffix
        .split(DELIMITER)
        .any(|seg| seg.is_empty() || !seg.chars().all(|c| c.is_ascii_alphanumeric()))
    {
        return Err(CoreError::InvalidSuffix(format!(
            "'{suffix}': segments must be non-empty and alphanumeric"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_format_pads_sequence() {
        let id = Identifier::new("RC-AI", 1721, "53dfc98b").unwrap();
        assert_eq!(id.to_string(), "RC-AI-0001721-53dfc98b");
    }

    #[test]
    fn test_parse_known_identifier() {
        let id = Identifier::parse("RC-AI-0001721-53dfc98b").unwrap();
        assert_eq!(id.prefix, "RC-AI");
        assert_eq!(id.sequence_number.get(), 1721);
        assert_eq!(id.suffix, "53dfc98b");
    }

    #[test]
    fn test_parse_hyphenated_uuid_suffix() {
        let s = "RC-AI-1234567-0f8fad5b-d9cb-469f-a165-70867728950e";
        let id = Identifier::parse(s).unwrap();
        assert_eq!(id.suffix, "0f8fad5b-d9cb-469f-a165-70867728950e");
        assert_eq!(id.to_string(), s);
    }

    #[test]
    fn test_suffix_with_digit_segment_roundtrips() {
        let id = Identifier::new("RC-AI", 42, "1234567-abc").unwrap();
        assert_eq!(Identifier::parse(&id.to_string()), Some(id));
    }

    #[test]
    fn test_roundtrip_over_generated_fields() {
        let mut rng = StdRng::seed_from_u64(7);
        for prefix in ["RC", "RC-AI", "Org-Unit-X9"] {
            for _ in 0..50 {
                let n = rng.gen_range(1..=9_999_999i64);
                let suffix = uuid::Builder::from_random_bytes(rng.gen())
                    .into_uuid()
                    .as_simple()
                    .to_string();
                let id = Identifier::new(prefix, n, &suffix).unwrap();
                let parsed = Identifier::parse(&id.to_string()).unwrap();
                assert_eq!(parsed.prefix, prefix);
                assert_eq!(i64::from(parsed.sequence_number.get()), n);
                assert_eq!(parsed.suffix, suffix);
            }
        }
    }

    #[test]
    fn test_rejects_non_positive_sequence() {
        assert!(matches!(
            Identifier::new("RC-AI", 0, "abc"),
            Err(CoreError::InvalidSequence(_))
        ));
        assert!(matches!(
            Identifier::new("RC-AI", -5, "abc"),
            Err(CoreError::InvalidSequence(_))
        ));
        assert!(Identifier::new("RC-AI", 10_000_000, "abc").is_err());
    }

    #[test]
    fn test_sequence_parse_rejects_non_integers() {
        for bad in ["", "abc", "12.5", "-3", "1e3", "0"] {
            let err = SequenceNumber::parse(bad).unwrap_err();
            assert!(err.is_validation(), "{bad} should be a validation error");
        }
        assert_eq!(SequenceNumber::parse(" 0001721 ").unwrap().get(), 1721);
    }

    #[test]
    fn test_rejects_bad_prefix_and_suffix() {
        assert!(matches!(
            Identifier::new("", 1, "abc"),
            Err(CoreError::InvalidPrefix(_))
        ));
        assert!(matches!(
            Identifier::new("RC-1234567", 1, "abc"),
            Err(CoreError::InvalidPrefix(_))
        ));
        assert!(matches!(
            Identifier::new("RC--AI", 1, "abc"),
            Err(CoreError::InvalidPrefix(_))
        ));
        assert!(matches!(
            Identifier::new("RC-AI", 1, ""),
            Err(CoreError::InvalidSuffix(_))
        ));
        assert!(matches!(
            Identifier::new("RC-AI", 1, "ab_cd"),
            Err(CoreError::InvalidSuffix(_))
        ));
    }

    #[test]
    fn test_parse_returns_none_for_malformed_input() {
        for bad in [
            "",
            "RC",
            "RC-AI",
            "RC-AI-1234567",
            "RC-AI-1234567-",
            "RC-AI-123-abc",
            "1234567-abc-def",
            "RC-AI-0000000-abc",
            "RC-AI-1234567-ab cd",
        ] {
            assert_eq!(Identifier::parse(bad), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_random_sequence_uses_full_width() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let n = SequenceNumber::random(&mut rng);
            assert!(GENERATED_SEQUENCE_RANGE.contains(&n.get()));
            assert_eq!(n.to_string().len(), SEQUENCE_WIDTH);
        }
    }

    #[test]
    fn test_sequence_serde() {
        let n = SequenceNumber::new(1721).unwrap();
        assert_eq!(serde_json::to_string(&n).unwrap(), "1721");
        assert!(serde_json::from_str::<SequenceNumber>("0").is_err());
    }

    #[test]
    fn test_identifier_serde_validates() {
        let id = Identifier::new("RC-AI", 1721, "53dfc98b").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"RC-AI-0001721-53dfc98b\"");
        assert_eq!(serde_json::from_str::<Identifier>(&json).unwrap(), id);

        assert!(serde_json::from_str::<Identifier>("\"rc_ai-0001721-x\"").is_err());
        assert!(serde_json::from_str::<Identifier>("\"RC-AI-0001721-\"").is_err());
        let fields = r#"{"prefix": "1bad", "sequence_number": 1721, "suffix": "x"}"#;
        assert!(serde_json::from_str::<Identifier>(fields).is_err());
    }
}
