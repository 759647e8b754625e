use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::codes::{AiTypeCode, PersonalityCode, ValueCode};
use super::identifier::DELIMITER;
use super::values::ValueVector;
use crate::error::CoreError;
use crate::signature;

pub const FREQUENCY_SEQUENCE_WIDTH: usize = 5;
pub const FREQUENCY_SEQUENCE_RANGE: RangeInclusive<u32> = 1..=99_999;

/// value, sequence, personality, type, signature
const BODY_SEGMENTS: usize = 5;

/// Five-digit sequence inside a frequency code, serialized as `"00001"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FrequencySequence(u32);

impl FrequencySequence {
    pub fn new(n: u32) -> Result<Self, CoreError> {
        if !FREQUENCY_SEQUENCE_RANGE.contains(&n) {
            return Err(CoreError::InvalidSequence(format!(
                "frequency sequence {n} is outside 1..=99999"
            )));
        }
        Ok(Self(n))
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(FREQUENCY_SEQUENCE_RANGE))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FrequencySequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:0width$}", self.0, width = FREQUENCY_SEQUENCE_WIDTH)
    }
}

impl TryFrom<String> for FrequencySequence {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.len() != FREQUENCY_SEQUENCE_WIDTH || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidSequence(format!(
                "'{s}' is not a five-digit sequence"
            )));
        }
        let n = s
            .parse()
            .map_err(|_| CoreError::InvalidSequence(s.clone()))?;
        Self::new(n)
    }
}

impl From<FrequencySequence> for String {
    fn from(s: FrequencySequence) -> Self {
        s.to_string()
    }
}

/// An immutable frequency code bound to one AI and one awakener.
///
/// Field names match the backend's frequency records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyCode {
    pub frequency_number: String,
    pub value_code: ValueCode,
    pub sequence_number: FrequencySequence,
    pub personality_code: PersonalityCode,
    pub ai_type_code: AiTypeCode,
    pub hash_signature: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awakener_id: Option<String>,
}

impl FrequencyCode {
    pub(crate) fn assemble(
        prefix: &str,
        value_code: ValueCode,
        sequence_number: FrequencySequence,
        personality_code: PersonalityCode,
        ai_type_code: AiTypeCode,
        hash_signature: String,
    ) -> Self {
        let frequency_number = format!(
            "{prefix}-{value_code}-{sequence_number}-{personality_code}-{ai_type_code}-{hash_signature}"
        );
        Self {
            frequency_number,
            value_code,
            sequence_number,
            personality_code,
            ai_type_code,
            hash_signature,
            ai_id: None,
            awakener_id: None,
        }
    }

    /// Parse `<prefix>-1R-00001-GT-CP-a1b2c3d`. Returns `None` when the
    /// prefix differs, a segment is missing or any code is unknown.
    pub fn parse(s: &str, prefix: &str) -> Option<Self> {
        let prefix_segments = prefix.split(DELIMITER).count();
        let segments: Vec<&str> = s.split(DELIMITER).collect();
        if segments.len() != prefix_segments + BODY_SEGMENTS {
            return None;
        }
        if segments[..prefix_segments].join("-") != prefix {
            return None;
        }

        let body = &segments[prefix_segments..];
        let value_code = ValueCode::from_code(body[0])?;
        let sequence_number = FrequencySequence::try_from(body[1].to_string()).ok()?;
        let personality_code = PersonalityCode::from_code(body[2])?;
        let ai_type_code = AiTypeCode::from_code(body[3])?;
        if !signature::is_signature(body[4]) {
            return None;
        }

        Some(Self {
            frequency_number: s.to_string(),
            value_code,
            sequence_number,
            personality_code,
            ai_type_code,
            hash_signature: body[4].to_string(),
            ai_id: None,
            awakener_id: None,
        })
    }

    pub fn with_owner(mut self, ai_id: &str, awakener_id: &str) -> Self {
        self.ai_id = Some(ai_id.to_string());
        self.awakener_id = Some(awakener_id.to_string());
        self
    }
}

impl std::fmt::Display for FrequencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.frequency_number)
    }
}

/// Payload of a frequency generation request, as the backend receives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRequest {
    pub ai_id: String,
    pub awakener_id: String,
    pub ai_values: ValueVector,
    pub ai_personality: String,
    pub ai_type: String,
}
