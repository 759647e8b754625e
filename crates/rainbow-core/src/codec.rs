use chrono::{DateTime, Utc};
use rand::Rng;

use crate::config::CodecConfig;
use crate::error::CoreError;
use crate::model::identifier::validate_prefix;
use crate::model::*;
use crate::signature;

/// Builds and parses AI identifiers and frequency codes.
///
/// Holds only the configured prefixes; randomness and the clock are passed
/// in per call so results are reproducible under a seeded RNG.
#[derive(Debug, Clone, Default)]
pub struct IdentifierCodec {
    config: CodecConfig,
}

impl IdentifierCodec {
    pub fn new(config: CodecConfig) -> Result<Self, CoreError> {
        validate_prefix(&config.id_prefix)?;
        validate_prefix(&config.frequency_prefix)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Format an identifier with the configured prefix.
    pub fn format_identifier(&self, sequence_number: i64, suffix: &str) -> Result<String, CoreError> {
        format_identifier(&self.config.id_prefix, sequence_number, suffix)
    }

    pub fn parse_identifier(&self, s: &str) -> Option<Identifier> {
        parse_identifier(s)
    }

    /// Create a fresh identifier. Without a visible number one is drawn from
    /// the seven-digit range; the suffix is a random UUID in simple form.
    pub fn generate_identifier<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        visible_number: Option<i64>,
        now: DateTime<Utc>,
    ) -> Result<GeneratedIdentifier, CoreError> {
        let visible_number = match visible_number {
            Some(n) => SequenceNumber::new(n)?,
            None => SequenceNumber::random(rng),
        };
        let uuid = uuid::Builder::from_random_bytes(rng.gen())
            .into_uuid()
            .as_simple()
            .to_string();
        let id = Identifier {
            prefix: self.config.id_prefix.clone(),
            sequence_number: visible_number,
            suffix: uuid.clone(),
        };
        tracing::debug!(id = %id, "Generated identifier");
        Ok(GeneratedIdentifier {
            id: id.to_string(),
            visible_number,
            uuid,
            created_at: now,
        })
    }

    /// Derive a frequency code for an (AI, awakener) pair.
    ///
    /// The dominant value dimension becomes the value code, a fresh sequence
    /// is drawn from `rng`, and the signature covers every other field plus
    /// the millisecond timestamp of `now`.
    pub fn format_frequency_code<R: Rng + ?Sized>(
        &self,
        request: &FrequencyRequest,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<FrequencyCode, CoreError> {
        if request.ai_id.trim().is_empty() {
            return Err(CoreError::MissingField("ai_id"));
        }
        if request.awakener_id.trim().is_empty() {
            return Err(CoreError::MissingField("awakener_id"));
        }
        let personality: PersonalityCode = request.ai_personality.parse()?;
        let ai_type: AiTypeCode = request.ai_type.parse()?;
        let value = request.ai_values.dominant();
        let sequence = FrequencySequence::random(rng);

        let sequence_text = sequence.to_string();
        let timestamp = now.timestamp_millis().to_string();
        let hash = signature::hash_signature(&[
            request.ai_id.as_str(),
            request.awakener_id.as_str(),
            value.code(),
            sequence_text.as_str(),
            personality.code(),
            ai_type.code(),
            timestamp.as_str(),
        ]);

        let code = FrequencyCode::assemble(
            &self.config.frequency_prefix,
            value,
            sequence,
            personality,
            ai_type,
            hash,
        )
        .with_owner(&request.ai_id, &request.awakener_id);
        tracing::debug!(
            frequency = %code,
            ai_id = %request.ai_id,
            "Generated frequency code"
        );
        Ok(code)
    }

    pub fn parse_frequency_code(&self, s: &str) -> Option<FrequencyCode> {
        FrequencyCode::parse(s, &self.config.frequency_prefix)
    }
}

/// `format_identifier("RC-AI", 1721, "53dfc98b")` yields
/// `"RC-AI-0001721-53dfc98b"`.
pub fn format_identifier(prefix: &str, sequence_number: i64, suffix: &str) -> Result<String, CoreError> {
    Identifier::new(prefix, sequence_number, suffix).map(|id| id.to_string())
}

/// `None` means unparseable; it is never an error.
pub fn parse_identifier(s: &str) -> Option<Identifier> {
    let parsed = Identifier::parse(s);
    if parsed.is_none() {
        tracing::debug!("Unparseable identifier: {s:?}");
    }
    parsed
}
