use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid sequence number: {0}")]
    InvalidSequence(String),

    #[error("Invalid identifier prefix: {0}")]
    InvalidPrefix(String),

    #[error("Invalid identifier suffix: {0}")]
    InvalidSuffix(String),

    #[error("Not a well-formed identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Unknown personality code: {0}")]
    UnknownPersonality(String),

    #[error("Unknown AI type code: {0}")]
    UnknownType(String),

    #[error("Unknown value code: {0}")]
    UnknownValueCode(String),

    #[error("Value score for {code} must be within 0..=100, got {score}")]
    InvalidValueScore { code: String, score: i64 },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl CoreError {
    /// True for malformed caller input, which is always recoverable by
    /// asking for a corrected value.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidSequence(_)
                | CoreError::InvalidPrefix(_)
                | CoreError::InvalidSuffix(_)
                | CoreError::InvalidIdentifier(_)
                | CoreError::UnknownPersonality(_)
                | CoreError::UnknownType(_)
                | CoreError::UnknownValueCode(_)
                | CoreError::InvalidValueScore { .. }
                | CoreError::MissingField(_)
        )
    }
}
