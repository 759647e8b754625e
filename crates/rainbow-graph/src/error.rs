use rainbow_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Layout driver failed: {0}")]
    Driver(String),
}

impl From<tokio::task::JoinError> for GraphError {
    fn from(e: tokio::task::JoinError) -> Self {
        GraphError::Driver(e.to_string())
    }
}
