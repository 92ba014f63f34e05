use thiserror::Error;

/// Error type that captures store and persistence failures.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Malformed record line: {0}")]
    MalformedLine(String),
}

/// Failures surfaced while running a menu action.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("Input stream closed")]
    InputClosed,
}
