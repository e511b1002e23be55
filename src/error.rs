/// Error types for Audio Scribe
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Audio decode error: {0}")]
    AudioDecode(String),

    #[error("Transcription service error: {0}")]
    Transcription(String),

    #[error("LLM service error: {0}")]
    Llm(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Process exit code for this error's failure category.
    ///
    /// Calling scripts can distinguish a missing credential (2) and a
    /// rejected input file (3) from a fatal pipeline error (1).
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) => 2,
            AppError::InvalidInput(_) => 3,
            _ => 1,
        }
    }
}
