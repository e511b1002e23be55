//! Runtime configuration
//!
//! All settings are resolved once at startup and passed explicitly into the
//! services that need them. There is no global credential state; the API key
//! lives in the summarizer that uses it.

use crate::error::{AppError, Result};
use crate::ports::LlmConfig;
use std::path::PathBuf;

/// Environment variable holding the summarization API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Directory transcripts are written to, relative to the working directory.
pub const TRANSCRIPT_DIR: &str = "audio_transcription";

/// Directory summaries are written to, relative to the working directory.
pub const SUMMARY_DIR: &str = "audio_summarize";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API key for the remote summarization service
    pub openai_api_key: String,

    /// Chat-completion request parameters
    pub llm: LlmConfig,

    /// Output directory for transcript artifacts
    pub transcript_dir: PathBuf,

    /// Output directory for summary artifacts
    pub summary_dir: PathBuf,
}

impl AppConfig {
    /// Build the configuration from the process environment.
    ///
    /// Fails when the API key variable is unset or blank; nothing else is
    /// read from the environment.
    pub fn from_env() -> Result<Self> {
        let openai_api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| AppError::Config(format!("{} is not set", API_KEY_VAR)))?;

        if openai_api_key.trim().is_empty() {
            return Err(AppError::Config(format!("{} is empty", API_KEY_VAR)));
        }

        Ok(Self {
            openai_api_key,
            llm: LlmConfig::default(),
            transcript_dir: PathBuf::from(TRANSCRIPT_DIR),
            summary_dir: PathBuf::from(SUMMARY_DIR),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Set/unset of the key variable is process-wide, so all from_env cases
    // run in a single test to avoid racing parallel tests.
    #[test]
    fn test_from_env() {
        std::env::remove_var(API_KEY_VAR);
        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        std::env::set_var(API_KEY_VAR, "  ");
        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        std::env::set_var(API_KEY_VAR, "sk-test");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.transcript_dir, PathBuf::from("audio_transcription"));
        assert_eq!(config.summary_dir, PathBuf::from("audio_summarize"));
        assert_eq!(config.llm.model, "gpt-4");
        assert_eq!(config.llm.max_tokens, Some(800));

        std::env::remove_var(API_KEY_VAR);
    }
}
