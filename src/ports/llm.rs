/// LLM service port trait
///
/// Defines the interface for the remote summarization service.
/// Implementation: OpenAI chat completions
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Configuration for summarization requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model name (e.g., "gpt-4")
    pub model: String,

    /// Temperature for generation (0.0 to 1.0); None leaves the API default
    pub temperature: Option<f32>,

    /// Maximum tokens in the generated summary
    pub max_tokens: Option<u32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4".to_string(),
            temperature: None,
            max_tokens: Some(800),
        }
    }
}

/// Port trait for summarization services
#[async_trait]
pub trait SummarizerPort: Send + Sync {
    /// Generate an abstractive summary of `transcript`.
    async fn summarize(&self, transcript: &str) -> Result<String>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is configured (has API key)
    fn is_configured(&self) -> bool;
}
