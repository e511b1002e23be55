//! OpenAI summarization adapter
//!
//! Implements the SummarizerPort against the chat-completions API with a
//! fixed prompt pair. One request per run, no retry, no transcript chunking;
//! an oversized transcript is passed through and the API's own limits decide.

use crate::domain::PromptTemplates;
use crate::error::{AppError, Result};
use crate::ports::llm::{LlmConfig, SummarizerPort};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Transcripts longer than this are likely to exceed the model context
/// window; the request is still sent, but we warn first.
const LARGE_TRANSCRIPT_CHARS: usize = 24_000;

/// Summarization service backed by OpenAI chat completions
pub struct OpenAiSummarizer {
    client: Client,
    api_key: String,
    config: LlmConfig,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiSummarizer {
    /// Create a summarizer with an explicit API key and request configuration.
    pub fn new(api_key: String, config: LlmConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            config,
        }
    }

    fn build_request(&self, transcript: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: PromptTemplates::summary_system().to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: PromptTemplates::render_summary_user(transcript),
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }
}

#[async_trait]
impl SummarizerPort for OpenAiSummarizer {
    async fn summarize(&self, transcript: &str) -> Result<String> {
        if transcript.len() > LARGE_TRANSCRIPT_CHARS {
            log::warn!(
                "Transcript is {} characters and may exceed the model's context window",
                transcript.len()
            );
        }

        let request_body = self.build_request(transcript);
        log::info!("Calling chat completion with model: {}", self.config.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", OPENAI_API_BASE))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("chat completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Llm(format!(
                "chat completion failed ({}): {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Llm(format!("failed to parse completion response: {}", e)))?;

        let summary = completion
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| AppError::Llm("no completion choices returned".to_string()))?;

        log::info!("Summarization produced {} characters", summary.len());
        Ok(summary)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
