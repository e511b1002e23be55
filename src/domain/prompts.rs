//! Prompt templates for transcript summarization

/// Fixed prompts sent with every summarization request
pub struct PromptTemplates;

impl PromptTemplates {
    /// System instruction for the summarization request.
    pub fn summary_system() -> &'static str {
        "You are an assistant that summarizes texts."
    }

    /// User message template; `{transcript}` is replaced with the transcript text.
    pub fn summary_user() -> &'static str {
        "Summarize the following text: {transcript}"
    }

    /// Render the user message for a transcript.
    pub fn render_summary_user(transcript: &str) -> String {
        Self::summary_user().replace("{transcript}", transcript)
    }
}
