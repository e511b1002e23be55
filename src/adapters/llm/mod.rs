//! LLM service adapters
//!
//! Implementations of the SummarizerPort trait for remote providers.

pub mod openai;

pub use openai::OpenAiSummarizer;
