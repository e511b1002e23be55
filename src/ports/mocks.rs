//! Mock implementations for testing

use crate::error::{AppError, Result};
use crate::ports::llm::SummarizerPort;
use crate::ports::storage::ArtifactStorePort;
use crate::ports::transcription::TranscriberPort;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock transcriber returning a fixed text, or failing every call
pub struct MockTranscriber {
    text: Option<String>,
}

impl MockTranscriber {
    pub fn returning(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { text: None }
    }
}

#[async_trait]
impl TranscriberPort for MockTranscriber {
    async fn transcribe_file(&self, _audio_path: &Path) -> Result<String> {
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => Err(AppError::Transcription(
                "mock transcriber failure".to_string(),
            )),
        }
    }

    fn provider_name(&self) -> &str {
        "mock-transcriber"
    }
}

/// Mock summarizer returning a fixed summary, or failing every call.
/// Records the transcripts it was asked to summarize.
pub struct MockSummarizer {
    summary: Option<String>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockSummarizer {
    pub fn returning(summary: &str) -> Self {
        Self {
            summary: Some(summary.to_string()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            summary: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Transcripts passed to summarize(), in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummarizerPort for MockSummarizer {
    async fn summarize(&self, transcript: &str) -> Result<String> {
        self.requests.lock().unwrap().push(transcript.to_string());
        match &self.summary {
            Some(summary) => Ok(summary.clone()),
            None => Err(AppError::Llm("mock summarizer failure".to_string())),
        }
    }

    fn provider_name(&self) -> &str {
        "mock-summarizer"
    }

    fn is_configured(&self) -> bool {
        true
    }
}

/// Mock artifact store recording writes in memory
#[derive(Clone)]
pub struct MockArtifactStore {
    directory: PathBuf,
    writes: Arc<Mutex<Vec<(String, String)>>>,
    fail: bool,
}

impl MockArtifactStore {
    pub fn new(directory: &str) -> Self {
        Self {
            directory: PathBuf::from(directory),
            writes: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing(directory: &str) -> Self {
        Self {
            fail: true,
            ..Self::new(directory)
        }
    }

    /// (filename, content) pairs written so far, in call order.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().unwrap().clone()
    }
}

impl ArtifactStorePort for MockArtifactStore {
    fn write(&self, filename: &str, content: &str) -> Result<PathBuf> {
        if self.fail {
            return Err(AppError::Io(std::io::Error::other("mock write failure")));
        }
        self.writes
            .lock()
            .unwrap()
            .push((filename.to_string(), content.to_string()));
        Ok(self.directory.join(filename))
    }

    fn directory(&self) -> &Path {
        &self.directory
    }
}
