/// Transcription service port trait
///
/// Defines the interface for speech-to-text engines.
/// Implementation: local whisper.cpp
use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Port trait for speech-to-text services
#[async_trait]
pub trait TranscriberPort: Send + Sync {
    /// Transcribe the audio track of a media file into plain text.
    async fn transcribe_file(&self, audio_path: &Path) -> Result<String>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}
