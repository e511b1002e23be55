//! Transcribe-then-summarize pipeline
//!
//! Sequential stages over a validated input: transcribe, persist the
//! transcript, summarize, persist the summary. The two service stages catch
//! their own failures and degrade to empty text so a run always produces
//! both artifacts; an artifact write is the only fatal mid-pipeline error.

use crate::domain::naming;
use crate::domain::MediaSource;
use crate::error::Result;
use crate::ports::{ArtifactStorePort, SummarizerPort, TranscriberPort};
use std::path::PathBuf;

const TRANSCRIPT_SUFFIX: &str = "transcription";
const SUMMARY_SUFFIX: &str = "summary";
const ARTIFACT_EXTENSION: &str = "txt";

/// Where a run's artifacts ended up, plus the errors (if any) that were
/// degraded to empty output along the way. An empty artifact with a `None`
/// error means the service legitimately produced nothing.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub transcript_path: PathBuf,
    pub summary_path: PathBuf,
    pub transcription_error: Option<String>,
    pub summarization_error: Option<String>,
}

/// Drives the transcription and summarization services and persists their
/// output
pub struct Pipeline {
    transcriber: Box<dyn TranscriberPort>,
    summarizer: Box<dyn SummarizerPort>,
    transcript_store: Box<dyn ArtifactStorePort>,
    summary_store: Box<dyn ArtifactStorePort>,
}

impl Pipeline {
    pub fn new(
        transcriber: Box<dyn TranscriberPort>,
        summarizer: Box<dyn SummarizerPort>,
        transcript_store: Box<dyn ArtifactStorePort>,
        summary_store: Box<dyn ArtifactStorePort>,
    ) -> Self {
        Self {
            transcriber,
            summarizer,
            transcript_store,
            summary_store,
        }
    }

    /// Run all stages for a validated input file.
    pub async fn run(&self, source: &MediaSource) -> Result<PipelineOutcome> {
        log::debug!(
            "Artifact directories: {} and {}",
            self.transcript_store.directory().display(),
            self.summary_store.directory().display()
        );

        log::info!(
            "Transcription in progress via {}...",
            self.transcriber.provider_name()
        );
        let (transcript, transcription_error) =
            match self.transcriber.transcribe_file(source.path()).await {
                Ok(text) => (text, None),
                Err(e) => {
                    log::error!("Error transcribing audio: {}", e);
                    (String::new(), Some(e.to_string()))
                }
            };
        log::info!("Transcription complete");

        let transcript_name =
            naming::output_filename(source.base_name(), TRANSCRIPT_SUFFIX, ARTIFACT_EXTENSION);
        let transcript_path = self.transcript_store.write(&transcript_name, &transcript)?;

        log::info!(
            "Summarization in progress via {}...",
            self.summarizer.provider_name()
        );
        let (summary, summarization_error) = match self.summarizer.summarize(&transcript).await {
            Ok(text) => (text, None),
            Err(e) => {
                log::error!("Error summarizing text: {}", e);
                (String::new(), Some(e.to_string()))
            }
        };
        log::info!("Summarization complete");

        let summary_name =
            naming::output_filename(source.base_name(), SUMMARY_SUFFIX, ARTIFACT_EXTENSION);
        let summary_path = self.summary_store.write(&summary_name, &summary)?;

        Ok(PipelineOutcome {
            transcript_path,
            summary_path,
            transcription_error,
            summarization_error,
        })
    }
}
