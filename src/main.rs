mod adapters;
mod config;
mod domain;
mod error;
mod pipeline;
mod ports;

use adapters::asr::{model, WhisperTranscriber};
use adapters::llm::OpenAiSummarizer;
use adapters::storage::FsArtifactStore;
use clap::Parser;
use config::AppConfig;
use domain::MediaSource;
use env_logger::Env;
use error::{AppError, Result};
use pipeline::Pipeline;
use ports::SummarizerPort;
use std::path::PathBuf;
use std::process;

/// Transcribe an audio/video file with a local whisper model and summarize
/// it with an LLM.
#[derive(Parser)]
#[command(name = "audio-scribe", version)]
struct Cli {
    /// Path to the audio or video file
    file_path: PathBuf,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        log::error!("{}", e);
        process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::from_env()?;

    // Validate before any service is constructed; rejected input must not
    // pay the model-load cost.
    let source = MediaSource::validate(&cli.file_path)?;

    let model_path = model::ensure_model().await?;
    let transcriber = WhisperTranscriber::new(&model_path)?;

    let summarizer = OpenAiSummarizer::new(config.openai_api_key.clone(), config.llm.clone());
    if !summarizer.is_configured() {
        return Err(AppError::Config(
            "summarization service has no API key".to_string(),
        ));
    }

    let transcript_store = FsArtifactStore::new(&config.transcript_dir)?;
    let summary_store = FsArtifactStore::new(&config.summary_dir)?;

    let pipeline = Pipeline::new(
        Box::new(transcriber),
        Box::new(summarizer),
        Box::new(transcript_store),
        Box::new(summary_store),
    );

    let outcome = pipeline.run(&source).await?;

    if let Some(e) = &outcome.transcription_error {
        log::warn!(
            "Transcript artifact is empty because transcription failed: {}",
            e
        );
    }
    if let Some(e) = &outcome.summarization_error {
        log::warn!(
            "Summary artifact is empty because summarization failed: {}",
            e
        );
    }
    log::info!("Transcript saved to {}", outcome.transcript_path.display());
    log::info!("Summary saved to {}", outcome.summary_path.display());

    Ok(())
}
