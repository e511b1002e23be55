//! Local whisper transcription service
//!
//! Implements the TranscriberPort with whisper.cpp via whisper-rs. The model
//! is loaded eagerly at construction, which is the most expensive operation
//! in the program; decoding and inference run on a blocking worker thread so
//! the runtime stays responsive.

use crate::adapters::asr::decoder;
use crate::error::{AppError, Result};
use crate::ports::transcription::TranscriberPort;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

/// Speech-to-text engine backed by a locally loaded whisper model
pub struct WhisperTranscriber {
    context: Arc<WhisperContext>,
}

impl WhisperTranscriber {
    /// Load the whisper model at `model_path`. Expect this to take seconds.
    pub fn new(model_path: &Path) -> Result<Self> {
        if !model_path.exists() {
            return Err(AppError::Transcription(format!(
                "whisper model not found at: {}",
                model_path.display()
            )));
        }
        let path_str = model_path
            .to_str()
            .ok_or_else(|| AppError::Transcription("invalid model path".to_string()))?;

        log::info!("Loading whisper model from {}", model_path.display());
        let context =
            WhisperContext::new_with_params(path_str, WhisperContextParameters::default())
                .map_err(|e| {
                    AppError::Transcription(format!("failed to load whisper model: {}", e))
                })?;
        log::info!("Whisper model loaded");

        Ok(Self {
            context: Arc::new(context),
        })
    }

    fn run_inference(context: &WhisperContext, samples: &[f32]) -> Result<String> {
        let mut state = context.create_state().map_err(|e| {
            AppError::Transcription(format!("failed to create whisper state: {}", e))
        })?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 0 });
        params.set_language(Some("auto"));
        params.set_translate(false);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_n_threads(inference_threads());

        state
            .full(params, samples)
            .map_err(|e| AppError::Transcription(format!("whisper inference failed: {}", e)))?;

        let mut text = String::new();
        for seg_idx in 0..state.full_n_segments() {
            let segment = match state.get_segment(seg_idx) {
                Some(segment) => segment,
                None => continue,
            };
            match segment.to_str() {
                Ok(piece) => text.push_str(piece),
                Err(_) => continue,
            }
        }

        Ok(text.trim().to_string())
    }
}

#[async_trait]
impl TranscriberPort for WhisperTranscriber {
    async fn transcribe_file(&self, audio_path: &Path) -> Result<String> {
        let context = Arc::clone(&self.context);
        let path = audio_path.to_path_buf();

        let text = tokio::task::spawn_blocking(move || -> Result<String> {
            let samples = decoder::decode_to_pcm(&path)?;
            Self::run_inference(&context, &samples)
        })
        .await
        .map_err(|e| AppError::Transcription(format!("transcription task failed: {}", e)))??;

        log::info!("Transcription produced {} characters", text.len());
        Ok(text)
    }

    fn provider_name(&self) -> &str {
        "whisper.cpp"
    }
}

fn inference_threads() -> i32 {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(4) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_nonexistent_model_returns_error() {
        let result = WhisperTranscriber::new(Path::new("/nonexistent/ggml-base.bin"));
        let err = result.err().expect("expected an error");
        assert!(matches!(err, AppError::Transcription(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_inference_threads_bounded() {
        let threads = inference_threads();
        assert!((1..=4).contains(&threads));
    }
}
