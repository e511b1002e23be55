//! Whisper model resolution
//!
//! The transcriber uses the fixed "base" whisper.cpp model. Weights are
//! looked up in the user cache directory and downloaded from the whisper.cpp
//! model repository on first use.

use crate::error::{AppError, Result};
use std::path::{Path, PathBuf};

/// Filename of the ggml weights for the base model variant.
pub const WHISPER_MODEL_NAME: &str = "ggml-base.bin";

/// Download location for the base model weights.
pub const WHISPER_MODEL_URL: &str =
    "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-base.bin";

/// Resolve the whisper model file, checking the cache before downloading.
pub async fn ensure_model() -> Result<PathBuf> {
    let cache_dir = model_cache_dir()?;
    let model_path = cache_dir.join(WHISPER_MODEL_NAME);
    if model_path.exists() {
        return Ok(model_path);
    }

    std::fs::create_dir_all(&cache_dir)?;
    log::info!(
        "Whisper model not cached, downloading to {}",
        model_path.display()
    );
    download(WHISPER_MODEL_URL, &model_path).await?;
    log::info!("Whisper model downloaded");

    Ok(model_path)
}

/// Platform cache directory for model weights, e.g.
/// `~/.cache/audio-scribe/models/` on Linux.
pub fn model_cache_dir() -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|dir| dir.join("audio-scribe").join("models"))
        .ok_or_else(|| AppError::Config("could not determine cache directory".to_string()))
}

async fn download(url: &str, dest: &Path) -> Result<()> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| AppError::Transcription(format!("model download failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(AppError::Transcription(format!(
            "model download failed: HTTP {}",
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::Transcription(format!("model download failed: {}", e)))?;

    // Write to a temp file first, then rename for atomicity
    let temp_path = dest.with_extension("part");
    tokio::fs::write(&temp_path, &bytes).await?;
    tokio::fs::rename(&temp_path, dest).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_cache_dir_shape() {
        let dir = model_cache_dir().unwrap();
        assert!(dir.to_string_lossy().contains("audio-scribe"));
        assert!(dir.ends_with("audio-scribe/models"));
    }

    #[tokio::test]
    async fn test_download_invalid_url_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("model.bin");

        let result = download("http://invalid.nonexistent.example.com/model", &dest).await;
        assert!(result.is_err());
        // Neither the dest nor the .part file may exist after failure.
        assert!(!dest.exists());
        assert!(!dest.with_extension("part").exists());
    }
}
