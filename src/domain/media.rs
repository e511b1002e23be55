//! Input media validation
//!
//! The pipeline only accepts files whose extension is on the supported
//! list. Validation produces a `MediaSource`, so later stages never see an
//! unchecked path.

use crate::error::{AppError, Result};
use std::path::{Path, PathBuf};

/// File extensions accepted for transcription, lowercase.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "mp4", "mpeg", "mpga", "m4a", "wav", "webm"];

/// Returns true iff the path's extension is a supported format (case-insensitive).
pub fn is_supported_format(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// A validated input file: exists on disk and has a supported extension.
#[derive(Debug, Clone)]
pub struct MediaSource {
    path: PathBuf,
    base_name: String,
}

impl MediaSource {
    /// Validate `path` as pipeline input.
    ///
    /// Checks existence first, then the extension, so the error message
    /// matches what actually went wrong.
    pub fn validate(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(AppError::InvalidInput(format!(
                "the specified file does not exist: {}",
                path.display()
            )));
        }

        if !is_supported_format(path) {
            return Err(AppError::InvalidInput(format!(
                "unsupported file format: {}. Supported formats are: {}",
                path.display(),
                SUPPORTED_EXTENSIONS.join(", ")
            )));
        }

        // A path that passed the format check always has a stem.
        let base_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output")
            .to_string();

        Ok(Self {
            path: path.to_path_buf(),
            base_name,
        })
    }

    /// Path of the input file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Input filename with directory and extension stripped, used to derive
    /// artifact filenames.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }
}
