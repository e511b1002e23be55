//! Filesystem artifact store
//!
//! Persists pipeline output as plain text files under a fixed directory.
//! Writes are create-or-truncate with no retry; a failed write propagates
//! to the caller.

use crate::error::Result;
use crate::ports::storage::ArtifactStorePort;
use std::fs;
use std::path::{Path, PathBuf};

/// Artifact store writing text files under one directory
pub struct FsArtifactStore {
    directory: PathBuf,
}

impl FsArtifactStore {
    /// Create a store for `directory`, creating it (and any missing
    /// parents) if absent. Idempotent over an existing directory.
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self> {
        let directory = directory.into();
        fs::create_dir_all(&directory)?;
        Ok(Self { directory })
    }
}

impl ArtifactStorePort for FsArtifactStore {
    fn write(&self, filename: &str, content: &str) -> Result<PathBuf> {
        let path = self.directory.join(filename);
        fs::write(&path, content)?;
        log::info!("Content saved to {}", path.display());
        Ok(path)
    }

    fn directory(&self) -> &Path {
        &self.directory
    }
}
