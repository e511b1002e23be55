/// Artifact storage port trait
///
/// Defines the interface for persisting pipeline output.
/// Implementation: filesystem writer with a fixed target directory
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Port trait for artifact persistence
pub trait ArtifactStorePort: Send + Sync {
    /// Persist `content` as `filename` under the store's directory,
    /// replacing any existing file of that name. Returns the full path.
    fn write(&self, filename: &str, content: &str) -> Result<PathBuf>;

    /// Directory this store writes into.
    fn directory(&self) -> &Path;
}
