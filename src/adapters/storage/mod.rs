//! Artifact storage adapters

pub mod fs;

pub use fs::FsArtifactStore;
