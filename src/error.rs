//! Error types for the hashcheck drift checker.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by a check run.
///
/// Everything below the configuration layer is unrecoverable: the binary
/// is the single top-level handler and aborts the run on the first error.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Unable to open hash file {}: {source}", path.display())]
    ManifestOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read hash file {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to traverse check directory {}: {source}", path.display())]
    DirNotTraversable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to hash {}: {source}", path.display())]
    Hash {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for CheckError {
    fn from(err: config::ConfigError) -> Self {
        CheckError::Config(err.to_string())
    }
}
