//! Errors surfaced by the site crate.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    /// The results chart only offers two datasets.
    #[error("Dataset index {index} out of range (have {len})")]
    DatasetOutOfRange { index: usize, len: usize },
    #[error("Failed to read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to write config {path:?}: {source}")]
    ConfigWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Config already exists at {path:?} (use --force to overwrite)")]
    ConfigExists { path: PathBuf },
    #[error("No suitable config directory available")]
    NoConfigDir,
    #[error("Failed to encode JSON: {0}")]
    Encode(#[from] serde_json::Error),
}
