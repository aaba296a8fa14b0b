//! Error types for headerscan

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a scan
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Progress file not found: {}", path.display())]
    ProgressNotFound { path: PathBuf },

    #[error("Failed to read progress file {}", path.display())]
    ProgressRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}
