//! Error types for pdblink ingestion
//!
//! Every upstream call returns these errors; the pipeline stages turn them into absent
//! values, so only persistence and configuration failures ever reach the user as errors.

use pdblink_common::PdblinkError;
use thiserror::Error;

/// Result type alias for ingestion operations
pub type Result<T> = std::result::Result<T, IngestError>;

/// Error type for upstream lookups and pipeline persistence
#[derive(Error, Debug)]
pub enum IngestError {
    /// Connection, timeout or body-read failure
    #[error("Network request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] PdblinkError),

    #[error("Configuration error: {0}. Check your environment variables or command-line flags.")]
    Config(String),
}

impl IngestError {
    pub fn status(url: impl Into<String>, status: reqwest::StatusCode) -> Self {
        Self::Status {
            url: url.into(),
            status: status.as_u16(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
