//! Error types for pdblink

use thiserror::Error;

/// Result type alias for shared pdblink operations
pub type Result<T> = std::result::Result<T, PdblinkError>;

/// Error type for the pieces shared across the workspace
#[derive(Error, Debug)]
pub enum PdblinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
