//! pdblink Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared output types, tabular persistence and error handling for the pdblink project.
//!
//! # Overview
//!
//! This crate provides the pieces every pdblink workspace member relies on:
//!
//! - **Error Handling**: [`PdblinkError`] and the [`Result`] alias
//! - **Types**: the flat rows the pipeline persists (download outcomes, biological
//!   summaries, cofactor chemistry)
//! - **Tabular output**: a CSV writer that turns a slice of rows into one file
//! - **Logging**: tracing subscriber setup shared by every binary
//!
//! # Example
//!
//! ```no_run
//! use pdblink_common::tabular::write_table;
//! use pdblink_common::types::{DownloadRecord, DownloadStatus};
//!
//! fn persist() -> pdblink_common::Result<()> {
//!     let rows = vec![DownloadRecord::new("1tup", DownloadStatus::Ok)];
//!     write_table(&rows, "results/pdb_downloads.csv")?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;
pub mod tabular;
pub mod types;

// Re-export commonly used types
pub use error::{PdblinkError, Result};
