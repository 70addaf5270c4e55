//! UniProt: protein records cross-referenced from a structure
//!
//! - [`client`]: REST search and entry retrieval
//! - [`models`]: the JSON entry format and its optional-field accessors
//! - [`select`]: which search hit to fetch
//! - [`extract`]: flat biological summary of a record
//! - [`cofactor`]: the cofactor a record annotates

pub mod client;
pub mod cofactor;
pub mod extract;
pub mod models;
pub mod select;

pub use client::UniProtClient;
pub use cofactor::find_cofactor;
pub use extract::extract_summary;
pub use models::{ProteinRecord, SearchResult};
pub use select::select_best;

/// Search query matching every entry that cross-references `pdb_id`
pub fn pdb_query(pdb_id: &str) -> String {
    format!("xref:pdb-{}", pdb_id)
}
