//! Upstream capabilities the pipeline depends on
//!
//! The pipeline only talks to these traits. HTTP implementations live next to each data
//! source ([`crate::pdb::RcsbClient`], [`crate::uniprot::UniProtClient`],
//! [`crate::pubchem::PubChemClient`]); tests substitute in-memory fakes.

use crate::error::Result;
use crate::uniprot::models::{ProteinRecord, SearchResult};
use async_trait::async_trait;
use pdblink_common::types::ChemicalProperties;

/// Retrieves raw structure files
#[async_trait]
pub trait StructureSource: Send + Sync {
    /// Fetch the text of one structure file
    ///
    /// `Ok(None)` means the server answered but has no valid file for `pdb_id`.
    async fn fetch_structure(&self, pdb_id: &str) -> Result<Option<String>>;
}

/// Searches and retrieves protein knowledge-base records
#[async_trait]
pub trait ProteinSource: Send + Sync {
    /// Free-text search returning at most `size` summaries, in upstream order
    async fn search(&self, query: &str, size: usize) -> Result<Vec<SearchResult>>;

    /// Fetch the full record for one accession
    async fn fetch_record(&self, accession: &str) -> Result<ProteinRecord>;
}

/// Looks up compound properties by name
#[async_trait]
pub trait CompoundSource: Send + Sync {
    /// Exact-name property lookup; `Ok(None)` when the upstream has no matching row
    async fn properties(&self, name: &str) -> Result<Option<ChemicalProperties>>;
}
