//! Flat record types persisted by the pipeline
//!
//! Every type in this module is one row of an output table. Field order is column
//! order; optional fields serialize as empty cells.

use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// Separator used when a multi-valued field is flattened into one cell.
pub const LIST_SEPARATOR: &str = ";";

/// Manual-curation status of a protein knowledge-base entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    /// Manually reviewed (Swiss-Prot)
    Reviewed,
    /// Automatically annotated (TrEMBL)
    Unreviewed,
}

impl ReviewStatus {
    /// Derive the status from an upstream "is reviewed" signal
    pub fn from_reviewed(reviewed: bool) -> Self {
        if reviewed {
            ReviewStatus::Reviewed
        } else {
            ReviewStatus::Unreviewed
        }
    }

    pub fn is_reviewed(self) -> bool {
        self == ReviewStatus::Reviewed
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewStatus::Reviewed => write!(f, "reviewed"),
            ReviewStatus::Unreviewed => write!(f, "unreviewed"),
        }
    }
}

// ============================================================================
// Structure downloads
// ============================================================================

/// Outcome of downloading one structure file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadStatus {
    /// File retrieved, validated and written
    Ok,
    /// Server answered but the file is missing or is not an mmCIF document
    NotFoundOrInvalid,
    /// Transport or filesystem failure
    Error(String),
}

impl DownloadStatus {
    pub fn error(detail: impl fmt::Display) -> Self {
        DownloadStatus::Error(detail.to_string())
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, DownloadStatus::Ok)
    }
}

impl fmt::Display for DownloadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadStatus::Ok => write!(f, "ok"),
            DownloadStatus::NotFoundOrInvalid => write!(f, "not found or invalid"),
            DownloadStatus::Error(detail) => write!(f, "error: {}", detail),
        }
    }
}

impl Serialize for DownloadStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One row of the download summary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadRecord {
    pub pdb_id: String,
    pub status: DownloadStatus,
}

impl DownloadRecord {
    pub fn new(pdb_id: impl Into<String>, status: DownloadStatus) -> Self {
        Self {
            pdb_id: pdb_id.into(),
            status,
        }
    }
}

// ============================================================================
// Biological summary
// ============================================================================

/// Flat projection of one protein record
///
/// Built from exactly one upstream record; there is no "empty" summary. Any field the
/// record did not carry is `None` (or an empty collection) and serializes as an empty
/// cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BiologicalSummary {
    /// Primary accession of the record
    pub uniprot_id: Option<String>,
    /// Date the entry first became public
    pub publication_date: Option<String>,
    /// Date of the last annotation update
    pub modification_date: Option<String>,
    pub review_status: ReviewStatus,
    /// Name of the first listed gene
    pub gene_name: Option<String>,
    /// Synonyms of the first listed gene, in upstream order
    #[serde(serialize_with = "serialize_joined")]
    pub synonyms: Vec<String>,
    /// Scientific name of the source organism
    pub organism: Option<String>,
    /// Cross-referenced structure identifiers, sorted and deduplicated
    #[serde(serialize_with = "serialize_joined")]
    pub pdb_ids: BTreeSet<String>,
}

// ============================================================================
// Cofactor chemistry
// ============================================================================

/// Chemistry metadata resolved for a cofactor name
///
/// Identifiers are opaque strings; nothing here interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChemicalProperties {
    /// Cofactor name the lookup was made with
    pub name: String,
    pub exact_mass: Option<String>,
    pub inchi: Option<String>,
    pub inchi_key: Option<String>,
    pub iupac_name: Option<String>,
    pub smiles: Option<String>,
}

/// Join a collection into one cell; empty collections become an empty cell.
fn serialize_joined<'a, I, S>(items: &'a I, serializer: S) -> Result<S::Ok, S::Error>
where
    &'a I: IntoIterator<Item = &'a String>,
    S: Serializer,
{
    let parts: Vec<&str> = items.into_iter().map(String::as_str).collect();
    if parts.is_empty() {
        serializer.serialize_none()
    } else {
        serializer.serialize_str(&parts.join(LIST_SEPARATOR))
    }
}
