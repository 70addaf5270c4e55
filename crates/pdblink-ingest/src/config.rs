//! Configuration for the ingestion pipeline
//!
//! Upstream endpoints, output directories, timeouts and the identifiers to process.

use crate::error::{IngestError, Result};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Pipeline Configuration Constants
// ============================================================================

/// RCSB file server base URL.
pub const DEFAULT_RCSB_URL: &str = "https://files.rcsb.org";

/// UniProt REST API base URL.
pub const DEFAULT_UNIPROT_URL: &str = "https://rest.uniprot.org";

/// PubChem PUG REST base URL.
pub const DEFAULT_PUBCHEM_URL: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug";

/// Directory downloaded structure files are written into.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Directory output tables are written into.
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Maximum number of UniProt search results requested.
pub const DEFAULT_SEARCH_SIZE: usize = 50;

/// Timeout for a single structure download in seconds.
pub const DEFAULT_STRUCTURE_TIMEOUT_SECS: u64 = 10;

/// Timeout for UniProt and PubChem requests in seconds.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 20;

/// Structure identifiers downloaded by a full run when none are given.
pub const DEFAULT_PDB_IDS: &[&str] = &[
    "1tup", "2xyz", "3def", "4ogq", "5jkl", "6mno", "7pqr", "8stu", "9vwx", "10yza",
];

/// Structure identifier whose proteins and cofactor are resolved by a full run.
pub const DEFAULT_QUERY_PDB_ID: &str = "1tup";

/// Output table names.
pub const DOWNLOADS_TABLE: &str = "pdb_downloads.csv";
pub const SUMMARY_TABLE: &str = "uniprot_info.csv";
pub const CHEMISTRY_TABLE: &str = "pubchem_cofactor.csv";

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// RCSB file server base URL
    pub rcsb_url: String,

    /// UniProt REST base URL
    pub uniprot_url: String,

    /// PubChem PUG REST base URL
    pub pubchem_url: String,

    /// Where structure files go
    pub data_dir: PathBuf,

    /// Where output tables go
    pub results_dir: PathBuf,

    /// Result-size cap for protein searches
    pub search_size: usize,

    /// Per-download timeout for structure files
    pub structure_timeout_secs: u64,

    /// Timeout for protein and compound lookups
    pub api_timeout_secs: u64,

    /// Identifiers processed by the download loop
    pub pdb_ids: Vec<String>,

    /// Identifier resolved to protein and cofactor data
    pub query_pdb_id: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            rcsb_url: DEFAULT_RCSB_URL.to_string(),
            uniprot_url: DEFAULT_UNIPROT_URL.to_string(),
            pubchem_url: DEFAULT_PUBCHEM_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            search_size: DEFAULT_SEARCH_SIZE,
            structure_timeout_secs: DEFAULT_STRUCTURE_TIMEOUT_SECS,
            api_timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            pdb_ids: DEFAULT_PDB_IDS.iter().map(|s| s.to_string()).collect(),
            query_pdb_id: DEFAULT_QUERY_PDB_ID.to_string(),
        }
    }
}

impl IngestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a `.env` file, the environment and defaults
    ///
    /// Environment variables:
    /// - `PDBLINK_RCSB_URL`, `PDBLINK_UNIPROT_URL`, `PDBLINK_PUBCHEM_URL`
    /// - `PDBLINK_DATA_DIR`, `PDBLINK_RESULTS_DIR`
    /// - `PDBLINK_SEARCH_SIZE`
    /// - `PDBLINK_STRUCTURE_TIMEOUT_SECS`, `PDBLINK_API_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(url) = std::env::var("PDBLINK_RCSB_URL") {
            config.rcsb_url = url;
        }

        if let Ok(url) = std::env::var("PDBLINK_UNIPROT_URL") {
            config.uniprot_url = url;
        }

        if let Ok(url) = std::env::var("PDBLINK_PUBCHEM_URL") {
            config.pubchem_url = url;
        }

        if let Ok(dir) = std::env::var("PDBLINK_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Ok(dir) = std::env::var("PDBLINK_RESULTS_DIR") {
            config.results_dir = PathBuf::from(dir);
        }

        config.search_size = env_number("PDBLINK_SEARCH_SIZE", config.search_size)?;
        config.structure_timeout_secs =
            env_number("PDBLINK_STRUCTURE_TIMEOUT_SECS", config.structure_timeout_secs)?;
        config.api_timeout_secs = env_number("PDBLINK_API_TIMEOUT_SECS", config.api_timeout_secs)?;

        config.validate()?;

        Ok(config)
    }

    pub fn with_rcsb_url(mut self, url: impl Into<String>) -> Self {
        self.rcsb_url = url.into();
        self
    }

    pub fn with_uniprot_url(mut self, url: impl Into<String>) -> Self {
        self.uniprot_url = url.into();
        self
    }

    pub fn with_pubchem_url(mut self, url: impl Into<String>) -> Self {
        self.pubchem_url = url.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_results_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.results_dir = dir.into();
        self
    }

    pub fn with_search_size(mut self, size: usize) -> Self {
        self.search_size = size;
        self
    }

    pub fn with_structure_timeout(mut self, timeout_secs: u64) -> Self {
        self.structure_timeout_secs = timeout_secs;
        self
    }

    pub fn with_api_timeout(mut self, timeout_secs: u64) -> Self {
        self.api_timeout_secs = timeout_secs;
        self
    }

    pub fn with_pdb_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pdb_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_query_pdb_id(mut self, id: impl Into<String>) -> Self {
        self.query_pdb_id = id.into();
        self
    }

    pub fn structure_timeout(&self) -> Duration {
        Duration::from_secs(self.structure_timeout_secs)
    }

    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout_secs)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("RCSB", &self.rcsb_url),
            ("UniProt", &self.uniprot_url),
            ("PubChem", &self.pubchem_url),
        ] {
            if url.trim().is_empty() {
                return Err(IngestError::config(format!("{} URL cannot be empty", name)));
            }
        }

        if self.search_size == 0 {
            return Err(IngestError::config("Search size must be greater than 0"));
        }

        if self.structure_timeout_secs == 0 || self.api_timeout_secs == 0 {
            return Err(IngestError::config("Timeouts must be greater than 0"));
        }

        if self.query_pdb_id.trim().is_empty() {
            return Err(IngestError::config("Query PDB identifier cannot be empty"));
        }

        Ok(())
    }
}

fn env_number<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| IngestError::config(format!("{} must be a number, got '{}'", key, raw))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IngestConfig::new();
        assert_eq!(config.search_size, 50);
        assert_eq!(config.structure_timeout(), Duration::from_secs(10));
        assert_eq!(config.api_timeout(), Duration::from_secs(20));
        assert_eq!(config.pdb_ids.len(), 10);
        assert_eq!(config.query_pdb_id, "1tup");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = IngestConfig::new()
            .with_uniprot_url("http://127.0.0.1:9000")
            .with_results_dir("/tmp/out")
            .with_pdb_ids(["4hhb"])
            .with_query_pdb_id("4hhb")
            .with_search_size(5);

        assert_eq!(config.uniprot_url, "http://127.0.0.1:9000");
        assert_eq!(config.results_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.pdb_ids, vec!["4hhb".to_string()]);
        assert_eq!(config.search_size, 5);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(IngestConfig::new().with_search_size(0).validate().is_err());
        assert!(IngestConfig::new().with_api_timeout(0).validate().is_err());
        assert!(IngestConfig::new().with_pubchem_url(" ").validate().is_err());
        assert!(IngestConfig::new().with_query_pdb_id("").validate().is_err());
    }

    #[test]
    fn test_env_number_parsing() {
        std::env::set_var("PDBLINK_TEST_SIZE_OK", "7");
        std::env::set_var("PDBLINK_TEST_SIZE_BAD", "seven");

        assert_eq!(env_number("PDBLINK_TEST_SIZE_OK", 1usize).unwrap(), 7);
        assert!(env_number("PDBLINK_TEST_SIZE_BAD", 1usize).is_err());
        assert_eq!(env_number("PDBLINK_TEST_SIZE_UNSET", 3usize).unwrap(), 3);

        std::env::remove_var("PDBLINK_TEST_SIZE_OK");
        std::env::remove_var("PDBLINK_TEST_SIZE_BAD");
    }
}
