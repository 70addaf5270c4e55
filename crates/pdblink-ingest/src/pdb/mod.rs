//! RCSB PDB structure downloads
//!
//! Structures are fetched one at a time, in the order given. Each identifier ends with
//! exactly one [`DownloadStatus`]; a failure never stops the loop.

use crate::error::Result;
use crate::sources::StructureSource;
use async_trait::async_trait;
use pdblink_common::types::{DownloadRecord, DownloadStatus};
use reqwest::{Client, StatusCode};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Every mmCIF document starts with a data block header.
pub const MMCIF_MARKER: &str = "data_";

/// Downloads mmCIF files from the RCSB file server
pub struct RcsbClient {
    client: Client,
    base_url: String,
}

impl RcsbClient {
    /// Create a client for the file server rooted at `base_url` (e.g. `https://files.rcsb.org`)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn structure_url(&self, pdb_id: &str) -> String {
        format!("{}/download/{}", self.base_url, structure_file_name(pdb_id))
    }
}

#[async_trait]
impl StructureSource for RcsbClient {
    async fn fetch_structure(&self, pdb_id: &str) -> Result<Option<String>> {
        let url = self.structure_url(pdb_id);

        debug!(%url, pdb_id, "Fetching structure");

        let response = self.client.get(&url).send().await?;
        if response.status() != StatusCode::OK {
            debug!(pdb_id, status = %response.status(), "Structure not available");
            return Ok(None);
        }

        let content = response.text().await?;
        Ok(is_mmcif(&content).then_some(content))
    }
}

/// File name a structure is stored under: `1tup` -> `1TUP.cif`
pub fn structure_file_name(pdb_id: &str) -> String {
    format!("{}.cif", pdb_id.to_uppercase())
}

/// Whether `content` looks like an mmCIF document
pub fn is_mmcif(content: &str) -> bool {
    content.starts_with(MMCIF_MARKER)
}

/// Download each identifier in order, writing valid files into `data_dir`.
///
/// `on_status` sees every record as soon as its download finishes.
pub async fn download_structures<S, F>(
    source: &S,
    pdb_ids: &[String],
    data_dir: &Path,
    mut on_status: F,
) -> Vec<DownloadRecord>
where
    S: StructureSource + ?Sized,
    F: FnMut(&DownloadRecord),
{
    let mut records = Vec::with_capacity(pdb_ids.len());

    for pdb_id in pdb_ids {
        let status = download_one(source, pdb_id, data_dir).await;
        info!(pdb_id = %pdb_id, status = %status, "Structure download finished");

        let record = DownloadRecord::new(pdb_id.clone(), status);
        on_status(&record);
        records.push(record);
    }

    let ok = records.iter().filter(|r| r.status.is_ok()).count();
    info!(total = records.len(), ok, "Structure downloads complete");

    records
}

async fn download_one<S>(source: &S, pdb_id: &str, data_dir: &Path) -> DownloadStatus
where
    S: StructureSource + ?Sized,
{
    match source.fetch_structure(pdb_id).await {
        Ok(Some(content)) => match store(data_dir, pdb_id, &content).await {
            Ok(path) => {
                debug!(path = %path.display(), "Structure written");
                DownloadStatus::Ok
            },
            Err(e) => {
                warn!(error = %e, pdb_id, "Failed to write structure");
                DownloadStatus::error(e)
            },
        },
        Ok(None) => DownloadStatus::NotFoundOrInvalid,
        Err(e) => {
            warn!(error = %e, pdb_id, "Structure download failed");
            DownloadStatus::error(e)
        },
    }
}

async fn store(data_dir: &Path, pdb_id: &str, content: &str) -> Result<PathBuf> {
    tokio::fs::create_dir_all(data_dir).await?;

    let path = data_dir.join(structure_file_name(pdb_id));
    tokio::fs::write(&path, content).await?;

    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::IngestError;
    use std::collections::HashMap;

    struct FakeStructures(HashMap<&'static str, Result<Option<String>>>);

    #[async_trait]
    impl StructureSource for FakeStructures {
        async fn fetch_structure(&self, pdb_id: &str) -> Result<Option<String>> {
            match self.0.get(pdb_id) {
                Some(Ok(content)) => Ok(content.clone()),
                Some(Err(e)) => Err(IngestError::config(e.to_string())),
                None => Ok(None),
            }
        }
    }

    #[test]
    fn test_file_name_and_marker() {
        assert_eq!(structure_file_name("1tup"), "1TUP.cif");
        assert!(is_mmcif("data_1TUP\n#\n"));
        assert!(!is_mmcif("<html>Not Found</html>"));
        assert!(!is_mmcif(""));
    }

    #[test]
    fn test_structure_url() {
        let client = RcsbClient::new("https://files.rcsb.org/", Duration::from_secs(10)).unwrap();
        assert_eq!(
            client.structure_url("4ogq"),
            "https://files.rcsb.org/download/4OGQ.cif"
        );
    }

    #[tokio::test]
    async fn test_download_loop_records_every_id_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeStructures(HashMap::from([
            ("1tup", Ok(Some("data_1TUP\n".to_string()))),
            ("3def", Err(IngestError::config("connection reset"))),
        ]));
        let ids: Vec<String> = ["1tup", "2xyz", "3def"].iter().map(|s| s.to_string()).collect();

        let mut seen = Vec::new();
        let records =
            download_structures(&source, &ids, dir.path(), |r| seen.push(r.pdb_id.clone())).await;

        assert_eq!(seen, ids);
        assert_eq!(records[0].status, DownloadStatus::Ok);
        assert_eq!(records[1].status, DownloadStatus::NotFoundOrInvalid);
        assert!(records[2].status.to_string().starts_with("error: "));

        let written = std::fs::read_to_string(dir.path().join("1TUP.cif")).unwrap();
        assert_eq!(written, "data_1TUP\n");
        assert!(!dir.path().join("2XYZ.cif").exists());
    }
}
