//! Tabular (CSV) persistence
//!
//! Rows are any `Serialize` struct: one row per record, one column per field, headers
//! taken from the field names, no index column.

use crate::error::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write `rows` to a CSV file at `path`, creating parent directories as needed.
///
/// Returns the number of rows written.
pub fn write_table<T: Serialize>(rows: &[T], path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = rows.len(), "Wrote table");
    Ok(rows.len())
}

/// Writes tables into one output directory
#[derive(Debug, Clone)]
pub struct TabularWriter {
    root: PathBuf,
}

impl TabularWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write `rows` to `<root>/<file_name>` and return the full path
    pub fn write<T: Serialize>(&self, file_name: &str, rows: &[T]) -> Result<PathBuf> {
        let path = self.root.join(file_name);
        write_table(rows, &path)?;
        Ok(path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::types::{ChemicalProperties, DownloadRecord, DownloadStatus};

    #[test]
    fn test_write_download_table() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![
            DownloadRecord::new("1tup", DownloadStatus::Ok),
            DownloadRecord::new("2xyz", DownloadStatus::NotFoundOrInvalid),
            DownloadRecord::new("3def", DownloadStatus::error("timed out")),
        ];

        let writer = TabularWriter::new(dir.path());
        let path = writer.write("pdb_downloads.csv", &rows).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(
            content,
            "pdb_id,status\n1tup,ok\n2xyz,not found or invalid\n3def,error: timed out\n"
        );
    }

    #[test]
    fn test_absent_fields_are_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("chem.csv");
        let rows = vec![ChemicalProperties {
            name: "ZINC ION".to_string(),
            exact_mass: Some("63.929142".to_string()),
            inchi: None,
            inchi_key: None,
            iupac_name: Some("zinc(2+)".to_string()),
            smiles: Some("[Zn+2]".to_string()),
        }];

        assert_eq!(write_table(&rows, &path).unwrap(), 1);

        let content = std::fs::read_to_string(path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("name,exact_mass,inchi,inchi_key,iupac_name,smiles")
        );
        assert_eq!(lines.next(), Some("ZINC ION,63.929142,,,zinc(2+),[Zn+2]"));
        assert_eq!(lines.next(), None);
    }
}
