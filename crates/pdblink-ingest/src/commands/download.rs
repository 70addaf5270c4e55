//! `pdblink download` command implementation
//!
//! Downloads structure files and writes the download summary table.

use crate::commands::{print_download, print_downloads_summary};
use crate::config::IngestConfig;
use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::progress;

/// Download `pdb_ids`, or the configured identifiers when none are given
pub async fn run(config: IngestConfig, pdb_ids: Vec<String>) -> Result<()> {
    let pipeline = Pipeline::from_config(config)?;
    let ids = if pdb_ids.is_empty() {
        pipeline.config().pdb_ids.clone()
    } else {
        pdb_ids
    };

    let pb = progress::create_progress_bar(ids.len() as u64, "Downloading structures");
    let records = pipeline
        .download_structures(&ids, |record| {
            pb.suspend(|| print_download(record));
            pb.inc(1);
        })
        .await;
    pb.finish_and_clear();

    let table = pipeline.write_downloads(&records)?;
    print_downloads_summary(&records, &table);

    Ok(())
}
