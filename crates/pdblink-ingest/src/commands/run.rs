//! `pdblink run` command implementation
//!
//! Download loop followed by resolution of the query structure.

use crate::commands::{print_download, print_downloads_summary, print_resolution, print_written};
use crate::config::IngestConfig;
use crate::error::Result;
use crate::pipeline::{Pipeline, WrittenTables};
use crate::progress;

pub async fn run(config: IngestConfig) -> Result<()> {
    let pipeline = Pipeline::from_config(config)?;

    let total = pipeline.config().pdb_ids.len() as u64;
    let pb = progress::create_progress_bar(total, "Downloading structures");
    let report = pipeline
        .run(|record| {
            pb.suspend(|| print_download(record));
            pb.inc(1);
        })
        .await?;
    pb.finish_and_clear();

    print_downloads_summary(&report.downloads, &report.downloads_table);
    print_resolution(&report.resolution);
    print_written(&WrittenTables {
        summary: report.summary_table,
        chemistry: report.chemistry_table,
    });

    Ok(())
}
