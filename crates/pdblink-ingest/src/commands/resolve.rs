//! `pdblink resolve` command implementation
//!
//! Resolves one structure to its protein summary and cofactor chemistry.

use crate::commands::{print_resolution, print_written};
use crate::config::IngestConfig;
use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::progress;

/// Resolve `pdb_id`, or the configured query identifier when none is given
pub async fn run(config: IngestConfig, pdb_id: Option<String>) -> Result<()> {
    let pipeline = Pipeline::from_config(config)?;
    let pdb_id = pdb_id.unwrap_or_else(|| pipeline.config().query_pdb_id.clone());

    let spinner = progress::create_spinner(&format!("Resolving {}", pdb_id));
    let resolution = pipeline.resolve(&pdb_id).await;
    spinner.finish_and_clear();

    print_resolution(&resolution);
    let written = pipeline.write_resolution(&resolution)?;
    print_written(&written);

    Ok(())
}
