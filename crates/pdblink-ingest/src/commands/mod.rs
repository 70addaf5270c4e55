//! Command implementations for the `pdblink` binary
//!
//! Commands print one human-readable status line per pipeline stage on stdout; the
//! library modules log through `tracing` instead.

pub mod download;
pub mod resolve;
pub mod run;

use crate::pipeline::{Resolution, WrittenTables};
use colored::Colorize;
use pdblink_common::types::DownloadRecord;
use std::path::Path;

pub(crate) fn print_download(record: &DownloadRecord) {
    let mark = if record.status.is_ok() {
        "✓".green()
    } else {
        "✗".red()
    };
    println!("{} {}: {}", mark, record.pdb_id, record.status);
}

pub(crate) fn print_downloads_summary(records: &[DownloadRecord], table: &Path) {
    let ok = records.iter().filter(|r| r.status.is_ok()).count();
    println!(
        "{} {}/{} structures downloaded, summary saved to {}",
        "→".cyan(),
        ok,
        records.len(),
        table.display()
    );
}

pub(crate) fn print_resolution(resolution: &Resolution) {
    println!(
        "{} Found {} UniProt entries for {}",
        "→".cyan(),
        resolution.candidates,
        resolution.pdb_id
    );

    let Some(selected) = &resolution.selected else {
        println!("{} No UniProt entries reference this structure", "✗".yellow());
        return;
    };

    let accession = selected.accession().unwrap_or("(no accession)");
    println!(
        "{} Selected {} ({})",
        "✓".green(),
        accession,
        selected.review_status()
    );

    if !resolution.record_fetched {
        println!("{} Could not retrieve entry {}", "✗".red(), accession);
        return;
    }
    println!("{} Full entry retrieved for {}", "✓".green(), accession);

    let Some(cofactor) = &resolution.cofactor else {
        println!("{} No cofactor annotated for this protein", "✗".yellow());
        return;
    };
    println!("{} Cofactor found: {}", "✓".green(), cofactor);

    if resolution.chemistry.is_some() {
        println!("{} PubChem data retrieved for {}", "✓".green(), cofactor);
    } else {
        println!("{} No PubChem data for {}", "✗".red(), cofactor);
    }
}

pub(crate) fn print_written(written: &WrittenTables) {
    if let Some(path) = &written.summary {
        println!("{} UniProt information saved to {}", "✓".green(), path.display());
    }
    if let Some(path) = &written.chemistry {
        println!("{} Cofactor information saved to {}", "✓".green(), path.display());
    }
}
