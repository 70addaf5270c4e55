//! pdblink ingest library
//!
//! Links macromolecular structures to the proteins they contain and to the chemistry of
//! those proteins' cofactors.
//!
//! # Data Sources
//!
//! - **RCSB PDB**: structure files in mmCIF format
//! - **UniProtKB**: protein entries cross-referencing a structure
//! - **PubChem**: physico-chemical descriptors of a cofactor
//!
//! # Example
//!
//! ```no_run
//! use pdblink_ingest::{IngestConfig, Pipeline};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pipeline = Pipeline::from_config(IngestConfig::from_env()?)?;
//!     let resolution = pipeline.resolve("1tup").await;
//!     pipeline.write_resolution(&resolution)?;
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod pdb;
pub mod pipeline;
pub mod progress;
pub mod pubchem;
pub mod sources;
pub mod uniprot;

pub use config::IngestConfig;
pub use error::{IngestError, Result};
pub use pipeline::{Pipeline, Resolution};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pdblink - structure to protein to cofactor linker
#[derive(Parser, Debug)]
#[command(name = "pdblink")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// RCSB file server base URL
    #[arg(long, global = true)]
    pub rcsb_url: Option<String>,

    /// UniProt REST base URL
    #[arg(long, global = true)]
    pub uniprot_url: Option<String>,

    /// PubChem PUG REST base URL
    #[arg(long, global = true)]
    pub pubchem_url: Option<String>,

    /// Directory for downloaded structure files
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory for output tables
    #[arg(long, global = true)]
    pub results_dir: Option<PathBuf>,

    /// Maximum number of UniProt search hits
    #[arg(long, global = true)]
    pub search_size: Option<usize>,

    /// Structure download timeout in seconds
    #[arg(long, global = true)]
    pub structure_timeout: Option<u64>,

    /// UniProt and PubChem request timeout in seconds
    #[arg(long, global = true)]
    pub api_timeout: Option<u64>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download structure files and write the download summary
    Download {
        /// Structure identifiers (defaults to the built-in list)
        ids: Vec<String>,
    },

    /// Resolve one structure to its protein and cofactor
    Resolve {
        /// Structure identifier (defaults to 1tup)
        pdb_id: Option<String>,
    },

    /// Download every structure, then resolve the query structure
    Run {
        /// Comma-separated structure identifiers to download
        #[arg(long, value_delimiter = ',')]
        ids: Option<Vec<String>>,

        /// Structure identifier to resolve
        #[arg(long)]
        query: Option<String>,
    },
}

impl Cli {
    /// Apply command-line overrides on top of `config`.
    ///
    /// The `PDBLINK_*` environment variables are read by [`IngestConfig::from_env`] only;
    /// flags here override whatever it loaded.
    pub fn apply(&self, mut config: IngestConfig) -> IngestConfig {
        if let Some(url) = &self.rcsb_url {
            config = config.with_rcsb_url(url.clone());
        }
        if let Some(url) = &self.uniprot_url {
            config = config.with_uniprot_url(url.clone());
        }
        if let Some(url) = &self.pubchem_url {
            config = config.with_pubchem_url(url.clone());
        }
        if let Some(dir) = &self.data_dir {
            config = config.with_data_dir(dir.clone());
        }
        if let Some(dir) = &self.results_dir {
            config = config.with_results_dir(dir.clone());
        }
        if let Some(size) = self.search_size {
            config = config.with_search_size(size);
        }
        if let Some(secs) = self.structure_timeout {
            config = config.with_structure_timeout(secs);
        }
        if let Some(secs) = self.api_timeout {
            config = config.with_api_timeout(secs);
        }
        config
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_ids_are_comma_separated() {
        let cli = Cli::try_parse_from(["pdblink", "run", "--ids", "1tup,4ogq", "--query", "4ogq"]).unwrap();

        match cli.command {
            Commands::Run { ids, query } => {
                assert_eq!(ids.unwrap(), vec!["1tup", "4ogq"]);
                assert_eq!(query.as_deref(), Some("4ogq"));
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "pdblink",
            "--uniprot-url",
            "http://localhost:9000",
            "--search-size",
            "5",
            "resolve",
        ])
        .unwrap();

        let config = cli.apply(IngestConfig::new());

        assert_eq!(config.uniprot_url, "http://localhost:9000");
        assert_eq!(config.search_size, 5);
        assert_eq!(config.rcsb_url, config::DEFAULT_RCSB_URL);
    }

    #[test]
    fn test_flags_do_not_read_environment() {
        let command = Cli::command();

        for arg in command.get_arguments() {
            assert!(arg.get_env().is_none(), "{} reads the environment", arg.get_id());
        }
    }
}
