//! pdblink CLI - Main entry point

use anyhow::Context;
use clap::Parser;
use pdblink_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use pdblink_ingest::{commands, Cli, Commands, IngestConfig};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Verbose mode logs debug to stderr; otherwise only warnings and errors
    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    let defaults = LogConfig::builder()
        .level(level)
        .output(LogOutput::Console)
        .log_file_prefix("pdblink")
        .build();

    // Environment variables take precedence
    let log_config = defaults.clone().merge_env().unwrap_or(defaults);

    // The CLI works without logging
    let _ = init_logging(&log_config);

    if let Err(e) = execute_command(&cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<()> {
    let config = IngestConfig::from_env().context("Failed to load configuration")?;
    let config = cli.apply(config);

    match &cli.command {
        Commands::Download { ids } => commands::download::run(config, ids.clone()).await?,

        Commands::Resolve { pdb_id } => commands::resolve::run(config, pdb_id.clone()).await?,

        Commands::Run { ids, query } => {
            let mut config = config;
            if let Some(ids) = ids {
                config = config.with_pdb_ids(ids);
            }
            if let Some(query) = query {
                config = config.with_query_pdb_id(query.clone());
            }
            commands::run::run(config).await?
        },
    }

    Ok(())
}
