//! PubChem: chemistry metadata for a cofactor name

pub mod client;
pub mod models;

pub use client::PubChemClient;

use crate::sources::CompoundSource;
use pdblink_common::types::ChemicalProperties;
use tracing::{info, instrument, warn};

/// Resolve a cofactor name to its chemical properties.
///
/// No name means no lookup. Transport failures, error statuses and empty property
/// tables all resolve to `None`; none of them is an error for the caller.
#[instrument(skip(source))]
pub async fn resolve_chemistry(
    source: &dyn CompoundSource,
    name: Option<&str>,
) -> Option<ChemicalProperties> {
    let name = name?;

    match source.properties(name).await {
        Ok(Some(properties)) => {
            info!(name, "Chemistry resolved");
            Some(properties)
        },
        Ok(None) => {
            info!(name, "No compound properties found");
            None
        },
        Err(e) => {
            warn!(error = %e, name, "Compound lookup failed");
            None
        },
    }
}
