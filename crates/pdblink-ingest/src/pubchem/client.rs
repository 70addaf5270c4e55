//! HTTP client for PubChem PUG REST

use super::models::{PropertyTableResponse, REQUESTED_PROPERTIES};
use crate::error::{IngestError, Result};
use crate::sources::CompoundSource;
use async_trait::async_trait;
use pdblink_common::types::ChemicalProperties;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Compound property lookups by name
pub struct PubChemClient {
    client: Client,
    base_url: String,
}

impl PubChemClient {
    /// Create a client for PUG REST rooted at `base_url`
    /// (e.g. `https://pubchem.ncbi.nlm.nih.gov/rest/pug`)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Property-table URL for an exact-name lookup
    pub fn properties_url(&self, name: &str) -> String {
        format!(
            "{}/compound/name/{}/property/{}/JSON",
            self.base_url,
            urlencoding::encode(name),
            REQUESTED_PROPERTIES.join(",")
        )
    }
}

#[async_trait]
impl CompoundSource for PubChemClient {
    async fn properties(&self, name: &str) -> Result<Option<ChemicalProperties>> {
        let url = self.properties_url(name);

        debug!(%url, name, "Querying PubChem");

        let response = self.client.get(&url).send().await?;

        // PUG REST answers unknown names with 404 and a fault body
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(IngestError::status(url, response.status()));
        }

        let body: PropertyTableResponse = response.json().await?;
        Ok(body
            .into_first()
            .map(|row| row.into_chemical_properties(name)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_url_encodes_name() {
        let client = PubChemClient::new(
            "https://pubchem.ncbi.nlm.nih.gov/rest/pug/",
            Duration::from_secs(20),
        )
        .unwrap();

        assert_eq!(
            client.properties_url("ZINC ION"),
            "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/name/ZINC%20ION/property/ExactMass,InChI,InChIKey,IUPACName,CanonicalSMILES/JSON"
        );
        assert!(client.properties_url("Zn(2+)").contains("/name/Zn%282%2B%29/"));
    }
}
