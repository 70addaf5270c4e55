//! HTTP client for the UniProt REST API

use super::models::{ProteinRecord, SearchResponse, SearchResult};
use crate::error::{IngestError, Result};
use crate::sources::ProteinSource;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// UniProtKB search and entry retrieval
pub struct UniProtClient {
    client: Client,
    base_url: String,
}

impl UniProtClient {
    /// Create a client for the API rooted at `base_url` (e.g. `https://rest.uniprot.org`)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn search_url(&self) -> String {
        format!("{}/uniprotkb/search", self.base_url)
    }

    pub fn entry_url(&self, accession: &str) -> String {
        format!(
            "{}/uniprotkb/{}.json",
            self.base_url,
            urlencoding::encode(accession)
        )
    }
}

#[async_trait]
impl ProteinSource for UniProtClient {
    async fn search(&self, query: &str, size: usize) -> Result<Vec<SearchResult>> {
        let url = self.search_url();
        let size = size.to_string();

        debug!(%url, query, size = %size, "Searching UniProt");

        let response = self
            .client
            .get(&url)
            .query(&[("query", query), ("format", "json"), ("size", size.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(IngestError::status(url, response.status()));
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.into_results())
    }

    async fn fetch_record(&self, accession: &str) -> Result<ProteinRecord> {
        let url = self.entry_url(accession);

        debug!(%url, accession, "Fetching UniProt entry");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(IngestError::status(url, response.status()));
        }

        Ok(response.json().await?)
    }
}
