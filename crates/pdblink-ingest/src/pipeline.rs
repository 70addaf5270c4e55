//! Pipeline orchestration
//!
//! ```text
//! structure id ─► search ─► select ─► fetch record ─┬─► biological summary
//!                                                   └─► cofactor ─► chemistry
//! ```
//!
//! Every stage takes an optional upstream value and yields an optional result. An absent
//! input skips the stage without any upstream call, and an upstream failure is logged and
//! becomes an absent result. The summary and cofactor branches read the same record and
//! do not affect each other. Only writing the output tables can fail a run.

use crate::config::{IngestConfig, CHEMISTRY_TABLE, DOWNLOADS_TABLE, SUMMARY_TABLE};
use crate::error::Result;
use crate::pdb::{self, RcsbClient};
use crate::pubchem::{self, PubChemClient};
use crate::sources::{CompoundSource, ProteinSource, StructureSource};
use crate::uniprot::{self, ProteinRecord, SearchResult, UniProtClient};
use pdblink_common::tabular::TabularWriter;
use pdblink_common::types::{BiologicalSummary, ChemicalProperties, DownloadRecord};
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// Everything learned about one structure identifier
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub pdb_id: String,
    /// Number of search hits
    pub candidates: usize,
    /// Hit chosen for full retrieval
    pub selected: Option<SearchResult>,
    /// Whether the selected record was retrieved
    pub record_fetched: bool,
    pub summary: Option<BiologicalSummary>,
    pub cofactor: Option<String>,
    pub chemistry: Option<ChemicalProperties>,
}

/// Outcome of a full run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub downloads: Vec<DownloadRecord>,
    pub downloads_table: PathBuf,
    pub resolution: Resolution,
    pub summary_table: Option<PathBuf>,
    pub chemistry_table: Option<PathBuf>,
}

/// Paths of the resolution tables that were written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrittenTables {
    pub summary: Option<PathBuf>,
    pub chemistry: Option<PathBuf>,
}

/// Sequential structure → protein → cofactor → chemistry pipeline
pub struct Pipeline {
    config: IngestConfig,
    structures: Box<dyn StructureSource>,
    proteins: Box<dyn ProteinSource>,
    compounds: Box<dyn CompoundSource>,
    writer: TabularWriter,
}

impl Pipeline {
    /// Assemble a pipeline from explicit sources
    pub fn new(
        config: IngestConfig,
        structures: Box<dyn StructureSource>,
        proteins: Box<dyn ProteinSource>,
        compounds: Box<dyn CompoundSource>,
    ) -> Self {
        let writer = TabularWriter::new(config.results_dir.clone());
        Self {
            config,
            structures,
            proteins,
            compounds,
            writer,
        }
    }

    /// Assemble a pipeline talking to the configured HTTP endpoints
    pub fn from_config(config: IngestConfig) -> Result<Self> {
        config.validate()?;

        let structures = RcsbClient::new(config.rcsb_url.clone(), config.structure_timeout())?;
        let proteins = UniProtClient::new(config.uniprot_url.clone(), config.api_timeout())?;
        let compounds = PubChemClient::new(config.pubchem_url.clone(), config.api_timeout())?;

        Ok(Self::new(
            config,
            Box::new(structures),
            Box::new(proteins),
            Box::new(compounds),
        ))
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Download every identifier, in order, into the data directory
    pub async fn download_structures<F>(&self, pdb_ids: &[String], on_status: F) -> Vec<DownloadRecord>
    where
        F: FnMut(&DownloadRecord),
    {
        pdb::download_structures(
            self.structures.as_ref(),
            pdb_ids,
            &self.config.data_dir,
            on_status,
        )
        .await
    }

    /// Persist the download summary table
    pub fn write_downloads(&self, records: &[DownloadRecord]) -> Result<PathBuf> {
        let path = self.writer.write(DOWNLOADS_TABLE, records)?;
        info!(path = %path.display(), rows = records.len(), "Download summary written");
        Ok(path)
    }

    /// Resolve one structure identifier to its protein summary and cofactor chemistry
    #[instrument(skip(self))]
    pub async fn resolve(&self, pdb_id: &str) -> Resolution {
        let candidates = self.search(pdb_id).await;

        let selected = uniprot::select_best(&candidates).cloned();
        match &selected {
            Some(hit) => info!(
                accession = hit.accession().unwrap_or("-"),
                review_status = %hit.review_status(),
                "Candidate selected"
            ),
            None => info!("No UniProt entries reference this structure"),
        }

        let record = match selected.as_ref().and_then(SearchResult::accession) {
            Some(accession) => self.fetch_record(accession).await,
            None => None,
        };

        let summary = uniprot::extract_summary(record.as_ref());
        let cofactor = uniprot::find_cofactor(record.as_ref()).map(str::to_string);
        match &cofactor {
            Some(name) => info!(cofactor = %name, "Cofactor found"),
            None if record.is_some() => info!("Record annotates no cofactor"),
            None => {},
        }

        let chemistry = pubchem::resolve_chemistry(self.compounds.as_ref(), cofactor.as_deref()).await;

        Resolution {
            pdb_id: pdb_id.to_string(),
            candidates: candidates.len(),
            selected,
            record_fetched: record.is_some(),
            summary,
            cofactor,
            chemistry,
        }
    }

    /// Persist whichever single-row tables the resolution produced
    pub fn write_resolution(&self, resolution: &Resolution) -> Result<WrittenTables> {
        let summary = resolution
            .summary
            .as_ref()
            .map(|row| self.writer.write(SUMMARY_TABLE, std::slice::from_ref(row)))
            .transpose()?;

        let chemistry = resolution
            .chemistry
            .as_ref()
            .map(|row| self.writer.write(CHEMISTRY_TABLE, std::slice::from_ref(row)))
            .transpose()?;

        if let Some(path) = &summary {
            info!(path = %path.display(), "Biological summary written");
        }
        if let Some(path) = &chemistry {
            info!(path = %path.display(), "Cofactor chemistry written");
        }

        Ok(WrittenTables { summary, chemistry })
    }

    /// Full run: download loop, download table, then resolution of the query identifier
    pub async fn run<F>(&self, on_status: F) -> Result<PipelineReport>
    where
        F: FnMut(&DownloadRecord),
    {
        let downloads = self.download_structures(&self.config.pdb_ids, on_status).await;
        let downloads_table = self.write_downloads(&downloads)?;

        let resolution = self.resolve(&self.config.query_pdb_id).await;
        let written = self.write_resolution(&resolution)?;

        Ok(PipelineReport {
            downloads,
            downloads_table,
            resolution,
            summary_table: written.summary,
            chemistry_table: written.chemistry,
        })
    }

    async fn search(&self, pdb_id: &str) -> Vec<SearchResult> {
        let query = uniprot::pdb_query(pdb_id);

        match self.proteins.search(&query, self.config.search_size).await {
            Ok(results) => {
                info!(%query, hits = results.len(), "UniProt search complete");
                results
            },
            Err(e) => {
                warn!(error = %e, %query, "UniProt search failed");
                Vec::new()
            },
        }
    }

    async fn fetch_record(&self, accession: &str) -> Option<ProteinRecord> {
        match self.proteins.fetch_record(accession).await {
            Ok(record) => {
                info!(accession, "Full entry retrieved");
                Some(record)
            },
            Err(e) => {
                warn!(error = %e, accession, "Entry retrieval failed");
                None
            },
        }
    }
}
