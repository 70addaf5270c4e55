//! UniProt REST data models
//!
//! Only the parts of the UniProtKB JSON format the pipeline reads are modelled. Every
//! field is optional and every list tolerates both absence and `null`. A field holding a
//! value of the wrong type reads as absent, and a list element that does not fit its
//! model is skipped, so one malformed field never fails the surrounding record. The
//! accessor methods are the only way the rest of the crate reads these records, so a
//! missing field always surfaces as `None` or an empty iterator instead of an error.

use pdblink_common::types::ReviewStatus;
use serde::Deserialize;

/// Database tag identifying structure cross-references.
pub const PDB_DATABASE: &str = "PDB";

/// Comment type tag carrying cofactor annotations.
pub const COFACTOR_COMMENT: &str = "COFACTOR";

/// Curation tier reported by UniProt
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum EntryType {
    /// Swiss-Prot
    Reviewed,
    /// TrEMBL
    Unreviewed,
    /// Any tag this crate does not recognise, kept verbatim
    Other(String),
}

impl From<String> for EntryType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Swiss-Prot" | "UniProtKB reviewed (Swiss-Prot)" => EntryType::Reviewed,
            "TrEMBL" | "UniProtKB unreviewed (TrEMBL)" => EntryType::Unreviewed,
            _ => EntryType::Other(tag),
        }
    }
}

/// Review status from the two upstream signals: reviewed when the entry type is
/// Swiss-Prot or the boolean flag is set.
pub fn review_status(entry_type: Option<&EntryType>, reviewed: Option<bool>) -> ReviewStatus {
    ReviewStatus::from_reviewed(
        matches!(entry_type, Some(EntryType::Reviewed)) || reviewed == Some(true),
    )
}

// ============================================================================
// Search
// ============================================================================

/// Search response envelope
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(deserialize_with = "lenient::list")]
    pub results: Option<Vec<SearchResult>>,
}

impl SearchResponse {
    pub fn into_results(self) -> Vec<SearchResult> {
        self.results.unwrap_or_default()
    }
}

/// One hit of a UniProt search
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(deserialize_with = "lenient::value")]
    pub primary_accession: Option<String>,
    /// Legacy accession field, used when `primaryAccession` is missing
    #[serde(deserialize_with = "lenient::value")]
    pub accession: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub entry_type: Option<EntryType>,
    #[serde(deserialize_with = "lenient::value")]
    pub reviewed: Option<bool>,
}

impl SearchResult {
    pub fn accession(&self) -> Option<&str> {
        non_empty(self.primary_accession.as_deref()).or(non_empty(self.accession.as_deref()))
    }

    pub fn review_status(&self) -> ReviewStatus {
        review_status(self.entry_type.as_ref(), self.reviewed)
    }

    pub fn is_reviewed(&self) -> bool {
        self.review_status().is_reviewed()
    }
}

// ============================================================================
// Full record
// ============================================================================

/// A full UniProtKB entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProteinRecord {
    #[serde(deserialize_with = "lenient::value")]
    pub primary_accession: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub entry_type: Option<EntryType>,
    #[serde(deserialize_with = "lenient::value")]
    pub reviewed: Option<bool>,
    #[serde(deserialize_with = "lenient::value")]
    pub entry_audit: Option<EntryAudit>,
    #[serde(deserialize_with = "lenient::list")]
    pub genes: Option<Vec<Gene>>,
    #[serde(deserialize_with = "lenient::value")]
    pub organism: Option<Organism>,
    #[serde(rename = "uniProtKBCrossReferences", deserialize_with = "lenient::list")]
    pub cross_references: Option<Vec<CrossReference>>,
    #[serde(deserialize_with = "lenient::list")]
    pub comments: Option<Vec<Comment>>,
}

impl ProteinRecord {
    pub fn accession(&self) -> Option<&str> {
        non_empty(self.primary_accession.as_deref())
    }

    pub fn review_status(&self) -> ReviewStatus {
        review_status(self.entry_type.as_ref(), self.reviewed)
    }

    pub fn audit(&self) -> Option<&EntryAudit> {
        self.entry_audit.as_ref()
    }

    pub fn genes(&self) -> &[Gene] {
        self.genes.as_deref().unwrap_or_default()
    }

    /// The gene whose name and synonyms represent this record.
    ///
    /// Policy: first listed gene wins. Records naming several genes keep only the first
    /// gene's data.
    pub fn primary_gene(&self) -> Option<&Gene> {
        self.genes().first()
    }

    pub fn organism_name(&self) -> Option<&str> {
        self.organism
            .as_ref()
            .and_then(|o| non_empty(o.scientific_name.as_deref()))
    }

    pub fn cross_references(&self) -> &[CrossReference] {
        self.cross_references.as_deref().unwrap_or_default()
    }

    pub fn comments(&self) -> &[Comment] {
        self.comments.as_deref().unwrap_or_default()
    }
}

/// Entry audit block
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntryAudit {
    #[serde(deserialize_with = "lenient::value")]
    pub first_public_date: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub last_annotation_update_date: Option<String>,
    /// Older name of the last-update field
    #[serde(deserialize_with = "lenient::value")]
    pub last_modified: Option<String>,
}

impl EntryAudit {
    pub fn publication_date(&self) -> Option<&str> {
        non_empty(self.first_public_date.as_deref())
    }

    pub fn modification_date(&self) -> Option<&str> {
        non_empty(self.last_annotation_update_date.as_deref())
            .or(non_empty(self.last_modified.as_deref()))
    }
}

/// `{ "value": ... }` wrapper used throughout the UniProt format
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValueField {
    #[serde(deserialize_with = "lenient::value")]
    pub value: Option<String>,
}

impl ValueField {
    pub fn value(&self) -> Option<&str> {
        non_empty(self.value.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Gene {
    #[serde(deserialize_with = "lenient::value")]
    pub gene_name: Option<ValueField>,
    #[serde(deserialize_with = "lenient::list")]
    pub synonyms: Option<Vec<ValueField>>,
}

impl Gene {
    pub fn name(&self) -> Option<&str> {
        self.gene_name.as_ref().and_then(ValueField::value)
    }

    /// Synonyms in upstream order, skipping entries without a value
    pub fn synonyms(&self) -> impl Iterator<Item = &str> {
        self.synonyms
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(ValueField::value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Organism {
    #[serde(deserialize_with = "lenient::value")]
    pub scientific_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CrossReference {
    #[serde(deserialize_with = "lenient::value")]
    pub database: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub id: Option<String>,
}

impl CrossReference {
    /// The structure identifier, if this is a PDB cross-reference with an id
    pub fn pdb_id(&self) -> Option<&str> {
        match self.database.as_deref() {
            Some(PDB_DATABASE) => non_empty(self.id.as_deref()),
            _ => None,
        }
    }
}

/// Free-form annotation; only the cofactor payload is modelled
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Comment {
    #[serde(deserialize_with = "lenient::value")]
    pub comment_type: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub cofactors: Option<Vec<Cofactor>>,
}

impl Comment {
    pub fn is_cofactor(&self) -> bool {
        self.comment_type.as_deref() == Some(COFACTOR_COMMENT)
    }

    pub fn cofactors(&self) -> &[Cofactor] {
        self.cofactors.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Cofactor {
    #[serde(deserialize_with = "lenient::value")]
    pub name: Option<String>,
}

impl Cofactor {
    pub fn name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Field deserializers that turn mistyped upstream values into absence
mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Any value that does not fit `T` reads as `None`
    pub fn value<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(raw).ok())
    }

    /// Non-arrays read as `None`; array elements that do not fit `T` are skipped
    pub fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => Ok(Some(
                items
                    .into_iter()
                    .filter_map(|item| serde_json::from_value(item).ok())
                    .collect(),
            )),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_type_tags() {
        let parse = |tag: &str| serde_json::from_value::<EntryType>(json!(tag)).unwrap();

        assert_eq!(parse("Swiss-Prot"), EntryType::Reviewed);
        assert_eq!(parse("UniProtKB reviewed (Swiss-Prot)"), EntryType::Reviewed);
        assert_eq!(parse("TrEMBL"), EntryType::Unreviewed);
        assert_eq!(parse("UniProtKB unreviewed (TrEMBL)"), EntryType::Unreviewed);
        assert_eq!(parse("Inactive"), EntryType::Other("Inactive".to_string()));
    }

    #[test]
    fn test_review_status_rule() {
        assert!(review_status(Some(&EntryType::Reviewed), None).is_reviewed());
        assert!(review_status(Some(&EntryType::Unreviewed), Some(true)).is_reviewed());
        assert!(review_status(None, Some(true)).is_reviewed());
        assert!(!review_status(None, Some(false)).is_reviewed());
        assert!(!review_status(Some(&EntryType::Other("x".into())), None).is_reviewed());
    }

    #[test]
    fn test_search_result_accession_fallback() {
        let hit: SearchResult =
            serde_json::from_value(json!({ "accession": "Q00001", "entryType": "TrEMBL" }))
                .unwrap();
        assert_eq!(hit.accession(), Some("Q00001"));

        let hit: SearchResult = serde_json::from_value(
            json!({ "primaryAccession": "P04637", "accession": "Q00001" }),
        )
        .unwrap();
        assert_eq!(hit.accession(), Some("P04637"));

        let hit: SearchResult = serde_json::from_value(json!({ "primaryAccession": "" })).unwrap();
        assert_eq!(hit.accession(), None);
    }

    #[test]
    fn test_search_response_without_results() {
        let response: SearchResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.into_results().is_empty());
    }

    #[test]
    fn test_record_tolerates_null_and_missing_lists() {
        let record: ProteinRecord = serde_json::from_value(json!({
            "primaryAccession": "P04637",
            "genes": null,
            "comments": null
        }))
        .unwrap();

        assert!(record.genes().is_empty());
        assert!(record.primary_gene().is_none());
        assert!(record.comments().is_empty());
        assert!(record.cross_references().is_empty());
        assert!(record.organism_name().is_none());
    }

    #[test]
    fn test_audit_modification_fallback() {
        let audit = EntryAudit {
            first_public_date: Some("1988-08-01".into()),
            last_annotation_update_date: None,
            last_modified: Some("2020-01-01".into()),
        };
        assert_eq!(audit.publication_date(), Some("1988-08-01"));
        assert_eq!(audit.modification_date(), Some("2020-01-01"));
    }

    #[test]
    fn test_cross_reference_pdb_id() {
        let xref = |db: &str, id: &str| CrossReference {
            database: Some(db.into()),
            id: Some(id.into()),
        };
        assert_eq!(xref("PDB", "1TUP").pdb_id(), Some("1TUP"));
        assert_eq!(xref("PDB", "").pdb_id(), None);
        assert_eq!(xref("PDBsum", "1TUP").pdb_id(), None);
    }

    #[test]
    fn test_gene_synonyms_skip_missing_values() {
        let gene: Gene = serde_json::from_value(json!({
            "geneName": { "value": "TP53" },
            "synonyms": [{ "value": "P53" }, {}, { "value": "" }, { "value": "TRP53" }]
        }))
        .unwrap();

        assert_eq!(gene.name(), Some("TP53"));
        assert_eq!(gene.synonyms().collect::<Vec<_>>(), vec!["P53", "TRP53"]);
    }

    #[test]
    fn test_mistyped_hit_does_not_drop_other_hits() {
        let response: SearchResponse = serde_json::from_value(json!({
            "results": [
                { "primaryAccession": "P04637", "entryType": "UniProtKB reviewed (Swiss-Prot)" },
                { "primaryAccession": "Q00001", "reviewed": "false" },
                { "primaryAccession": "Q00002", "entryType": 7 },
                "not a hit"
            ]
        }))
        .unwrap();

        let hits = response.into_results();
        assert_eq!(hits.len(), 3);
        assert!(hits[0].is_reviewed());
        assert_eq!(hits[1].accession(), Some("Q00001"));
        assert_eq!(hits[1].reviewed, None);
        assert_eq!(hits[2].entry_type, None);
    }

    #[test]
    fn test_mistyped_record_fields_read_as_absent() {
        let record: ProteinRecord = serde_json::from_value(json!({
            "primaryAccession": "P04637",
            "reviewed": "yes",
            "entryAudit": { "firstPublicDate": 19870813, "lastAnnotationUpdateDate": "2024-07-24" },
            "organism": "Homo sapiens",
            "genes": [{ "geneName": { "value": ["TP53"] }, "synonyms": [{ "value": "P53" }] }],
            "uniProtKBCrossReferences": [
                { "database": "PDB", "id": 1 },
                { "database": "PDB", "id": "1TUP" }
            ],
            "comments": { "commentType": "COFACTOR" }
        }))
        .unwrap();

        assert_eq!(record.accession(), Some("P04637"));
        assert!(!record.review_status().is_reviewed());
        let audit = record.audit().unwrap();
        assert_eq!(audit.publication_date(), None);
        assert_eq!(audit.modification_date(), Some("2024-07-24"));
        assert!(record.organism_name().is_none());
        let gene = record.primary_gene().unwrap();
        assert_eq!(gene.name(), None);
        assert_eq!(gene.synonyms().collect::<Vec<_>>(), vec!["P53"]);
        let ids: Vec<_> = record.cross_references().iter().filter_map(|x| x.pdb_id()).collect();
        assert_eq!(ids, vec!["1TUP"]);
        assert!(record.comments().is_empty());
    }
}
