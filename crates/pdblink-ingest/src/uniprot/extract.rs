//! Flat biological summary of a protein record
//!
//! Extraction is best-effort: each field is read independently, and a field the record
//! lacks only leaves that field empty.

use super::models::ProteinRecord;
use pdblink_common::types::BiologicalSummary;
use std::collections::BTreeSet;

/// Project a protein record onto a [`BiologicalSummary`].
///
/// No record means no summary; a record always yields one.
pub fn extract_summary(record: Option<&ProteinRecord>) -> Option<BiologicalSummary> {
    let record = record?;

    let audit = record.audit();
    let gene = record.primary_gene();

    Some(BiologicalSummary {
        uniprot_id: record.accession().map(str::to_string),
        publication_date: audit.and_then(|a| a.publication_date()).map(str::to_string),
        modification_date: audit.and_then(|a| a.modification_date()).map(str::to_string),
        review_status: record.review_status(),
        gene_name: gene.and_then(|g| g.name()).map(str::to_string),
        synonyms: gene
            .map(|g| g.synonyms().map(str::to_string).collect())
            .unwrap_or_default(),
        organism: record.organism_name().map(str::to_string),
        pdb_ids: structure_ids(record),
    })
}

/// Sorted, deduplicated PDB identifiers cross-referenced by `record`
pub fn structure_ids(record: &ProteinRecord) -> BTreeSet<String> {
    record
        .cross_references()
        .iter()
        .filter_map(|xref| xref.pdb_id())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pdblink_common::types::ReviewStatus;
    use proptest::prelude::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> ProteinRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_absent_record_yields_no_summary() {
        assert!(extract_summary(None).is_none());
    }

    #[test]
    fn test_full_record() {
        let record = record(json!({
            "primaryAccession": "P04637",
            "entryType": "UniProtKB reviewed (Swiss-Prot)",
            "entryAudit": {
                "firstPublicDate": "1988-08-01",
                "lastAnnotationUpdateDate": "2024-11-27"
            },
            "organism": { "scientificName": "Homo sapiens" },
            "genes": [{
                "geneName": { "value": "TP53" },
                "synonyms": [{ "value": "P53" }]
            }],
            "uniProtKBCrossReferences": [
                { "database": "PDB", "id": "2OCJ" },
                { "database": "EMBL", "id": "X02469" },
                { "database": "PDB", "id": "1TUP" },
                { "database": "PDB", "id": "2OCJ" }
            ]
        }));

        let summary = extract_summary(Some(&record)).unwrap();
        assert_eq!(summary.uniprot_id.as_deref(), Some("P04637"));
        assert_eq!(summary.publication_date.as_deref(), Some("1988-08-01"));
        assert_eq!(summary.modification_date.as_deref(), Some("2024-11-27"));
        assert_eq!(summary.review_status, ReviewStatus::Reviewed);
        assert_eq!(summary.gene_name.as_deref(), Some("TP53"));
        assert_eq!(summary.synonyms, vec!["P53".to_string()]);
        assert_eq!(summary.organism.as_deref(), Some("Homo sapiens"));
        assert_eq!(
            summary.pdb_ids.into_iter().collect::<Vec<_>>(),
            vec!["1TUP".to_string(), "2OCJ".to_string()]
        );
    }

    #[test]
    fn test_empty_record_still_yields_summary() {
        let summary = extract_summary(Some(&ProteinRecord::default())).unwrap();
        assert_eq!(summary.uniprot_id, None);
        assert_eq!(summary.review_status, ReviewStatus::Unreviewed);
        assert!(summary.synonyms.is_empty());
        assert!(summary.pdb_ids.is_empty());
    }

    #[test]
    fn test_only_first_gene_is_used() {
        let record = record(json!({
            "genes": [
                { "geneName": { "value": "HBA1" }, "synonyms": [{ "value": "HBA" }] },
                { "geneName": { "value": "HBA2" }, "synonyms": [{ "value": "HBA-T2" }] }
            ]
        }));

        let summary = extract_summary(Some(&record)).unwrap();
        assert_eq!(summary.gene_name.as_deref(), Some("HBA1"));
        assert_eq!(summary.synonyms, vec!["HBA".to_string()]);
    }

    #[test]
    fn test_first_gene_without_name_keeps_synonyms() {
        let record = record(json!({
            "genes": [{ "synonyms": [{ "value": "ORF1" }] }, { "geneName": { "value": "B" } }]
        }));

        let summary = extract_summary(Some(&record)).unwrap();
        assert_eq!(summary.gene_name, None);
        assert_eq!(summary.synonyms, vec!["ORF1".to_string()]);
    }

    #[test]
    fn test_legacy_last_modified_is_used() {
        let record = record(json!({
            "entryAudit": { "firstPublicDate": "2001-01-01", "lastModified": "2010-05-05" }
        }));

        let summary = extract_summary(Some(&record)).unwrap();
        assert_eq!(summary.modification_date.as_deref(), Some("2010-05-05"));
    }

    proptest! {
        #[test]
        fn prop_structure_ids_sorted_and_unique(
            ids in proptest::collection::vec("[1-9][A-Z0-9]{3}", 0..30)
        ) {
            let xrefs: Vec<_> = ids
                .iter()
                .map(|id| json!({ "database": "PDB", "id": id }))
                .collect();
            let record = record(json!({ "uniProtKBCrossReferences": xrefs }));

            let found: Vec<String> = structure_ids(&record).into_iter().collect();
            let mut expected = ids.clone();
            expected.sort();
            expected.dedup();
            prop_assert_eq!(found, expected);
        }
    }
}
