//! PubChem PUG REST property-table models

use pdblink_common::types::ChemicalProperties;
use serde::Deserialize;
use serde_json::Value;

/// Properties requested for every cofactor, in request order.
pub const REQUESTED_PROPERTIES: &[&str] = &[
    "ExactMass",
    "InChI",
    "InChIKey",
    "IUPACName",
    "CanonicalSMILES",
];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyTableResponse {
    #[serde(rename = "PropertyTable")]
    pub property_table: Option<PropertyTable>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyTable {
    #[serde(rename = "Properties")]
    pub properties: Option<Vec<CompoundProperties>>,
}

impl PropertyTableResponse {
    /// The row to use for a name lookup.
    ///
    /// Policy: the first row wins; further matches are not disambiguated.
    pub fn into_first(self) -> Option<CompoundProperties> {
        self.property_table?.properties?.into_iter().next()
    }
}

/// One row of a property table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CompoundProperties {
    #[serde(rename = "CID")]
    pub cid: Option<u64>,
    /// Number in older responses, string in newer ones
    #[serde(rename = "ExactMass")]
    pub exact_mass: Option<Value>,
    #[serde(rename = "InChI")]
    pub inchi: Option<String>,
    #[serde(rename = "InChIKey")]
    pub inchi_key: Option<String>,
    #[serde(rename = "IUPACName")]
    pub iupac_name: Option<String>,
    #[serde(rename = "CanonicalSMILES")]
    pub canonical_smiles: Option<String>,
    /// Newer responses report canonical SMILES under this key
    #[serde(rename = "SMILES")]
    pub smiles: Option<String>,
}

impl CompoundProperties {
    /// Attach the looked-up name and flatten into an output row
    pub fn into_chemical_properties(self, name: &str) -> ChemicalProperties {
        ChemicalProperties {
            name: name.to_string(),
            exact_mass: self.exact_mass.as_ref().and_then(opaque_text),
            inchi: self.inchi,
            inchi_key: self.inchi_key,
            iupac_name: self.iupac_name,
            smiles: self.canonical_smiles.or(self.smiles),
        }
    }
}

fn opaque_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
