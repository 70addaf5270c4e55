//! Cofactor lookup within a protein record's annotations

use super::models::ProteinRecord;

/// Name of the cofactor a protein record annotates.
///
/// Policy: one cofactor per protein. The first `COFACTOR` comment decides, and within
/// it only the first listed cofactor is reported. A first `COFACTOR` comment with no
/// cofactors (or a nameless first cofactor) yields nothing.
pub fn find_cofactor(record: Option<&ProteinRecord>) -> Option<&str> {
    record?
        .comments()
        .iter()
        .find(|comment| comment.is_cofactor())?
        .cofactors()
        .first()?
        .name()
}
