//! Best-candidate selection among search hits

use super::models::SearchResult;

/// Choose the search hit to fetch in full.
///
/// Policy:
/// 1. No hits: nothing.
/// 2. Otherwise the first reviewed hit, in upstream order.
/// 3. Otherwise the head of the original list.
pub fn select_best(results: &[SearchResult]) -> Option<&SearchResult> {
    results
        .iter()
        .find(|hit| hit.is_reviewed())
        .or_else(|| results.first())
}
