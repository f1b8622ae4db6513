// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Ascending score, then corpus order. Scores are finite by construction
//! (products of numbers in `[0, 1]`), but a NaN would compare equal here and
//! fall through to corpus order instead of poisoning the sort.

use crate::types::SearchResult;
use std::cmp::Ordering;

/// Compare two search results for ranking.
///
/// Sort order:
/// 1. **Score** - lower wins
/// 2. **Doc index** - earlier in the corpus wins, so equal scores keep
///    collection order and repeated searches are deterministic
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    match a.score.partial_cmp(&b.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.doc_index.cmp(&b.doc_index),
    }
}

/// Sort in place by [`compare_results`].
pub fn rank(results: &mut [SearchResult]) {
    results.sort_by(compare_results);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_doc;
    use std::sync::Arc;

    fn result(doc_index: usize, score: f64) -> SearchResult {
        SearchResult {
            doc_index,
            item: Arc::new(make_doc(doc_index, "Doc", "")),
            score,
            matches: vec![],
        }
    }

    #[test]
    fn test_lower_score_wins() {
        assert_eq!(
            compare_results(&result(5, 0.1), &result(0, 0.2)),
            Ordering::Less
        );
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let mut results = vec![result(3, 0.5), result(1, 0.5), result(2, 0.1)];
        rank(&mut results);
        let order: Vec<usize> = results.iter().map(|r| r.doc_index).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }

    #[test]
    fn test_nan_falls_back_to_index() {
        assert_eq!(
            compare_results(&result(0, f64::NAN), &result(1, 0.5)),
            Ordering::Less
        );
    }
}
