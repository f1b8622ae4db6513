// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query evaluation: where the rubber meets the road.
//!
//! Everything culminates here. The index has folded every field, the pattern
//! has been compiled into bitmask chunks. Now every record gets scanned, each
//! field scored, and the survivors ranked.
//!
//! # Invariants
//!
//! - **Empty in, empty out**: a blank term returns `[]` without touching the
//!   index.
//! - **Monotonic**: `results[i].score <= results[i + 1].score`.
//! - **Deterministic**: equal scores keep corpus order; the parallel path
//!   returns exactly what the sequential path does.
//! - **Complete match info**: every result has one `FieldMatch` per key, in key
//!   order, with empty regions for fields that did not match.

use crate::fuzzy::Pattern;
use crate::index::{IndexRecord, SearchIndex};
use crate::scoring::{document_score, ranking, FieldScore};
use crate::types::{FieldMatch, SearchResult};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evaluate `term` against every document in `index`.
///
/// Never fails. Blank terms, empty corpora, and empty key lists all produce
/// an empty list.
pub fn search(index: &SearchIndex, term: &str) -> Vec<SearchResult> {
    if term.trim().is_empty() || index.matches_nothing() {
        return Vec::new();
    }
    let Some(pattern) = Pattern::compile(term, index.options()) else {
        return Vec::new();
    };

    let mut results = evaluate(index, &pattern);
    ranking::rank(&mut results);

    tracing::trace!(
        term,
        chunks = pattern.chunk_count(),
        results = results.len(),
        "evaluated query"
    );
    results
}

/// [`search`], keeping only the best `limit` results.
pub fn search_with_limit(index: &SearchIndex, term: &str, limit: usize) -> Vec<SearchResult> {
    let mut results = search(index, term);
    results.truncate(limit);
    results
}

/// Score one record. `None` when no field matched.
fn evaluate_record(index: &SearchIndex, pattern: &Pattern, record: &IndexRecord) -> Option<SearchResult> {
    let mut matches = Vec::with_capacity(index.keys().len());
    let mut scores = Vec::with_capacity(index.keys().len());

    for (key, entry) in index.keys().iter().zip(&record.fields) {
        let hit = entry
            .as_ref()
            .and_then(|entry| pattern.search_in(&entry.folded).map(|hit| (entry.norm, hit)));

        match hit {
            Some((norm, hit)) => {
                scores.push(FieldScore {
                    weight: key.weight,
                    norm,
                    score: hit.score,
                });
                matches.push(FieldMatch {
                    field: key.field,
                    score: Some(hit.score),
                    best: hit.best,
                    regions: hit.regions,
                });
            }
            None => matches.push(FieldMatch::unmatched(key.field)),
        }
    }

    if scores.is_empty() {
        return None;
    }

    let item = index.document(record.doc_index)?;
    Some(SearchResult {
        doc_index: record.doc_index,
        item: std::sync::Arc::clone(item),
        score: document_score(scores, index.options().ignore_field_norm),
        matches,
    })
}

#[cfg(feature = "parallel")]
fn evaluate(index: &SearchIndex, pattern: &Pattern) -> Vec<SearchResult> {
    let records = index.records();
    if records.len() < crate::index::PARALLEL_THRESHOLD {
        return evaluate_sequential(index, pattern);
    }
    records
        .par_iter()
        .filter_map(|record| evaluate_record(index, pattern, record))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate(index: &SearchIndex, pattern: &Pattern) -> Vec<SearchResult> {
    evaluate_sequential(index, pattern)
}

fn evaluate_sequential(index: &SearchIndex, pattern: &Pattern) -> Vec<SearchResult> {
    index
        .records()
        .iter()
        .filter_map(|record| evaluate_record(index, pattern, record))
        .collect()
}
