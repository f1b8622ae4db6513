// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: fold every searched field once, up front.
//!
//! A fuzzy scan has to touch every char of every field anyway, so there is no
//! posting list or suffix structure to build. What the index buys is doing the
//! per-document work exactly once: case/diacritic folding, blank-field
//! filtering, field-length norms, and key-weight normalization.
//!
//! # Invariants
//!
//! - **Bound to one corpus**: `SearchIndex::corpus()` is the exact `Arc` it was
//!   built from. [`IndexCache`] compares by pointer, never by content.
//!
//! - **Char-aligned**: `FieldEntry::folded` has the same char count as the raw
//!   field text, so match offsets apply to the raw text unchanged.
//!
//! - **Read-only**: nothing mutates an index after `build_index` returns.
//!   `SearchIndex` is `Send + Sync` and is shared behind `Arc`.

mod cache;

pub use cache::IndexCache;

use crate::config::SearchOptions;
use crate::scoring::{field_norm, normalize_weights};
use crate::types::{Corpus, Field, SearchableDocument};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Corpus size above which records are built and searched with rayon.
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 64;

/// One searched field of one document, ready to scan.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEntry {
    /// Folded text, char-aligned with the raw field.
    pub folded: Vec<char>,
    /// Field-length norm (see [`crate::scoring::field_norm`]).
    pub norm: f64,
}

/// A searched field with its weight normalized across all keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedKey {
    pub field: Field,
    pub weight: f64,
}

/// Everything the evaluator needs about one document.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexRecord {
    /// Position in the corpus.
    pub doc_index: usize,
    /// One slot per key, in key order. `None` for blank fields.
    pub fields: Vec<Option<FieldEntry>>,
}

/// The searchable form of a corpus.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    corpus: Corpus,
    options: SearchOptions,
    keys: Vec<IndexedKey>,
    records: Vec<IndexRecord>,
}

impl SearchIndex {
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn keys(&self) -> &[IndexedKey] {
        &self.keys
    }

    /// Records for documents with at least one non-blank searched field.
    pub fn records(&self) -> &[IndexRecord] {
        &self.records
    }

    pub fn document(&self, doc_index: usize) -> Option<&std::sync::Arc<SearchableDocument>> {
        self.corpus.get(doc_index)
    }

    /// Number of documents in the bound corpus, indexed or not.
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// True when no query can ever match (no documents or no keys).
    pub fn matches_nothing(&self) -> bool {
        self.records.is_empty() || self.keys.is_empty()
    }
}

/// Build an index over `corpus`.
///
/// Never fails: an empty corpus or an empty key list yields an index that
/// matches nothing. Call [`SearchOptions::validate`] first to reject options
/// the matcher cannot honor.
pub fn build_index(corpus: Corpus, options: SearchOptions) -> SearchIndex {
    let weights: Vec<f64> = options.keys.iter().map(|k| k.weight).collect();
    let keys: Vec<IndexedKey> = options
        .keys
        .iter()
        .zip(normalize_weights(&weights))
        .map(|(key, weight)| IndexedKey {
            field: key.field,
            weight,
        })
        .collect();

    let records = build_records(&corpus, &keys, &options);

    tracing::debug!(
        documents = corpus.len(),
        records = records.len(),
        keys = keys.len(),
        "built search index"
    );

    SearchIndex {
        corpus,
        options,
        keys,
        records,
    }
}

fn build_record(
    doc_index: usize,
    doc: &SearchableDocument,
    keys: &[IndexedKey],
    options: &SearchOptions,
) -> Option<IndexRecord> {
    let folding = options.folding();
    let fields: Vec<Option<FieldEntry>> = keys
        .iter()
        .map(|key| {
            let text = doc.field(key.field);
            if text.trim().is_empty() {
                return None;
            }
            Some(FieldEntry {
                folded: folding.fold(text),
                norm: field_norm(text, options.field_norm_weight),
            })
        })
        .collect();

    fields.iter().any(Option::is_some).then_some(IndexRecord { doc_index, fields })
}

#[cfg(feature = "parallel")]
fn build_records(corpus: &Corpus, keys: &[IndexedKey], options: &SearchOptions) -> Vec<IndexRecord> {
    if corpus.len() < PARALLEL_THRESHOLD {
        return build_records_sequential(corpus, keys, options);
    }
    // par_iter + collect keeps corpus order
    corpus
        .par_iter()
        .enumerate()
        .filter_map(|(i, doc)| build_record(i, doc, keys, options))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn build_records(corpus: &Corpus, keys: &[IndexedKey], options: &SearchOptions) -> Vec<IndexRecord> {
    build_records_sequential(corpus, keys, options)
}

fn build_records_sequential(
    corpus: &Corpus,
    keys: &[IndexedKey],
    options: &SearchOptions,
) -> Vec<IndexRecord> {
    corpus
        .iter()
        .enumerate()
        .filter_map(|(i, doc)| build_record(i, doc, keys, options))
        .collect()
}
