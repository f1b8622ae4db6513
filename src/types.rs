// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of search: documents, fields, match regions, results.
//!
//! Documents come in once, get wrapped in a [`Corpus`], and are never touched
//! again. Everything the search engine hands back points into that corpus by
//! index or by shared reference, so a result can never disagree with the
//! document it describes.
//!
//! # Invariants
//!
//! - **Corpus**: immutable after construction. Identity (`Arc::ptr_eq`) is the
//!   collection identity; the index cache relies on it.
//!
//! - **MatchRegion**: `start < end`, both in chars (Unicode scalar values), not
//!   bytes. Inclusive start, exclusive end.
//!
//! - **SearchResult**: `matches` has one entry per searched field, in key order,
//!   even when the field did not match (empty regions, `score: None`).

use serde::{Deserialize, Serialize};
use std::sync::Arc;

// =============================================================================
// DOCUMENTS
// =============================================================================

/// One post as the search engine sees it.
///
/// `title` and `content` are searched. `url` and `image` ride along so a
/// result can be rendered without a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableDocument {
    pub id: String,
    pub title: String,
    /// Plain text body (markup already stripped).
    pub content: String,
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl SearchableDocument {
    /// Raw text of a searchable field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Content => &self.content,
        }
    }
}

/// The immutable, shared document collection.
///
/// Each document sits behind its own `Arc` so results can hold on to the
/// document they matched without cloning post bodies.
pub type Corpus = Arc<[Arc<SearchableDocument>]>;

/// Wrap a document list into a [`Corpus`].
pub fn corpus(docs: Vec<SearchableDocument>) -> Corpus {
    docs.into_iter().map(Arc::new).collect()
}

/// Which document field a key or match refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Content,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Title, Field::Content];

    /// Matches the serde `rename_all = "lowercase"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Content => "content",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// MATCH REGIONS
// =============================================================================

/// A char-offset range `[start, end)` inside a field's raw text.
///
/// Offsets count Unicode scalar values, the same unit the matcher walks. The
/// highlighter converts them to byte offsets right before slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchRegion {
    pub start: usize,
    pub end: usize,
}

impl MatchRegion {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Build from an inclusive `[start, last]` pair.
    pub fn from_inclusive(start: usize, last: usize) -> Self {
        Self {
            start,
            end: last + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// How one searched field fared against the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMatch {
    pub field: Field,
    /// Bitap score for this field (0.0 = perfect). `None` when it did not match.
    pub score: Option<f64>,
    /// Where the matcher placed its best hit. Regions can also cover
    /// incidental runs of pattern chars; this one is the actual match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best: Option<MatchRegion>,
    /// Ascending, disjoint regions. Empty when the field did not match.
    pub regions: Vec<MatchRegion>,
}

impl FieldMatch {
    pub fn unmatched(field: Field) -> Self {
        Self {
            field,
            score: None,
            best: None,
            regions: Vec::new(),
        }
    }

    pub fn is_match(&self) -> bool {
        self.score.is_some()
    }
}

/// A matching document plus everything needed to render it.
///
/// Lower `score` is better. Ties keep corpus order, so `doc_index` doubles as
/// the final tiebreaker.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Position of the document in the corpus.
    pub doc_index: usize,
    pub item: Arc<SearchableDocument>,
    pub score: f64,
    pub matches: Vec<FieldMatch>,
}

impl SearchResult {
    /// Match details for one field, if that field was searched.
    pub fn field_match(&self, field: Field) -> Option<&FieldMatch> {
        self.matches.iter().find(|m| m.field == field)
    }

    /// Regions for one field; empty when the field had no match or was not searched.
    pub fn regions(&self, field: Field) -> &[MatchRegion] {
        self.field_match(field)
            .map(|m| m.regions.as_slice())
            .unwrap_or(&[])
    }

    /// The best hit in one field, if it matched.
    pub fn best(&self, field: Field) -> Option<MatchRegion> {
        self.field_match(field).and_then(|m| m.best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_accessor() {
        let doc = SearchableDocument {
            id: "a".to_string(),
            title: "Title".to_string(),
            content: "Body".to_string(),
            url: "/blogs/a".to_string(),
            image: None,
        };
        assert_eq!(doc.field(Field::Title), "Title");
        assert_eq!(doc.field(Field::Content), "Body");
    }

    #[test]
    fn test_region_from_inclusive() {
        let region = MatchRegion::from_inclusive(2, 4);
        assert_eq!(region, MatchRegion::new(2, 5));
        assert_eq!(region.len(), 3);
        assert!(!region.is_empty());
    }

    #[test]
    fn test_parse_document_without_image() {
        let json = r#"{"id": "x", "title": "T", "content": "c", "url": "/x"}"#;
        let doc: SearchableDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.image, None);
    }

    #[test]
    fn test_corpus_identity() {
        let a = corpus(vec![]);
        let b = Arc::clone(&a);
        assert!(Arc::ptr_eq(&a, &b));
    }
}
