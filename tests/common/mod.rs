//! Shared test utilities and fixtures.

#![allow(dead_code)]

use folio::highlight::Segment;
use folio::types::{Field, SearchResult};
use std::sync::Arc;

// Re-export canonical test utilities from folio::testing
pub use folio::testing::{make_corpus, make_doc, make_index, sample_posts};

/// Index over the sample posts, shared the way the site shares it.
pub fn sample_index() -> Arc<folio::SearchIndex> {
    Arc::new(make_index(&sample_posts()))
}

/// Text of every highlighted segment, in order.
pub fn highlighted<'a>(segments: &[Segment<'a>]) -> Vec<&'a str> {
    segments
        .iter()
        .filter(|s| s.is_highlighted())
        .map(|s| s.text())
        .collect()
}

/// Concatenation of all segment texts.
pub fn joined(segments: &[Segment<'_>]) -> String {
    segments.iter().map(|s| s.text()).collect()
}

/// Titles of the results, best first.
pub fn titles(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.item.title.as_str()).collect()
}

/// Chars of `field` covered by region `i` of `result`.
pub fn region_text(result: &SearchResult, field: Field, i: usize) -> String {
    let region = result.regions(field)[i];
    result
        .item
        .field(field)
        .chars()
        .skip(region.start)
        .take(region.len())
        .collect()
}
