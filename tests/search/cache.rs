//! The index is rebuilt only for a different collection.

use std::sync::Arc;

use folio::{IndexCache, SearchOptions};

use super::common::{make_corpus, sample_posts};

#[test]
fn test_same_collection_reuses_index() {
    let cache = IndexCache::new(SearchOptions::default());
    let docs = make_corpus(&sample_posts());
    let first = cache.get(&docs);
    let second = cache.get(&Arc::clone(&docs));
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_equal_but_distinct_collection_rebuilds() {
    let cache = IndexCache::new(SearchOptions::default());
    let first = cache.get(&make_corpus(&sample_posts()));
    let second = cache.get(&make_corpus(&sample_posts()));
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.len(), second.len());
}
