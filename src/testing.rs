// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::config::SearchOptions;
use crate::index::{build_index, SearchIndex};
use crate::types::{corpus, Corpus, SearchableDocument};

/// Create a simple test document.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: usize, title: &str, content: &str) -> SearchableDocument {
    SearchableDocument {
        id: format!("doc-{}", id),
        title: title.to_string(),
        content: content.to_string(),
        url: format!("/blogs/doc-{}", id),
        image: None,
    }
}

/// Build a corpus from `(title, content)` pairs.
pub fn make_corpus(docs: &[(&str, &str)]) -> Corpus {
    corpus(
        docs.iter()
            .enumerate()
            .map(|(i, (title, content))| make_doc(i, title, content))
            .collect(),
    )
}

/// Build an index over `(title, content)` pairs with default options.
pub fn make_index(docs: &[(&str, &str)]) -> SearchIndex {
    build_index(make_corpus(docs), SearchOptions::default())
}

/// A handful of realistic posts for end-to-end tests.
pub fn sample_posts() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Understanding Closures",
            "A closure captures variables from its surrounding scope.",
        ),
        (
            "React Hooks in Practice",
            "useState and useEffect cover most component needs.",
        ),
        (
            "Styling with Tailwind",
            "Utility classes keep a reactive design system small.",
        ),
        (
            "Deploying a Blog",
            "Static export, a CDN, and a view counter backed by a key value store.",
        ),
    ]
}
