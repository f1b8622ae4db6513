// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Arbitrary titles, bodies and terms against a fresh index. Search must not
//! panic, results stay sorted, and every region lies inside its field.

#![no_main]

use arbitrary::Arbitrary;
use folio::{build_index, corpus, search, Field, SearchOptions, SearchableDocument};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    posts: Vec<(String, String)>,
    term: String,
    threshold: u8,
}

fuzz_target!(|input: Input| {
    let docs: Vec<SearchableDocument> = input
        .posts
        .into_iter()
        .take(16)
        .enumerate()
        .map(|(i, (title, content))| SearchableDocument {
            id: i.to_string(),
            title,
            content,
            url: format!("/blogs/{}", i),
            image: None,
        })
        .collect();
    let count = docs.len();

    let options = SearchOptions {
        threshold: f64::from(input.threshold) / 255.0,
        ..SearchOptions::default()
    };
    let index = build_index(corpus(docs), options);

    // Cap query length to avoid timeout
    let term: String = input.term.chars().take(200).collect();
    let results = search(&index, &term);

    if term.trim().is_empty() {
        assert!(results.is_empty());
    }

    for pair in results.windows(2) {
        assert!(pair[0].score <= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(pair[0].doc_index < pair[1].doc_index);
        }
    }

    for result in &results {
        assert!(result.doc_index < count);
        assert!((0.0..=1.0).contains(&result.score));
        for field in [Field::Title, Field::Content] {
            let len = result.item.field(field).chars().count();
            for region in result.regions(field) {
                assert!(region.start < region.end && region.end <= len);
            }
        }
    }
});
