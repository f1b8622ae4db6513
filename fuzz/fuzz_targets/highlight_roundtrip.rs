// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlighting and excerpts.
//!
//! Regions come straight from the fuzzer: overlapping, reversed, past the
//! end of the text. Segments must still tile the text exactly.

#![no_main]

use arbitrary::Arbitrary;
use folio::highlight::{excerpt, highlight, ExcerptOptions, ELLIPSIS};
use folio::MatchRegion;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    regions: Vec<(u16, u16)>,
    best: Option<(u16, u16)>,
    min_len: u8,
    margin: u8,
}

fuzz_target!(|input: Input| {
    let regions: Vec<MatchRegion> = input
        .regions
        .iter()
        .take(64)
        .map(|&(start, end)| MatchRegion::new(start as usize, end as usize))
        .collect();

    let segments = highlight(&input.text, &regions, input.min_len as usize);

    // Concatenation is the input
    let joined: String = segments.iter().map(|s| s.text()).collect();
    assert_eq!(joined, input.text);

    // No empty segments, and no highlight shorter than the minimum
    for segment in &segments {
        assert!(!segment.text().is_empty());
        if segment.is_highlighted() {
            assert!(segment.text().chars().count() >= input.min_len as usize);
        }
    }

    let options = ExcerptOptions {
        margin: input.margin as usize,
        min_match_len: input.min_len as usize,
    };
    let best = input
        .best
        .map(|(start, end)| MatchRegion::new(start as usize, end as usize));
    let cut = excerpt(&input.text, &regions, best, options);
    let plain = cut.to_plain();
    let body = plain.trim_start_matches(ELLIPSIS).trim_end_matches(ELLIPSIS);
    assert!(input.text.contains(body));
});
