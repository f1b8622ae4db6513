// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighting: split a field into plain and highlighted segments.
//!
//! Segments borrow from the input, so the renderer never allocates text and
//! can't alter it. Joining every segment in order gives back the input
//! exactly.
//!
//! # Invariants
//!
//! - **Lossless**: `segments.iter().map(Segment::text).collect::<String>() == text`.
//! - **Min length**: a region shorter than `min_match_len` chars (after
//!   clamping) is never emitted as `Highlighted`.
//! - **Never panics**: regions are sorted by start, clamped to the text, and
//!   clipped so they begin at or after the previous highlight's end. An
//!   overlapping region keeps only its non-overlapping tail; the first region
//!   to claim a char keeps it.
//!
//! Offsets are chars, converted to byte positions once per call, so
//! multi-byte text slices on char boundaries.

mod excerpt;
mod html;

pub use excerpt::{excerpt, Excerpt, ExcerptOptions, ELLIPSIS};
pub use html::{escape_html, to_html};

use crate::types::MatchRegion;

/// A run of field text, either matched or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Highlighted(&'a str),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Plain(s) | Segment::Highlighted(s) => s,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self, Segment::Highlighted(_))
    }
}

/// Byte offset of every char boundary, plus the end of the string.
///
/// `offsets[i]` is where char `i` starts; `offsets[char_count]` is `text.len()`.
pub(crate) fn char_offsets(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .collect()
}

/// Split `text` at `regions` (char offsets, exclusive end).
///
/// Regions shorter than `min_match_len` stay in the surrounding plain text.
pub fn highlight<'a>(text: &'a str, regions: &[MatchRegion], min_match_len: usize) -> Vec<Segment<'a>> {
    let offsets = char_offsets(text);
    let char_count = offsets.len() - 1;
    let byte = |i: usize| offsets[i];

    let mut ordered: Vec<MatchRegion> = regions.to_vec();
    ordered.sort_by_key(|r| r.start);

    let mut segments = Vec::new();
    let mut cursor = 0;

    for region in ordered {
        let start = region.start.max(cursor).min(char_count);
        let end = region.end.min(char_count);
        if end <= start || end - start < min_match_len {
            continue;
        }
        if start > cursor {
            segments.push(Segment::Plain(&text[byte(cursor)..byte(start)]));
        }
        segments.push(Segment::Highlighted(&text[byte(start)..byte(end)]));
        cursor = end;
    }

    if cursor < char_count {
        segments.push(Segment::Plain(&text[byte(cursor)..]));
    }
    segments
}
