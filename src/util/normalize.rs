// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text folding for case- and accent-insensitive matching.
//!
//! The matcher reports char offsets that the highlighter applies to the *raw*
//! field text. That only works if folding never changes the number of chars,
//! so every function here maps one char to exactly one char:
//!
//! - "Café" → "cafe" (with `ignore_diacritics`)
//! - "İ" → "i" (first char of the lowercase expansion, not "i̇")
//!
//! Query strings additionally get whitespace collapsed, which is safe because
//! query offsets never reach the highlighter.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// How text should be folded before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Folding {
    pub case_sensitive: bool,
    pub ignore_diacritics: bool,
}

impl Folding {
    /// Fold one char into exactly one char.
    #[inline]
    pub fn fold_char(&self, c: char) -> char {
        let c = if self.ignore_diacritics { strip_diacritic(c) } else { c };
        if self.case_sensitive {
            c
        } else {
            c.to_lowercase().next().unwrap_or(c)
        }
    }

    /// Fold a field's text. Output has the same char count as the input.
    pub fn fold(&self, text: &str) -> Vec<char> {
        text.chars().map(|c| self.fold_char(c)).collect()
    }
}

/// Normalize a query: trim, collapse internal whitespace, then fold.
///
/// Returns an empty vector for empty or whitespace-only input.
pub fn normalize_query(query: &str, folding: Folding) -> Vec<char> {
    let collapsed = query.split_whitespace().collect::<Vec<_>>().join(" ");
    folding.fold(&collapsed)
}

/// Base character of a precomposed letter ("é" → "e").
///
/// NFD decomposes into base + combining marks; the base comes first.
#[cfg(feature = "unicode-normalization")]
fn strip_diacritic(c: char) -> char {
    if c.is_ascii() {
        return c;
    }
    c.nfd().find(|d| !is_combining_mark(*d)).unwrap_or(c)
}

/// Without unicode-normalization (lean WASM builds) accents are kept.
#[cfg(not(feature = "unicode-normalization"))]
fn strip_diacritic(c: char) -> char {
    c
}

/// Combining marks (Unicode category Mn) in the common diacritic blocks.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
