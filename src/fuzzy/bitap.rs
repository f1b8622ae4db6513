// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bitap approximate matching with location-aware scoring.
//!
//! The pattern becomes a bitmask per distinct char. Scanning the text right to
//! left, bit `k` of the state says "the last `k + 1` pattern chars match here
//! with at most `errors` edits". One pass per allowed error count, so the cost
//! is O(pattern_len * scanned_chars), with the scanned window shrinking as the
//! best score improves.
//!
//! # Scoring
//!
//! ```text
//! score = errors / pattern_len + |expected_location - location| / distance
//! ```
//!
//! The second term disappears with `ignore_location`. A candidate counts only
//! if its score is within the threshold, and the threshold tightens to the
//! best score found so far. Scores are floored at [`MIN_SCORE`] so only a
//! whole-field equality (handled by the caller) reports a perfect 0.
//!
//! # Match mask
//!
//! Every scanned char that appears anywhere in the pattern is marked, plus
//! every exact occurrence. That is deliberately generous: short incidental
//! runs show up as regions, and the highlighter's minimum length filters them.

use std::collections::HashMap;

use crate::types::MatchRegion;

/// Longest pattern a single bitmask can hold. Longer patterns are chunked.
pub const MAX_BITS: usize = 32;

/// Floor for non-identical matches.
pub const MIN_SCORE: f64 = 0.001;

/// Per-char bitmask: bit `len - i - 1` is set when `pattern[i] == c`.
pub type Alphabet = HashMap<char, u64>;

/// Build the char → bitmask table for a pattern of at most [`MAX_BITS`] chars.
pub fn pattern_alphabet(pattern: &[char]) -> Alphabet {
    let len = pattern.len();
    let mut alphabet = Alphabet::with_capacity(len);
    for (i, c) in pattern.iter().enumerate() {
        *alphabet.entry(*c).or_insert(0) |= 1u64 << (len - i - 1);
    }
    alphabet
}

/// Knobs the bitap scan needs; a subset of `SearchOptions`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitapParams {
    pub location: usize,
    pub distance: usize,
    pub threshold: f64,
    pub find_all_matches: bool,
    pub min_match_char_length: usize,
    pub include_matches: bool,
    pub ignore_location: bool,
}

/// Outcome of scanning one text with one pattern chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct BitapMatch {
    pub is_match: bool,
    pub score: f64,
    /// Where the best-scoring candidate starts. `None` when nothing matched.
    pub best_location: Option<usize>,
    pub regions: Vec<MatchRegion>,
}

/// Score a candidate with `errors` edits found at `current_location`.
pub fn compute_score(
    pattern_len: usize,
    errors: usize,
    current_location: usize,
    expected_location: usize,
    params: &BitapParams,
) -> f64 {
    let accuracy = errors as f64 / pattern_len as f64;
    if params.ignore_location {
        return accuracy;
    }

    let proximity = expected_location.abs_diff(current_location);
    if params.distance == 0 {
        // No drift allowed: anywhere but the expected spot is a total miss
        return if proximity > 0 { 1.0 } else { accuracy };
    }

    accuracy + proximity as f64 / params.distance as f64
}

/// Scan `text` for `pattern` allowing edits, per the module docs.
///
/// Both slices must already be folded the same way. `pattern` must be
/// non-empty and at most [`MAX_BITS`] chars; `alphabet` must come from
/// [`pattern_alphabet`] on the same pattern.
pub fn search(
    text: &[char],
    pattern: &[char],
    alphabet: &Alphabet,
    params: &BitapParams,
) -> BitapMatch {
    debug_assert!(!pattern.is_empty() && pattern.len() <= MAX_BITS);

    let pattern_len = pattern.len();
    let text_len = text.len();
    let expected_location = params.location.min(text_len);
    let compute_matches = params.min_match_char_length > 1 || params.include_matches;

    let mut current_threshold = params.threshold;
    let mut match_mask = vec![false; if compute_matches { text_len } else { 0 }];

    // Exact occurrences first: cheap, and they tighten the threshold before
    // the bit-parallel passes start.
    let mut from = expected_location;
    while let Some(index) = find_exact(text, pattern, from) {
        let score = compute_score(pattern_len, 0, index, expected_location, params);
        current_threshold = current_threshold.min(score);
        from = index + pattern_len;
        if compute_matches {
            match_mask[index..index + pattern_len].fill(true);
        }
    }

    let mut best: Option<(usize, f64)> = None;
    let mut last_bits: Vec<u64> = Vec::new();
    let mut bin_max = pattern_len + text_len;
    let mask = 1u64 << (pattern_len - 1);

    for errors in 0..pattern_len {
        // Binary search for how far from the expected location a match with
        // this many errors could still beat the threshold.
        let mut bin_min = 0;
        let mut bin_mid = bin_max;
        while bin_min < bin_mid {
            let score = compute_score(
                pattern_len,
                errors,
                expected_location + bin_mid,
                expected_location,
                params,
            );
            if score <= current_threshold {
                bin_min = bin_mid;
            } else {
                bin_max = bin_mid;
            }
            bin_mid = (bin_max - bin_min) / 2 + bin_min;
        }
        bin_max = bin_mid;

        let mut start = (expected_location + 1).saturating_sub(bin_mid).max(1);
        let finish = if params.find_all_matches {
            text_len
        } else {
            (expected_location + bin_mid).min(text_len) + pattern_len
        };

        let mut bits = vec![0u64; finish + 2];
        bits[finish + 1] = (1u64 << errors) - 1;

        let mut j = finish;
        while j >= start {
            let current_location = j - 1;
            let char_match = text
                .get(current_location)
                .and_then(|c| alphabet.get(c))
                .copied()
                .unwrap_or(0);

            if compute_matches && current_location < text_len {
                match_mask[current_location] = char_match != 0;
            }

            // Exact-match transition
            bits[j] = ((bits[j + 1] << 1) | 1) & char_match;

            // Substitution, insertion, deletion from the previous error level
            if errors > 0 {
                let prev_next = last_bits.get(j + 1).copied().unwrap_or(0);
                let prev_here = last_bits.get(j).copied().unwrap_or(0);
                bits[j] |= ((prev_next | prev_here) << 1) | 1 | prev_next;
            }

            if bits[j] & mask != 0 {
                let score =
                    compute_score(pattern_len, errors, current_location, expected_location, params);
                if score <= current_threshold {
                    current_threshold = score;
                    best = Some((current_location, score));

                    // Already at or before the expected spot: nothing closer left
                    if current_location <= expected_location {
                        break;
                    }
                    // Don't scan further past the expected location than we already are
                    start = (2 * expected_location)
                        .saturating_sub(current_location)
                        .max(1);
                }
            }

            j -= 1;
        }

        // One more error can't beat what we have: stop
        let next = compute_score(
            pattern_len,
            errors + 1,
            expected_location,
            expected_location,
            params,
        );
        if next > current_threshold {
            break;
        }
        last_bits = bits;
    }

    let mut result = BitapMatch {
        is_match: best.is_some(),
        score: best.map_or(1.0, |(_, score)| score).max(MIN_SCORE),
        best_location: best.map(|(location, _)| location),
        regions: Vec::new(),
    };

    if compute_matches {
        let regions = mask_to_regions(&match_mask, params.min_match_char_length);
        if regions.is_empty() {
            result.is_match = false;
            result.best_location = None;
        } else if params.include_matches {
            result.regions = regions;
        }
    }

    result
}

/// First exact occurrence of `pattern` in `text` at or after `from`.
fn find_exact(text: &[char], pattern: &[char], from: usize) -> Option<usize> {
    if pattern.len() > text.len() || from > text.len() - pattern.len() {
        return None;
    }
    text[from..]
        .windows(pattern.len())
        .position(|w| w == pattern)
        .map(|i| i + from)
}

/// Collapse a per-char match mask into regions of at least `min_len` chars.
pub fn mask_to_regions(mask: &[bool], min_len: usize) -> Vec<MatchRegion> {
    let mut regions = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, &hit) in mask.iter().enumerate() {
        match (hit, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                if i - start >= min_len {
                    regions.push(MatchRegion::new(start, i));
                }
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start {
        if mask.len() - start >= min_len {
            regions.push(MatchRegion::new(start, mask.len()));
        }
    }

    regions
}
