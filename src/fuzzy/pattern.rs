// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A compiled query: folded pattern split into bitmask-sized chunks.
//!
//! Compiling once per query (not once per field) keeps the alphabet tables
//! out of the hot loop. Patterns longer than [`MAX_BITS`] are cut into
//! 32-char chunks; when the length isn't a multiple of 32 the last chunk is
//! the final 32 chars, overlapping its neighbour. Each chunk is searched at
//! `location + chunk_start` and the scores are averaged.

use super::bitap::{self, Alphabet, BitapParams, MAX_BITS};
use crate::config::SearchOptions;
use crate::types::MatchRegion;
use crate::util::normalize::normalize_query;

#[derive(Debug, Clone)]
struct Chunk {
    chars: Vec<char>,
    alphabet: Alphabet,
    start_index: usize,
}

/// A field-level hit.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldHit {
    pub score: f64,
    /// Span of the best-scoring chunk match, `pattern`-sized from where bitap
    /// located it.
    pub best: Option<MatchRegion>,
    pub regions: Vec<MatchRegion>,
}

/// The compiled form of one query term.
#[derive(Debug, Clone)]
pub struct Pattern {
    chars: Vec<char>,
    chunks: Vec<Chunk>,
    params: BitapParams,
}

impl Pattern {
    /// Normalize and compile `term`. Returns `None` for blank terms.
    pub fn compile(term: &str, options: &SearchOptions) -> Option<Self> {
        let chars = normalize_query(term, options.folding());
        if chars.is_empty() {
            return None;
        }

        let mut chunks = Vec::new();
        let mut add_chunk = |start: usize, slice: &[char]| {
            chunks.push(Chunk {
                chars: slice.to_vec(),
                alphabet: bitap::pattern_alphabet(slice),
                start_index: start,
            });
        };

        let len = chars.len();
        if len > MAX_BITS {
            let remainder = len % MAX_BITS;
            let end = len - remainder;
            for start in (0..end).step_by(MAX_BITS) {
                add_chunk(start, &chars[start..start + MAX_BITS]);
            }
            if remainder > 0 {
                let start = len - MAX_BITS;
                add_chunk(start, &chars[start..]);
            }
        } else {
            add_chunk(0, &chars);
        }

        Some(Self {
            chars,
            chunks,
            params: BitapParams {
                location: options.location,
                distance: options.distance,
                threshold: options.threshold,
                find_all_matches: options.find_all_matches,
                min_match_char_length: options.min_match_char_length,
                include_matches: options.include_matches,
                ignore_location: options.ignore_location,
            },
        })
    }

    /// The folded pattern.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Match against one folded field text.
    pub fn search_in(&self, text: &[char]) -> Option<FieldHit> {
        // Whole-field equality is the only perfect score
        if self.chars == text {
            return Some(FieldHit {
                score: 0.0,
                best: Some(MatchRegion::new(0, text.len())),
                regions: vec![MatchRegion::new(0, text.len())],
            });
        }

        let mut regions = Vec::new();
        let mut total_score = 0.0;
        let mut has_match = false;
        let mut best: Option<(f64, MatchRegion)> = None;

        for chunk in &self.chunks {
            let params = BitapParams {
                location: self.params.location + chunk.start_index,
                ..self.params
            };
            let result = bitap::search(text, &chunk.chars, &chunk.alphabet, &params);
            total_score += result.score;
            if result.is_match {
                has_match = true;
                regions.extend(result.regions);
                if let Some(location) = result.best_location {
                    let span = MatchRegion::new(location, (location + chunk.chars.len()).min(text.len()));
                    // Strictly better only: ties keep the earlier chunk
                    let better = match best {
                        Some((score, _)) => result.score < score,
                        None => true,
                    };
                    if better {
                        best = Some((result.score, span));
                    }
                }
            }
        }

        if !has_match {
            return None;
        }

        Some(FieldHit {
            score: total_score / self.chunks.len() as f64,
            best: best.map(|(_, span)| span),
            regions: merge_regions(regions),
        })
    }
}

/// Sort and coalesce overlapping or touching regions from separate chunks.
fn merge_regions(mut regions: Vec<MatchRegion>) -> Vec<MatchRegion> {
    regions.sort();
    let mut merged: Vec<MatchRegion> = Vec::with_capacity(regions.len());
    for region in regions {
        match merged.last_mut() {
            Some(last) if region.start <= last.end => last.end = last.end.max(region.end),
            _ => merged.push(region),
        }
    }
    merged
}
