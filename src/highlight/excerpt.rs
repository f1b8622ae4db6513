// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Excerpts: a window of a long field around its best match.
//!
//! The window starts as `margin` chars either side of the anchor: the region
//! holding the matcher's best hit, or else the first region that would
//! actually be highlighted. It then grows until neither edge cuts a region,
//! and cuts no word shorter than [`MAX_WORD_GROWTH`]. Region growth has no
//! limit, so a region is only ever cut when the text itself ends. Text
//! without whitespace (CJK, long URLs) is cut mid-word instead.

use super::{char_offsets, highlight, Segment};
use crate::types::MatchRegion;

/// Marker for text cut off at either end of an excerpt.
pub const ELLIPSIS: &str = "...";

/// How far past the initial window an edge may move to finish a word.
pub const MAX_WORD_GROWTH: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcerptOptions {
    /// Chars kept on each side of the anchor region before word expansion.
    pub margin: usize,
    pub min_match_len: usize,
}

impl Default for ExcerptOptions {
    fn default() -> Self {
        Self {
            margin: 50,
            min_match_len: 3,
        }
    }
}

/// A highlighted window into a longer text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt<'a> {
    /// Char offset of the window in the original text.
    pub start: usize,
    /// Exclusive char end of the window.
    pub end: usize,
    /// Text was cut before the window.
    pub leading: bool,
    /// Text was cut after the window.
    pub trailing: bool,
    /// Segments of the window only, with regions shifted to match.
    pub segments: Vec<Segment<'a>>,
}

impl Excerpt<'_> {
    /// Window text with ellipsis markers, no highlighting.
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        if self.leading {
            out.push_str(ELLIPSIS);
        }
        for segment in &self.segments {
            out.push_str(segment.text());
        }
        if self.trailing {
            out.push_str(ELLIPSIS);
        }
        out
    }
}

/// Cut an excerpt of `text` centered on its best match.
///
/// `best` is the span the matcher reported for this field. The anchor is the
/// qualifying region overlapping it, or `best` itself when no region does.
/// Without `best` the first qualifying region anchors. With no anchor at all
/// the excerpt is the head of the text, `2 * margin` chars long before word
/// expansion.
pub fn excerpt<'a>(
    text: &'a str,
    regions: &[MatchRegion],
    best: Option<MatchRegion>,
    options: ExcerptOptions,
) -> Excerpt<'a> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let clamp = |r: &MatchRegion| MatchRegion::new(r.start.min(len), r.end.min(len));

    let clamped: Vec<MatchRegion> = regions
        .iter()
        .map(clamp)
        .filter(|r| !r.is_empty())
        .collect();
    let mut qualifying = clamped.iter().filter(|r| r.len() >= options.min_match_len);

    let anchor = match best.map(|b| clamp(&b)).filter(|b| !b.is_empty()) {
        Some(best) => Some(
            qualifying
                .find(|r| r.start < best.end && r.end > best.start)
                .copied()
                .unwrap_or(best),
        ),
        None => qualifying.min_by_key(|r| r.start).copied(),
    };

    let (mut start, mut end) = match anchor {
        Some(region) => (
            region.start.saturating_sub(options.margin),
            (region.end + options.margin).min(len),
        ),
        None => (0, options.margin.saturating_mul(2).min(len)),
    };
    let word_floor = start.saturating_sub(MAX_WORD_GROWTH);
    let word_ceiling = end.saturating_add(MAX_WORD_GROWTH).min(len);

    // Grow until stable: word expansion can expose a region edge and vice versa
    loop {
        let before = (start, end);

        while start > word_floor && !chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while end < word_ceiling && !chars[end].is_whitespace() {
            end += 1;
        }
        for region in &clamped {
            if region.start < start && region.end > start {
                start = region.start;
            }
            if region.start < end && region.end > end {
                end = region.end;
            }
        }

        if (start, end) == before {
            break;
        }
    }

    let offsets = char_offsets(text);
    let window = &text[offsets[start]..offsets[end]];
    let shifted: Vec<MatchRegion> = clamped
        .iter()
        .filter(|r| r.end > start && r.start < end)
        .map(|r| MatchRegion::new(r.start.max(start) - start, r.end.min(end) - start))
        .collect();

    Excerpt {
        start,
        end,
        leading: start > 0,
        trailing: end < len,
        segments: highlight(window, &shifted, options.min_match_len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(margin: usize) -> ExcerptOptions {
        ExcerptOptions {
            margin,
            min_match_len: 3,
        }
    }

    #[test]
    fn test_short_text_is_whole() {
        let text = "A closure captures variables.";
        let ex = excerpt(text, &[MatchRegion::new(2, 9)], None, opts(50));
        assert!(!ex.leading && !ex.trailing);
        assert_eq!(ex.to_plain(), text);
        assert!(ex.segments.contains(&Segment::Highlighted("closure")));
    }

    #[test]
    fn test_window_expands_to_words() {
        let text = "alpha bravo charlie delta echo foxtrot golf";
        // "delta" is chars 20..25
        let ex = excerpt(text, &[MatchRegion::new(20, 25)], None, opts(3));
        assert_eq!(ex.to_plain(), "...charlie delta echo...");
        assert!(ex.leading);
        assert!(ex.trailing);
    }

    #[test]
    fn test_window_never_cuts_region() {
        let text = "aaaa bbbb cccc dddd eeee";
        // Anchor "cccc", and a second region spanning "dddd eeee"
        let regions = [MatchRegion::new(10, 14), MatchRegion::new(15, 24)];
        let ex = excerpt(text, &regions, None, opts(2));
        assert_eq!(ex.end, 24);
        assert!(ex.segments.contains(&Segment::Highlighted("dddd eeee")));
    }

    #[test]
    fn test_no_region_takes_head() {
        let text = "one two three four five six";
        let ex = excerpt(text, &[], None, opts(3));
        assert_eq!(ex.start, 0);
        assert_eq!(ex.to_plain(), "one two...");
    }

    #[test]
    fn test_short_regions_do_not_anchor() {
        let text = "xy filler text here then the real match word";
        // A 2-char region at the start, a real one later
        let regions = [MatchRegion::new(0, 2), MatchRegion::new(34, 39)];
        let ex = excerpt(text, &regions, None, opts(4));
        assert!(ex.leading);
        assert!(ex.segments.contains(&Segment::Highlighted("match")));
    }

    #[test]
    fn test_best_hit_anchors_past_incidental_runs() {
        let text = format!(
            "Those users wrote {}and then the closure pattern appeared.",
            "lorem ipsum dolor sit amet ".repeat(6)
        );
        let at = text.find("closure").unwrap();
        // Incidental runs of pattern chars ahead of the real hit
        let regions = [
            MatchRegion::new(2, 5),
            MatchRegion::new(6, 11),
            MatchRegion::new(18, 22),
            MatchRegion::new(at, at + 7),
        ];
        let ex = excerpt(&text, &regions, Some(MatchRegion::new(at, at + 7)), opts(20));
        assert!(ex.leading);
        assert!(ex.segments.contains(&Segment::Highlighted("closure")));
        assert!(!ex.to_plain().contains("Those"));

        // Without the hint the first run wins and the hit is out of the window
        let ex = excerpt(&text, &regions, None, opts(20));
        assert!(!ex.to_plain().contains("closure"));
    }

    #[test]
    fn test_best_without_qualifying_region_anchors_itself() {
        let text = format!("{}needle tail", "word ".repeat(40));
        let at = text.find("needle").unwrap();
        let ex = excerpt(&text, &[MatchRegion::new(0, 2)], Some(MatchRegion::new(at, at + 6)), opts(5));
        assert!(ex.to_plain().contains("needle"));
        assert!(ex.leading);
    }

    #[test]
    fn test_whitespace_free_text_is_trimmed() {
        let text = format!("{}関数型{}", "東京".repeat(2000), "京都".repeat(2000));
        let region = MatchRegion::new(4000, 4003);
        let ex = excerpt(&text, &[region], Some(region), opts(50));
        let window = ex.end - ex.start;
        assert_eq!(window, 2 * (50 + MAX_WORD_GROWTH) + 3);
        assert!(ex.leading && ex.trailing);
        assert!(ex.segments.contains(&Segment::Highlighted("関数型")));
    }

    #[test]
    fn test_region_growth_ignores_word_cap() {
        let text = format!("needle {}", "x".repeat(300));
        // The second region runs far past where word growth stops
        let regions = [MatchRegion::new(0, 6), MatchRegion::new(7, 307)];
        let ex = excerpt(&text, &regions, Some(MatchRegion::new(0, 6)), opts(5));
        assert_eq!((ex.start, ex.end), (0, 307));
        assert!(!ex.trailing);
    }
}
