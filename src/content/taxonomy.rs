// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tag slugs and category listings.
//!
//! Slugs follow the GitHub heading-anchor rules: lowercase, punctuation
//! removed, spaces turned into hyphens. Letters and digits from any script
//! survive, so `"Café & Crème"` becomes `"café--crème"`.

/// Category that lists every published post.
pub const ALL_CATEGORY: &str = "all";

/// Slugify a tag.
pub fn slugify(tag: &str) -> String {
    tag.trim()
        .chars()
        .filter_map(|c| {
            if c == ' ' {
                Some('-')
            } else if c.is_alphanumeric() || c == '-' || c == '_' {
                Some(c)
            } else {
                None
            }
        })
        .flat_map(char::to_lowercase)
        .collect()
}
