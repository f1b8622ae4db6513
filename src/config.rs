// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration: search knobs, highlighting, debounce, and site paths.
//!
//! Every struct deserializes from camelCase JSON with every field defaulted,
//! so a `folio.json` only needs the values it changes:
//!
//! ```json
//! {
//!   "search": { "threshold": 0.2, "ignoreLocation": false },
//!   "highlight": { "minMatchLength": 2 },
//!   "content": "content/posts.json"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::highlight::ExcerptOptions;
use crate::types::Field;
use crate::util::normalize::Folding;

// =============================================================================
// SEARCH
// =============================================================================

/// Default fuzziness: conservative, roughly one typo per ten pattern chars
/// at the expected location.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Default distance over which a match may drift from `location` before its
/// score reaches 1.0.
pub const DEFAULT_DISTANCE: usize = 100;

/// A searched field and its relative weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchKey {
    pub field: Field,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl SearchKey {
    pub fn new(field: Field) -> Self {
        Self { field, weight: 1.0 }
    }
}

fn default_weight() -> f64 {
    1.0
}

fn default_keys() -> Vec<SearchKey> {
    vec![SearchKey::new(Field::Title), SearchKey::new(Field::Content)]
}

/// Knobs for index construction and query evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    /// Fields to search, in the order their matches are reported.
    pub keys: Vec<SearchKey>,
    /// 0.0 requires a perfect match, 1.0 matches anything.
    pub threshold: f64,
    pub case_sensitive: bool,
    pub ignore_diacritics: bool,
    /// Must stay on: highlighting depends on match regions.
    pub include_matches: bool,
    /// Where in a field a match is expected to start (char offset).
    pub location: usize,
    /// How far from `location` a match may land before it scores 1.0.
    pub distance: usize,
    /// Score on errors alone, regardless of where the match lands.
    ///
    /// On by default, unlike Fuse.js where `ignoreLocation` defaults to false.
    /// With location scoring a 0.1 threshold only accepts matches within the
    /// first ten chars of a field, which hides most hits in titles and nearly
    /// all of them in post bodies. Set it to false for Fuse's proximity
    /// scoring.
    pub ignore_location: bool,
    /// Keep scanning the whole field even after a perfect match.
    pub find_all_matches: bool,
    /// Shortest run of matching chars reported as a region.
    pub min_match_char_length: usize,
    /// Exponent weight for the field-length norm.
    pub field_norm_weight: f64,
    pub ignore_field_norm: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            keys: default_keys(),
            threshold: DEFAULT_THRESHOLD,
            case_sensitive: false,
            ignore_diacritics: false,
            include_matches: true,
            location: 0,
            distance: DEFAULT_DISTANCE,
            ignore_location: true,
            find_all_matches: false,
            min_match_char_length: 1,
            field_norm_weight: 1.0,
            ignore_field_norm: false,
        }
    }
}

impl SearchOptions {
    /// Reject values the matcher cannot honor.
    ///
    /// An empty key list is allowed: it produces an index that matches nothing.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::Config(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        if !self.include_matches {
            return Err(Error::Config(
                "includeMatches must be true: highlighting needs match regions".to_string(),
            ));
        }
        if let Some(key) = self.keys.iter().find(|k| k.weight.is_nan() || k.weight <= 0.0) {
            return Err(Error::Config(format!(
                "weight for key '{}' must be positive, got {}",
                key.field, key.weight
            )));
        }
        if self.field_norm_weight < 0.0 {
            return Err(Error::Config(format!(
                "fieldNormWeight must not be negative, got {}",
                self.field_norm_weight
            )));
        }
        Ok(())
    }

    pub fn folding(&self) -> Folding {
        Folding {
            case_sensitive: self.case_sensitive,
            ignore_diacritics: self.ignore_diacritics,
        }
    }
}

// =============================================================================
// HIGHLIGHTING
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HighlightOptions {
    /// Regions shorter than this stay plain.
    pub min_match_length: usize,
    /// Chars kept on each side of the anchoring match in an excerpt.
    pub excerpt_margin: usize,
    /// CSS class for highlighted spans in HTML output.
    pub class_name: String,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            min_match_length: 3,
            excerpt_margin: 50,
            class_name: "bg-accent dark:bg-accentDark dark:text-dark".to_string(),
        }
    }
}

impl HighlightOptions {
    pub fn excerpt_options(&self) -> ExcerptOptions {
        ExcerptOptions {
            margin: self.excerpt_margin,
            min_match_len: self.min_match_length,
        }
    }
}

// =============================================================================
// DEBOUNCE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DebounceOptions {
    pub quiescence_ms: u64,
}

impl Default for DebounceOptions {
    fn default() -> Self {
        Self { quiescence_ms: 300 }
    }
}

impl DebounceOptions {
    pub fn window(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.quiescence_ms)
    }
}

// =============================================================================
// SITE
// =============================================================================

/// Everything the CLI needs: options plus where the data lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub search: SearchOptions,
    pub highlight: HighlightOptions,
    pub debounce: DebounceOptions,
    /// JSON array of posts.
    pub content: PathBuf,
    /// Persisted view counts.
    pub views: PathBuf,
    /// Persisted subscriber list.
    pub subscriptions: PathBuf,
    /// Persisted theme preference.
    pub preferences: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            search: SearchOptions::default(),
            highlight: HighlightOptions::default(),
            debounce: DebounceOptions::default(),
            content: PathBuf::from("content/posts.json"),
            views: PathBuf::from(".folio/views.json"),
            subscriptions: PathBuf::from(".folio/subscriptions.json"),
            preferences: PathBuf::from(".folio/preferences.json"),
        }
    }
}

impl SiteConfig {
    /// Load from a JSON file. A missing file yields the defaults.
    ///
    /// Relative data paths are resolved against the config file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(Error::io(path, e)),
        };
        let mut config: SiteConfig =
            serde_json::from_str(&raw).map_err(|e| Error::json(path, e))?;
        config.search.validate()?;

        if let Some(base) = path.parent() {
            for p in [
                &mut config.content,
                &mut config.views,
                &mut config.subscriptions,
                &mut config.preferences,
            ] {
                if p.is_relative() {
                    *p = base.join(&*p);
                }
            }
        }
        Ok(config)
    }
}
