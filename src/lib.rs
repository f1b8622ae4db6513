// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search, highlighting, and small site services for a personal blog.
//!
//! The search engine takes an immutable collection of posts, builds a fuzzy
//! index over their titles and bodies, and answers typo-tolerant queries with
//! ranked results that carry exact match regions for highlighting.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌────────────┐   ┌──────────────┐
//! │  content    │──▶│    index     │──▶│   search   │──▶│  highlight   │
//! │ (posts,     │   │ (fold fields,│   │ (bitap per │   │ (segments,   │
//! │  documents) │   │  field norms)│   │  field,    │   │  excerpts,   │
//! └─────────────┘   └──────────────┘   │  ranking)  │   │  HTML)       │
//!                                      └────────────┘   └──────────────┘
//!                                            ▲
//!                                  ┌─────────┴─────────┐
//!                                  │    controller     │
//!                                  │ (debounce, last   │
//!                                  │  write wins)      │
//!                                  └───────────────────┘
//! ```
//!
//! `views`, `subscription`, and `theme` are the site's service layers: typed
//! request handlers over small JSON-file stores.
//!
//! # Usage
//!
//! ```
//! use folio::{build_index, search, corpus, SearchOptions, SearchableDocument};
//!
//! let docs = corpus(vec![SearchableDocument {
//!     id: "closures".into(),
//!     title: "Understanding Closures".into(),
//!     content: "A closure captures variables from its scope.".into(),
//!     url: "/blogs/closures".into(),
//!     image: None,
//! }]);
//! let index = build_index(docs, SearchOptions::default());
//!
//! let results = search(&index, "closures");
//! assert_eq!(results[0].item.id, "closures");
//! ```

pub mod api;
pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod fuzzy;
pub mod highlight;
pub mod index;
pub mod scoring;
pub mod search;
pub mod subscription;
pub mod testing;
pub mod theme;
pub mod types;
pub mod util;
pub mod views;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{DebounceOptions, HighlightOptions, SearchKey, SearchOptions, SiteConfig};
pub use content::{ContentStore, Post};
pub use controller::{ControllerState, Generation, SearchController};
#[cfg(not(target_arch = "wasm32"))]
pub use controller::{LiveSearch, SearchSnapshot};
pub use error::{Error, Result};
pub use highlight::{excerpt, highlight, Excerpt, Segment};
pub use index::{build_index, IndexCache, SearchIndex};
pub use search::{search, search_with_limit};
pub use types::{corpus, Corpus, Field, FieldMatch, MatchRegion, SearchResult, SearchableDocument};
