// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lazy, identity-keyed index cache.
//!
//! The corpus is immutable, so "same collection" means "same `Arc`". The cache
//! rebuilds only when handed a different allocation, even if its contents are
//! equal.

use parking_lot::Mutex;
use std::sync::Arc;

use super::{build_index, SearchIndex};
use crate::config::SearchOptions;
use crate::types::Corpus;

/// Holds at most one index, built on first use.
///
/// Owned by whoever needs search (a controller, a CLI command, a test);
/// there is no process-wide instance.
#[derive(Debug)]
pub struct IndexCache {
    options: SearchOptions,
    slot: Mutex<Option<Arc<SearchIndex>>>,
}

impl IndexCache {
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            slot: Mutex::new(None),
        }
    }

    /// The index for `corpus`, building it if the cached one is for a
    /// different collection (or there is none yet).
    pub fn get(&self, corpus: &Corpus) -> Arc<SearchIndex> {
        let mut slot = self.slot.lock();
        if let Some(index) = slot.as_ref() {
            if Arc::ptr_eq(index.corpus(), corpus) {
                return Arc::clone(index);
            }
            tracing::debug!("corpus changed, rebuilding search index");
        }
        let index = Arc::new(build_index(Arc::clone(corpus), self.options.clone()));
        *slot = Some(Arc::clone(&index));
        index
    }

    /// The cached index, if one has been built.
    pub fn peek(&self) -> Option<Arc<SearchIndex>> {
        self.slot.lock().clone()
    }

    /// Drop the cached index; the next `get` rebuilds.
    pub fn invalidate(&self) {
        *self.slot.lock() = None;
    }
}
