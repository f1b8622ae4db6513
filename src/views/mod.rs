// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-post view counters.
//!
//! A counter is just `slug → count`. Unseen slugs read as 0 and are created
//! by their first increment. Every increment counts; there is no dedup of
//! repeat visitors.

mod client;
mod handler;

pub use client::ViewCounter;
pub use handler::{IncrementViews, ViewCount, ViewsApi};

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::util::json_file;

/// Backing storage for view counts.
pub trait ViewStore: Send + Sync {
    /// Current count, 0 if unseen.
    fn get(&self, slug: &str) -> Result<u64>;

    /// Add one and return the new count.
    fn increment(&self, slug: &str) -> Result<u64>;
}

/// Counts held in memory for the life of the process.
#[derive(Debug, Default)]
pub struct MemoryViewStore {
    counts: Mutex<BTreeMap<String, u64>>,
}

impl MemoryViewStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewStore for MemoryViewStore {
    fn get(&self, slug: &str) -> Result<u64> {
        Ok(self.counts.lock().get(slug).copied().unwrap_or(0))
    }

    fn increment(&self, slug: &str) -> Result<u64> {
        let mut counts = self.counts.lock();
        let count = counts.entry(slug.to_string()).or_insert(0);
        *count += 1;
        Ok(*count)
    }
}

/// Counts persisted to a JSON object on disk.
///
/// The lock is held across read-modify-write, so concurrent increments
/// within one process never lose updates.
#[derive(Debug)]
pub struct JsonFileViewStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileViewStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, u64>> {
        json_file::load_or_default(&self.path)
    }
}

impl ViewStore for JsonFileViewStore {
    fn get(&self, slug: &str) -> Result<u64> {
        let _guard = self.lock.lock();
        Ok(self.load()?.get(slug).copied().unwrap_or(0))
    }

    fn increment(&self, slug: &str) -> Result<u64> {
        let _guard = self.lock.lock();
        let mut counts = self.load()?;
        let count = counts.entry(slug.to_string()).or_insert(0);
        *count += 1;
        let count = *count;
        json_file::save(&self.path, &counts)?;
        Ok(count)
    }
}
