// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The view counter a post page shows.
//!
//! Failures never surface to the reader: they are logged and the counter
//! keeps whatever it showed before (0 on first load).

use super::{IncrementViews, ViewStore, ViewsApi};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewCounter {
    pub slug: String,
    pub count: u64,
    /// Read without counting (listing pages, previews).
    pub no_count: bool,
    pub show_count: bool,
}

impl ViewCounter {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            count: 0,
            no_count: false,
            show_count: true,
        }
    }

    /// A counter that only reads.
    pub fn read_only(slug: impl Into<String>) -> Self {
        Self {
            no_count: true,
            ..Self::new(slug)
        }
    }

    /// Count this visit (unless `no_count`), then refresh.
    pub fn record<S: ViewStore>(&mut self, api: &ViewsApi<S>) -> u64 {
        if !self.no_count {
            let body = IncrementViews {
                slug: Some(self.slug.clone()),
            };
            if let Err(e) = api.increment(&body) {
                tracing::warn!(slug = %self.slug, error = %e, "could not increment views");
            }
        }
        self.load(api)
    }

    /// Refresh from the service, keeping the old value on failure.
    pub fn load<S: ViewStore>(&mut self, api: &ViewsApi<S>) -> u64 {
        match api.get(Some(&self.slug)) {
            Ok(reply) => self.count = reply.body.count,
            Err(e) => tracing::warn!(slug = %self.slug, error = %e, "could not fetch views"),
        }
        self.count
    }

    /// `"12 views"`, or nothing when hidden.
    pub fn label(&self) -> Option<String> {
        self.show_count.then(|| format!("{} views", self.count))
    }
}
