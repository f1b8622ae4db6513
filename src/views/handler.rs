// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `GET /api/views?slug=` and `POST /api/views {slug}`.

use serde::{Deserialize, Serialize};

use super::ViewStore;
use crate::api::{ApiError, ErrorCode, Reply};

/// `{ "count": n }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewCount {
    pub count: u64,
}

/// POST body. `slug` may be absent; the handler rejects that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncrementViews {
    #[serde(default)]
    pub slug: Option<String>,
}

/// View counter endpoints over some [`ViewStore`].
#[derive(Debug)]
pub struct ViewsApi<S> {
    store: S,
}

impl<S: ViewStore> ViewsApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read-only count; 0 for unseen slugs.
    pub fn get(&self, slug: Option<&str>) -> Result<Reply<ViewCount>, ApiError> {
        let slug = require_slug(slug)?;
        match self.store.get(slug) {
            Ok(count) => Ok(Reply::ok(ViewCount { count })),
            Err(e) => {
                tracing::error!(slug, error = %e, "failed to fetch views");
                Err(ApiError::new(ErrorCode::Internal, "Failed to fetch views"))
            }
        }
    }

    /// Count one view and return the new total.
    pub fn increment(&self, body: &IncrementViews) -> Result<Reply<ViewCount>, ApiError> {
        let slug = require_slug(body.slug.as_deref())?;
        match self.store.increment(slug) {
            Ok(count) => Ok(Reply::ok(ViewCount { count })),
            Err(e) => {
                tracing::error!(slug, error = %e, "failed to increment views");
                Err(ApiError::new(ErrorCode::Internal, "Failed to increment views"))
            }
        }
    }
}

fn require_slug(slug: Option<&str>) -> Result<&str, ApiError> {
    match slug.map(str::trim) {
        Some(slug) if !slug.is_empty() => Ok(slug),
        _ => Err(ApiError::new(ErrorCode::SlugRequired, "Slug is required")),
    }
}
