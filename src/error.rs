// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for folio.
//!
//! Searching never fails: bad input degrades to "no results". Errors only come
//! from the edges, meaning configuration, content files, and the service stores.

use std::path::PathBuf;
use thiserror::Error;

use crate::api::ApiError;

/// Result type alias for folio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the pure search path.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON file could not be parsed or written.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Search or site configuration is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A post record is unusable (duplicate id, missing title, ...).
    #[error("invalid content: {0}")]
    Content(String),

    /// A service handler rejected the request.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.into(),
            source,
        }
    }
}
