// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Newsletter subscriptions: validate, dedupe, store.
//!
//! Emails are trimmed and lowercased before they reach a store, so
//! `Jane@Example.com ` and `jane@example.com` are the same subscriber.

mod form;
mod handler;
mod notification;

pub use form::{FormState, SubscriptionForm};
pub use handler::{SubscribeRequest, SubscribeResponse, SubscriptionApi};
pub use notification::{Language, Notification, NotificationId, NotificationKind};

use parking_lot::Mutex;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::api::{ApiError, ErrorCode};
use crate::error::Result;
use crate::util::json_file;

const EMAIL_PATTERN: &str = r"^\w+([-+.']\w+)*@\w+([-.]\w+)*\.\w+([-.]\w+)*$";

static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();

/// Validate and normalize a submitted email.
pub fn normalize_email(email: Option<&str>) -> std::result::Result<String, ApiError> {
    let email = match email.map(str::trim) {
        Some(email) if !email.is_empty() => email,
        _ => return Err(ApiError::new(ErrorCode::EmailRequired, "Email is required")),
    };
    let valid = EMAIL
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email));
    if !valid {
        return Err(ApiError::new(ErrorCode::InvalidEmail, "Invalid email address"));
    }
    Ok(email.to_lowercase())
}

/// Backing storage for subscriber emails (already normalized).
pub trait SubscriptionStore: Send + Sync {
    fn contains(&self, email: &str) -> Result<bool>;

    /// Add `email`. Returns `false` if it was already present.
    fn insert(&self, email: &str) -> Result<bool>;
}

#[derive(Debug, Default)]
pub struct MemorySubscriptionStore {
    emails: Mutex<BTreeSet<String>>,
}

impl MemorySubscriptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.emails.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.lock().is_empty()
    }
}

impl SubscriptionStore for MemorySubscriptionStore {
    fn contains(&self, email: &str) -> Result<bool> {
        Ok(self.emails.lock().contains(email))
    }

    fn insert(&self, email: &str) -> Result<bool> {
        Ok(self.emails.lock().insert(email.to_string()))
    }
}

/// Subscribers persisted as a sorted JSON array.
#[derive(Debug)]
pub struct JsonFileSubscriptionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileSubscriptionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored email, sorted.
    pub fn emails(&self) -> Result<Vec<String>> {
        let _guard = self.lock.lock();
        let emails: BTreeSet<String> = json_file::load_or_default(&self.path)?;
        Ok(emails.into_iter().collect())
    }
}

impl SubscriptionStore for JsonFileSubscriptionStore {
    fn contains(&self, email: &str) -> Result<bool> {
        let _guard = self.lock.lock();
        let emails: BTreeSet<String> = json_file::load_or_default(&self.path)?;
        Ok(emails.contains(email))
    }

    fn insert(&self, email: &str) -> Result<bool> {
        let _guard = self.lock.lock();
        let mut emails: BTreeSet<String> = json_file::load_or_default(&self.path)?;
        if !emails.insert(email.to_string()) {
            return Ok(false);
        }
        json_file::save(&self.path, &emails)?;
        Ok(true)
    }
}
