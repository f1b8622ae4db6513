// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `POST /api/subscription {email}`.

use serde::{Deserialize, Serialize};

use super::{normalize_email, SubscriptionStore};
use crate::api::{ApiError, ErrorCode, Reply};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub email: Option<String>,
}

impl SubscribeRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeResponse {
    pub message: String,
}

#[derive(Debug)]
pub struct SubscriptionApi<S> {
    store: S,
}

impl<S: SubscriptionStore> SubscriptionApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 201 on success; 400 for a missing or malformed email, 409 for a
    /// duplicate, 500 if the store fails.
    pub fn subscribe(&self, request: &SubscribeRequest) -> Result<Reply<SubscribeResponse>, ApiError> {
        let email = normalize_email(request.email.as_deref())?;

        match self.store.insert(&email) {
            Ok(true) => {
                tracing::info!("new subscription");
                Ok(Reply::created(SubscribeResponse {
                    message: "Subscription created".to_string(),
                }))
            }
            Ok(false) => Err(ApiError::new(
                ErrorCode::AlreadySubscribed,
                "Subscription already exists",
            )),
            Err(e) => {
                tracing::error!(error = %e, "failed to store subscription");
                Err(ApiError::new(ErrorCode::Internal, "Subscription error"))
            }
        }
    }
}
