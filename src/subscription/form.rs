// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side state of the footer subscription form.

use super::notification::{Language, Notification, NotificationId};
use super::{SubscribeRequest, SubscriptionApi, SubscriptionStore};
use crate::api::{ApiError, ErrorCode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Loading,
    Success,
    Error(ErrorCode),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionForm {
    state: FormState,
    language: Language,
}

impl SubscriptionForm {
    pub fn new(language: Language) -> Self {
        Self {
            state: FormState::Idle,
            language,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Mark the request as in flight.
    pub fn begin(&mut self) {
        self.state = FormState::Loading;
    }

    /// Record how the request ended.
    pub fn finish<T>(&mut self, outcome: &Result<T, ApiError>) {
        self.state = match outcome {
            Ok(_) => FormState::Success,
            Err(e) => {
                tracing::warn!(code = %e.code, "subscription failed");
                FormState::Error(e.code)
            }
        };
    }

    /// Submit `email` through `api`, updating state on the way.
    pub fn submit<S: SubscriptionStore>(&mut self, api: &SubscriptionApi<S>, email: &str) -> FormState {
        self.begin();
        let outcome = api.subscribe(&SubscribeRequest::new(email));
        self.finish(&outcome);
        self.state
    }

    pub fn button_label(&self) -> &'static str {
        match self.state {
            FormState::Loading => "Loading...",
            FormState::Success => "Subscribed!",
            FormState::Error(_) => "Failed to subscribe",
            FormState::Idle => "Subscribe",
        }
    }

    /// The toast for the current state, if it warrants one.
    pub fn notification(&self) -> Option<Notification> {
        let id = match self.state {
            FormState::Idle | FormState::Loading => return None,
            FormState::Success => NotificationId::SubscriptionSuccess,
            FormState::Error(ErrorCode::AlreadySubscribed) => NotificationId::SubscriptionAlreadyExists,
            FormState::Error(_) => NotificationId::SubscriptionError,
        };
        Some(Notification::new(id, self.language))
    }
}
