// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Toast messages for the subscription form, in English and Spanish.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationId {
    SubscriptionSuccess,
    SubscriptionError,
    SubscriptionAlreadyExists,
}

impl NotificationId {
    pub fn kind(self) -> NotificationKind {
        match self {
            NotificationId::SubscriptionSuccess => NotificationKind::Success,
            NotificationId::SubscriptionError | NotificationId::SubscriptionAlreadyExists => {
                NotificationKind::Error
            }
        }
    }

    pub fn message(self, language: Language) -> &'static str {
        match (self, language) {
            (NotificationId::SubscriptionSuccess, Language::En) => "Subscription successful.",
            (NotificationId::SubscriptionSuccess, Language::Es) => "Suscripción exitosa.",
            (NotificationId::SubscriptionError, Language::En) => "Subscription error.",
            (NotificationId::SubscriptionError, Language::Es) => "Error de suscripción.",
            (NotificationId::SubscriptionAlreadyExists, Language::En) => {
                "Subscription already exists."
            }
            (NotificationId::SubscriptionAlreadyExists, Language::Es) => "La suscripción ya existe.",
        }
    }
}

/// A toast ready to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: &'static str,
}

impl Notification {
    pub fn new(id: NotificationId, language: Language) -> Self {
        Self {
            id,
            kind: id.kind(),
            message: id.message(language),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let n = Notification::new(NotificationId::SubscriptionAlreadyExists, Language::Es);
        assert_eq!(n.message, "La suscripción ya existe.");
        assert_eq!(n.kind, NotificationKind::Error);
        let n = Notification::new(NotificationId::SubscriptionSuccess, Language::En);
        assert_eq!(n.message, "Subscription successful.");
        assert_eq!(n.kind, NotificationKind::Success);
    }
}
