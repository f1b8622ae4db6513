//! Site services over their JSON-file stores.

use std::sync::Arc;
use std::thread;

use folio::api::ErrorCode;
use folio::subscription::{
    FormState, JsonFileSubscriptionStore, Language, NotificationId, NotificationKind, SubscribeRequest,
    SubscriptionApi, SubscriptionForm,
};
use folio::theme::{Theme, ThemeStore};
use folio::views::{IncrementViews, JsonFileViewStore, ViewCounter, ViewsApi};

fn hit(slug: &str) -> IncrementViews {
    IncrementViews {
        slug: Some(slug.to_string()),
    }
}

// ============================================================================
// VIEWS
// ============================================================================

#[test]
fn test_views_persist_across_stores() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("views.json");

    let api = ViewsApi::new(JsonFileViewStore::new(&path));
    assert_eq!(api.get(Some("closures")).unwrap().body.count, 0);
    assert_eq!(api.increment(&hit("closures")).unwrap().body.count, 1);
    assert_eq!(api.increment(&hit("closures")).unwrap().body.count, 2);
    assert_eq!(api.increment(&hit("hooks")).unwrap().body.count, 1);

    let reopened = ViewsApi::new(JsonFileViewStore::new(&path));
    let reply = reopened.get(Some("closures")).unwrap();
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body.count, 2);
}

#[test]
fn test_views_missing_slug_is_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let api = ViewsApi::new(JsonFileViewStore::new(dir.path().join("views.json")));

    for slug in [None, Some(""), Some("  ")] {
        let err = api.get(slug).unwrap_err();
        assert_eq!(err.code, ErrorCode::SlugRequired);
        assert_eq!(err.status(), 400);
    }
    let err = api.increment(&IncrementViews { slug: None }).unwrap_err();
    assert_eq!(err.code, ErrorCode::SlugRequired);
}

#[test]
fn test_concurrent_increments_are_not_lost() {
    let dir = tempfile::tempdir().unwrap();
    let api = Arc::new(ViewsApi::new(JsonFileViewStore::new(dir.path().join("views.json"))));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let api = Arc::clone(&api);
            thread::spawn(move || {
                for _ in 0..10 {
                    api.increment(&hit("popular")).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(api.get(Some("popular")).unwrap().body.count, 40);
}

#[test]
fn test_counter_survives_store_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("views.json");
    let api = ViewsApi::new(JsonFileViewStore::new(&path));

    let mut counter = ViewCounter::new("closures");
    assert_eq!(counter.record(&api), 1);

    std::fs::write(&path, "{broken").unwrap();
    assert_eq!(counter.record(&api), 1);
    assert_eq!(counter.label().as_deref(), Some("1 views"));
}

// ============================================================================
// SUBSCRIPTIONS
// ============================================================================

#[test]
fn test_subscription_codes() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileSubscriptionStore::new(dir.path().join("subscribers.json"));
    let api = SubscriptionApi::new(store);

    let reply = api.subscribe(&SubscribeRequest::new("Reader@Blog.dev")).unwrap();
    assert_eq!(reply.status, 201);

    let err = api.subscribe(&SubscribeRequest::new("reader@blog.dev")).unwrap_err();
    assert_eq!(err.code, ErrorCode::AlreadySubscribed);
    assert_eq!(err.status(), 409);

    let err = api.subscribe(&SubscribeRequest::default()).unwrap_err();
    assert_eq!(err.code, ErrorCode::EmailRequired);
    assert_eq!(err.status(), 400);

    let err = api.subscribe(&SubscribeRequest::new("not-an-email")).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidEmail);
    assert_eq!(err.status(), 400);

    assert_eq!(api.store().emails().unwrap(), vec!["reader@blog.dev"]);
}

#[test]
fn test_error_body_carries_code() {
    let dir = tempfile::tempdir().unwrap();
    let api = SubscriptionApi::new(JsonFileSubscriptionStore::new(dir.path().join("s.json")));
    let err = api.subscribe(&SubscribeRequest::new("bad@")).unwrap_err();

    let body = serde_json::to_value(err.body()).unwrap();
    assert_eq!(body["code"], "invalid_email");
}

#[test]
fn test_form_notifications() {
    let dir = tempfile::tempdir().unwrap();
    let api = SubscriptionApi::new(JsonFileSubscriptionStore::new(dir.path().join("s.json")));

    let mut form = SubscriptionForm::new(Language::Es);
    assert!(form.notification().is_none());

    assert_eq!(form.submit(&api, "lector@blog.dev"), FormState::Success);
    let toast = form.notification().unwrap();
    assert_eq!(toast.id, NotificationId::SubscriptionSuccess);
    assert_eq!(toast.kind, NotificationKind::Success);
    assert_eq!(toast.message, "Suscripción exitosa.");

    form.submit(&api, "lector@blog.dev");
    assert_eq!(form.state(), FormState::Error(ErrorCode::AlreadySubscribed));
    assert_eq!(form.notification().unwrap().message, "La suscripción ya existe.");

    let mut form = SubscriptionForm::new(Language::En);
    form.submit(&api, "");
    let toast = form.notification().unwrap();
    assert_eq!(toast.id, NotificationId::SubscriptionError);
    assert_eq!(toast.message, "Subscription error.");
    assert_eq!(form.button_label(), "Failed to subscribe");
}

// ============================================================================
// THEME
// ============================================================================

#[test]
fn test_theme_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs/theme.json");

    let store = ThemeStore::new(&path);
    assert_eq!(store.stored(), None);
    store.set(Theme::Dark).unwrap();

    let reopened = ThemeStore::new(&path);
    assert_eq!(reopened.stored(), Some(Theme::Dark));
    assert_eq!(reopened.current(), Theme::Dark);
    assert_eq!(reopened.toggle().unwrap(), Theme::Light);
    assert_eq!(ThemeStore::new(&path).stored(), Some(Theme::Light));
}

#[test]
fn test_corrupt_theme_file_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.json");
    std::fs::write(&path, "[1, 2").unwrap();

    let store = ThemeStore::new(&path);
    assert_eq!(store.stored(), None);

    // Overwriting repairs it
    store.set(Theme::Light).unwrap();
    assert_eq!(store.stored(), Some(Theme::Light));
}
