// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

use folio::config::SiteConfig;
use folio::content::{ContentStore, ALL_CATEGORY};
use folio::subscription::{
    JsonFileSubscriptionStore, Language, NotificationKind, SubscribeRequest, SubscriptionApi,
    SubscriptionForm,
};
use folio::theme::{Theme, ThemeStore};
use folio::views::{IncrementViews, JsonFileViewStore, ViewCounter, ViewsApi};
use folio::{Error, Result};

use super::display::{bold, count_label, section_bot, section_top, themed, BLUE, BOLD, GRAY, GREEN, RED};

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).map_err(|e| Error::json("<stdout>", e))?;
    println!("{}", out);
    Ok(())
}

pub fn posts(config: &SiteConfig, tag: Option<&str>, categories: bool, json: bool) -> Result<()> {
    let content = ContentStore::load(&config.content)?;

    if categories {
        let categories = content.categories();
        if json {
            return print_json(&categories);
        }
        for category in categories {
            println!("{}", category);
        }
        return Ok(());
    }

    let category = tag.unwrap_or(ALL_CATEGORY);
    let posts = content.posts_with_tag(category);
    if json {
        return print_json(&posts);
    }

    println!(
        "{}",
        section_top(&format!("{} · {}", category, count_label(posts.len(), "post")))
    );
    for post in posts {
        let date = post
            .published_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        println!("  {}  {}", themed(GRAY, &[], &date), bold(&post.title));
        println!("              {}", themed(BLUE, &[], &post.url()));
    }
    println!("{}", section_bot());
    Ok(())
}

pub fn views(config: &SiteConfig, slug: &str, hit: bool, json: bool) -> Result<()> {
    let api = ViewsApi::new(JsonFileViewStore::new(&config.views));
    let reply = if hit {
        api.increment(&IncrementViews {
            slug: Some(slug.to_string()),
        })?
    } else {
        api.get(Some(slug))?
    };

    if json {
        return print_json(&reply.body);
    }
    let counter = ViewCounter {
        count: reply.body.count,
        ..ViewCounter::read_only(slug)
    };
    println!("{}  {}", slug, counter.label().unwrap_or_default());
    Ok(())
}

pub fn subscribe(config: &SiteConfig, email: &str, language: Language, json: bool) -> Result<()> {
    let api = SubscriptionApi::new(JsonFileSubscriptionStore::new(&config.subscriptions));
    let mut form = SubscriptionForm::new(language);

    form.begin();
    let outcome = api.subscribe(&SubscribeRequest::new(email));
    form.finish(&outcome);

    if json {
        match &outcome {
            Ok(reply) => print_json(reply)?,
            Err(e) => print_json(&e.body())?,
        }
    } else if let Some(notification) = form.notification() {
        let color: fn() -> String = match notification.kind {
            NotificationKind::Success => GREEN,
            NotificationKind::Error => RED,
        };
        println!("{}", themed(color, &[BOLD], notification.message));
    }

    outcome.map(|_| ()).map_err(Error::from)
}

pub fn theme(config: &SiteConfig, set: Option<Theme>, toggle: bool, json: bool) -> Result<()> {
    let store = ThemeStore::new(&config.preferences);
    let theme = match set {
        Some(theme) => {
            store.set(theme)?;
            theme
        }
        None if toggle => store.toggle()?,
        None => store.current(),
    };

    if json {
        return print_json(&serde_json::json!({ "theme": theme }));
    }
    println!("{}", theme);
    Ok(())
}
