// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The content store: posts as authored, and the search corpus built from them.
//!
//! Posts load once from a JSON array. The store decides which are published
//! as of a fixed instant (captured at construction), orders them newest
//! first, and builds the search [`Corpus`] from exactly that list. Calling
//! [`ContentStore::documents`] twice returns the same `Arc`, which is what
//! lets [`crate::index::IndexCache`] skip rebuilds.

mod mdx;
mod taxonomy;

pub use mdx::plain_text;
pub use taxonomy::{slugify, ALL_CATEGORY};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{corpus, Corpus, SearchableDocument};

/// A post as authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// MDX source.
    #[serde(default)]
    pub body: String,
    /// Overrides the default `/blogs/<slug>`.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default = "default_published")]
    pub is_published: bool,
}

fn default_published() -> bool {
    true
}

impl Post {
    pub fn url(&self) -> String {
        self.url
            .clone()
            .unwrap_or_else(|| format!("/blogs/{}", self.slug))
    }

    pub fn published_date(&self) -> Option<DateTime<Utc>> {
        parse_date(&self.published_at)
    }

    pub fn updated_date(&self) -> Option<DateTime<Utc>> {
        self.updated_at.as_deref().and_then(parse_date)
    }

    /// Slugs of this post's tags, in tag order.
    pub fn tag_slugs(&self) -> impl Iterator<Item = String> + '_ {
        self.tags.iter().map(|t| slugify(t))
    }

    /// The search engine's view of this post.
    pub fn to_document(&self) -> SearchableDocument {
        SearchableDocument {
            id: self.slug.clone(),
            title: self.title.clone(),
            content: plain_text(&self.body),
            url: self.url(),
            image: self.image.clone(),
        }
    }
}

/// Parse an RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS`, or a bare
/// `YYYY-MM-DD` (midnight UTC). Anything else is `None`.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Published posts and the corpus built from them.
#[derive(Debug, Clone)]
pub struct ContentStore {
    posts: Vec<Post>,
    published: Vec<usize>,
    as_of: DateTime<Utc>,
    documents: Corpus,
}

impl ContentStore {
    /// Build a store, judging "published" as of now.
    pub fn new(posts: Vec<Post>) -> Result<Self> {
        Self::as_of(posts, Utc::now())
    }

    /// Build a store, judging "published" as of `now`.
    pub fn as_of(posts: Vec<Post>, now: DateTime<Utc>) -> Result<Self> {
        validate(&posts)?;

        let mut published: Vec<(usize, DateTime<Utc>)> = posts
            .iter()
            .enumerate()
            .filter(|(_, post)| post.is_published)
            .filter_map(|(i, post)| match post.published_date() {
                Some(date) => Some((i, date)),
                None => {
                    tracing::warn!(slug = %post.slug, date = %post.published_at, "unparseable publish date, skipping");
                    None
                }
            })
            .filter(|(_, date)| *date <= now)
            .collect();
        // Newest first; stable, so same-day posts keep file order
        published.sort_by(|a, b| b.1.cmp(&a.1));
        let published: Vec<usize> = published.into_iter().map(|(i, _)| i).collect();

        let documents = corpus(published.iter().map(|&i| posts[i].to_document()).collect());

        tracing::debug!(
            posts = posts.len(),
            published = published.len(),
            "loaded content"
        );

        Ok(Self {
            posts,
            published,
            as_of: now,
            documents,
        })
    }

    /// Load posts from a JSON array file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let posts: Vec<Post> = serde_json::from_str(&raw).map_err(|e| Error::json(path, e))?;
        Self::new(posts)
    }

    /// Every post, published or not, in file order.
    pub fn all_posts(&self) -> &[Post] {
        &self.posts
    }

    /// Published posts, newest first.
    pub fn published(&self) -> Vec<&Post> {
        self.published.iter().map(|&i| &self.posts[i]).collect()
    }

    pub fn as_of_time(&self) -> DateTime<Utc> {
        self.as_of
    }

    /// The search corpus: one document per published post, same order.
    ///
    /// Always the same `Arc`.
    pub fn documents(&self) -> Corpus {
        self.documents.clone()
    }

    pub fn post(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Category slugs: `"all"` first, then each tag slug in order of first
    /// appearance among published posts.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut categories = vec![ALL_CATEGORY.to_string()];
        for post in self.published() {
            for slug in post.tag_slugs() {
                if seen.insert(slug.clone()) {
                    categories.push(slug);
                }
            }
        }
        categories
    }

    /// Published posts in a category, newest first.
    pub fn posts_with_tag(&self, category: &str) -> Vec<&Post> {
        let wanted = slugify(category);
        self.published()
            .into_iter()
            .filter(|post| wanted == ALL_CATEGORY || post.tag_slugs().any(|s| s == wanted))
            .collect()
    }
}

fn validate(posts: &[Post]) -> Result<()> {
    let mut slugs = HashSet::new();
    for post in posts {
        if post.slug.trim().is_empty() {
            return Err(Error::Content(format!("post '{}' has an empty slug", post.title)));
        }
        if post.title.trim().is_empty() {
            return Err(Error::Content(format!("post '{}' has an empty title", post.slug)));
        }
        if !slugs.insert(post.slug.as_str()) {
            return Err(Error::Content(format!("duplicate slug '{}'", post.slug)));
        }
    }
    Ok(())
}
