//! Posts on disk through to search results.

use std::fs;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use folio::content::{ContentStore, Post};
use folio::{build_index, search, IndexCache, SearchOptions};

const POSTS: &str = r#"[
  {
    "slug": "react-hooks",
    "title": "React Hooks in Practice",
    "body": "import Demo from '../components/Demo'\n\n## Why hooks\n\n`useState` and **useEffect** cover most needs.\n\n<Demo />",
    "tags": ["React", "Web Development"],
    "publishedAt": "2024-03-01"
  },
  {
    "slug": "closures",
    "title": "Understanding Closures",
    "body": "A closure captures variables from its surrounding scope.",
    "tags": ["JavaScript"],
    "publishedAt": "2024-01-10T09:00:00Z"
  },
  {
    "slug": "draft",
    "title": "React Server Components",
    "body": "Not ready.",
    "publishedAt": "2024-02-01",
    "isPublished": false
  }
]"#;

fn store() -> ContentStore {
    let posts: Vec<Post> = serde_json::from_str(POSTS).unwrap();
    ContentStore::as_of(posts, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()).unwrap()
}

#[test]
fn test_drafts_are_not_searchable() {
    let index = build_index(store().documents(), SearchOptions::default());
    let results = search(&index, "react");
    let ids: Vec<&str> = results.iter().map(|r| r.item.id.as_str()).collect();
    assert_eq!(ids, vec!["react-hooks"]);
}

#[test]
fn test_markup_is_not_searched() {
    let index = build_index(store().documents(), SearchOptions::default());
    // Component names and import paths were stripped from the body
    assert!(search(&index, "components/Demo").is_empty());
    let results = search(&index, "useEffect");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.url, "/blogs/react-hooks");
}

#[test]
fn test_documents_feed_the_cache_once() {
    let store = store();
    let cache = IndexCache::new(SearchOptions::default());
    let first = cache.get(&store.documents());
    let second = cache.get(&store.documents());
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("posts.json");
    fs::write(&path, POSTS).unwrap();

    let store = ContentStore::load(&path).unwrap();
    assert_eq!(store.all_posts().len(), 3);
    let newest: Vec<&str> = store.published().iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(newest, vec!["react-hooks", "closures"]);
    assert_eq!(store.categories(), vec!["all", "react", "web-development", "javascript"]);
}
