//! End-to-end: documents in, highlighted results out.

use folio::highlight::{excerpt, highlight, ExcerptOptions};
use folio::types::Field;
use folio::{search, SearchResult};

use super::common::{highlighted, make_index};

fn only(results: Vec<SearchResult>) -> SearchResult {
    assert_eq!(results.len(), 1, "expected exactly one result");
    results.into_iter().next().unwrap()
}

#[test]
fn test_closure_matches_title_and_content() {
    let index = make_index(&[(
        "Understanding Closures",
        "A closure captures variables from its surrounding scope.",
    )]);
    let result = only(search(&index, "closure"));

    // "Closure" sits at chars 14..21 of the title
    let title_regions = result.regions(Field::Title);
    assert!(
        title_regions.iter().any(|r| r.start <= 14 && r.end >= 21),
        "no title region covers 'Closure': {:?}",
        title_regions
    );
    let title = highlight(&result.item.title, title_regions, 3);
    assert!(highlighted(&title).iter().any(|s| s.to_lowercase().contains("closure")));

    let content_regions = result.regions(Field::Content);
    assert!(!content_regions.is_empty());
    let cut = excerpt(
        &result.item.content,
        content_regions,
        result.best(Field::Content),
        ExcerptOptions::default(),
    );
    assert!(cut.to_plain().contains("closure captures"));
    assert!(highlighted(&cut.segments).contains(&"closure"));
}

#[test]
fn test_empty_query_returns_nothing() {
    let index = make_index(&[("A", "B")]);
    assert!(search(&index, "").is_empty());
}

#[test]
fn test_empty_collection_returns_nothing() {
    let index = make_index(&[]);
    assert!(search(&index, "anything").is_empty());
}

#[test]
fn test_nonsense_query_returns_nothing() {
    let index = make_index(&super::common::sample_posts());
    assert!(search(&index, "xyz123nomatch").is_empty());
}

#[test]
fn test_exact_title_beats_content_match() {
    let index = make_index(&[
        ("Styling Tips", "Build a reactive design system."),
        ("React", "Hooks and components."),
    ]);
    let results = search(&index, "react");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].item.title, "React");
    assert!(results[0].score < results[1].score);
    // The winner matched on its title only
    assert!(results[0].field_match(Field::Title).unwrap().is_match());
    assert!(!results[0].field_match(Field::Content).unwrap().is_match());
}

#[test]
fn test_excerpt_lands_on_the_real_hit() {
    let content = format!(
        "Those users wrote {}and then the closure pattern appeared.",
        "lorem ipsum dolor sit amet ".repeat(6)
    );
    let index = make_index(&[("Weekly Notes", content.as_str())]);
    let result = only(search(&index, "closure"));

    // Runs like "ose" and "users" are regions too, but they come first
    let regions = result.regions(Field::Content);
    let at = content.find("closure").unwrap();
    assert!(regions[0].start < at);
    assert_eq!(result.best(Field::Content).map(|b| b.start), Some(at));

    let cut = excerpt(
        &result.item.content,
        regions,
        result.best(Field::Content),
        ExcerptOptions::default(),
    );
    assert!(cut.to_plain().contains("closure pattern"));
    assert!(highlighted(&cut.segments).contains(&"closure"));
}

#[test]
fn test_cjk_body_excerpt_is_trimmed() {
    let content = format!("{}関数型{}", "東京".repeat(2000), "京都".repeat(2000));
    let index = make_index(&[("Tokyo", content.as_str())]);
    let result = only(search(&index, "関数型"));

    let cut = excerpt(
        &result.item.content,
        result.regions(Field::Content),
        result.best(Field::Content),
        ExcerptOptions::default(),
    );
    assert!(cut.to_plain().chars().count() < 500);
    assert!(cut.leading && cut.trailing);
    assert!(highlighted(&cut.segments).contains(&"関数型"));
}
