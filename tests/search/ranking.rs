//! Ranking: field norms, weights, fuzziness.

use folio::config::{SearchKey, SearchOptions};
use folio::types::Field;
use folio::{build_index, search};

use super::common::{make_corpus, make_index, titles};

#[test]
fn test_exact_title_beats_fuzzy_content() {
    let options = SearchOptions {
        threshold: 0.4,
        ..SearchOptions::default()
    };
    let index = build_index(
        make_corpus(&[("Weekend Notes", "I like reakt a lot"), ("React", "Hooks.")]),
        options,
    );
    let results = search(&index, "react");
    assert!(results.len() >= 2);
    assert_eq!(results[0].item.title, "React");
    let fuzzy = results.iter().find(|r| r.item.title == "Weekend Notes").unwrap();
    let content = fuzzy.field_match(Field::Content).unwrap();
    assert!(content.score.unwrap() > 0.0);
}

#[test]
fn test_shorter_field_ranks_higher() {
    let index = make_index(&[
        ("Rust in production at a small company", ""),
        ("Rust basics", ""),
    ]);
    let results = search(&index, "rust");
    assert_eq!(titles(&results), vec!["Rust basics", "Rust in production at a small company"]);
}

#[test]
fn test_ties_keep_corpus_order() {
    let index = make_index(&[("Hooks", ""), ("Hooks", ""), ("Hooks", "")]);
    let order: Vec<usize> = search(&index, "hooks").iter().map(|r| r.doc_index).collect();
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn test_title_weight_outranks_content() {
    let options = SearchOptions {
        keys: vec![
            SearchKey { field: Field::Title, weight: 3.0 },
            SearchKey { field: Field::Content, weight: 1.0 },
        ],
        ..SearchOptions::default()
    };
    let index = build_index(
        make_corpus(&[("Notes", "tailwind"), ("Tailwind", "notes")]),
        options,
    );
    let results = search(&index, "tailwind");
    assert_eq!(titles(&results), vec!["Tailwind", "Notes"]);
}

#[test]
fn test_ignore_field_norm_ties_lengths() {
    let options = SearchOptions {
        ignore_field_norm: true,
        ..SearchOptions::default()
    };
    let index = build_index(
        make_corpus(&[("Rust in production at a small company", ""), ("Rust basics", "")]),
        options,
    );
    let results = search(&index, "rust");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].score, results[1].score);
    assert_eq!(results[0].doc_index, 0);
}

#[test]
fn test_location_scoring_when_enabled() {
    let options = SearchOptions {
        ignore_location: false,
        ..SearchOptions::default()
    };
    // With proximity scoring at threshold 0.1, only matches in the first
    // ten chars qualify
    let index = build_index(
        make_corpus(&[("Hooks everywhere", ""), ("A long preamble then hooks", "")]),
        options,
    );
    let results = search(&index, "hooks");
    assert_eq!(titles(&results), vec!["Hooks everywhere"]);
}
