//! Repeated and concurrent evaluation agree.

use std::sync::Arc;
use std::thread;

use folio::search;

use super::common::{make_index, sample_index};

fn fingerprint(results: &[folio::SearchResult]) -> Vec<(usize, u64)> {
    results.iter().map(|r| (r.doc_index, r.score.to_bits())).collect()
}

#[test]
fn test_repeated_search_identical() {
    let index = sample_index();
    for term in ["react", "closure", "tailwind", "blog", "hooks in practice"] {
        let first = fingerprint(&search(&index, term));
        for _ in 0..5 {
            assert_eq!(fingerprint(&search(&index, term)), first, "term {:?}", term);
        }
    }
}

#[test]
fn test_concurrent_readers_agree() {
    let index = sample_index();
    let expected = fingerprint(&search(&index, "react"));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || fingerprint(&search(&index, "react")))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_large_corpus_matches_small_corpus_order() {
    // Enough records to cross the parallel threshold
    let titles: Vec<String> = (0..200)
        .map(|i| if i % 7 == 0 { format!("React note {}", i) } else { format!("Other {}", i) })
        .collect();
    let pairs: Vec<(&str, &str)> = titles.iter().map(|t| (t.as_str(), "")).collect();
    let index = make_index(&pairs);

    let results = search(&index, "react");
    assert_eq!(results.len(), 29);
    assert!(results.windows(2).all(|w| {
        w[0].score < w[1].score || (w[0].score == w[1].score && w[0].doc_index < w[1].doc_index)
    }));
}
