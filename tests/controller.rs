//! The debounced live search on a paused tokio clock.

mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use common::{sample_index, titles};
use folio::{ControllerState, DebounceOptions, LiveSearch, SearchController};

const WINDOW: Duration = Duration::from_millis(300);

fn live() -> LiveSearch {
    LiveSearch::new(sample_index(), DebounceOptions { quiescence_ms: 300 })
}

#[tokio::test(start_paused = true)]
async fn test_burst_evaluates_once_with_last_term() {
    let mut live = live();
    let mut updates = live.subscribe();

    for term in ["r", "ro", "roy"] {
        live.input(term);
        assert_eq!(live.term(), term);
        assert_eq!(live.state(), ControllerState::Typing);
    }
    assert_eq!(live.evaluations(), 0);

    updates.changed().await.unwrap();
    let snapshot = updates.borrow_and_update().clone();
    assert_eq!(snapshot.term, "roy");
    assert_eq!(live.evaluations(), 1);
    assert_eq!(live.state(), ControllerState::Settled);
}

#[tokio::test(start_paused = true)]
async fn test_keystrokes_push_the_deadline_out() {
    let mut live = live();
    let mut updates = live.subscribe();

    live.input("re");
    tokio::time::sleep(WINDOW - Duration::from_millis(100)).await;
    live.input("rea");
    tokio::time::sleep(WINDOW - Duration::from_millis(100)).await;
    live.input("react");
    tokio::time::sleep(WINDOW - Duration::from_millis(100)).await;
    // 600ms since the first keystroke, but never 300ms of quiet
    assert_eq!(live.evaluations(), 0);

    updates.changed().await.unwrap();
    let snapshot = updates.borrow_and_update().clone();
    assert_eq!(snapshot.term, "react");
    assert_eq!(live.evaluations(), 1);
    assert!(titles(&snapshot.results).contains(&"React Hooks in Practice"));
}

#[tokio::test(start_paused = true)]
async fn test_separate_pauses_evaluate_separately() {
    let mut live = live();
    let mut updates = live.subscribe();

    live.input("tail");
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().term, "tail");

    live.input("tailwind");
    updates.changed().await.unwrap();
    let snapshot = updates.borrow_and_update().clone();
    assert_eq!(snapshot.term, "tailwind");
    assert_eq!(titles(&snapshot.results), vec!["Styling with Tailwind"]);
    assert_eq!(live.evaluations(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_clear_is_immediate_and_cancels_pending() {
    let mut live = live();
    let updates = live.subscribe();

    live.input("react");
    live.clear();

    // Published without waiting for any timer
    let snapshot = updates.borrow().clone();
    assert_eq!(snapshot.term, "");
    assert!(snapshot.results.is_empty());
    assert_eq!(live.state(), ControllerState::Idle);

    tokio::time::sleep(WINDOW * 3).await;
    assert_eq!(live.evaluations(), 0);
    assert!(live.snapshot().results.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_blank_input_clears_but_echoes() {
    let mut live = live();
    live.input("hooks");
    live.input("   ");

    assert_eq!(live.term(), "   ");
    assert_eq!(live.state(), ControllerState::Idle);
    tokio::time::sleep(WINDOW * 2).await;
    assert_eq!(live.evaluations(), 0);
}

#[test]
fn test_superseded_evaluation_is_discarded() {
    let mut controller = SearchController::new(sample_index(), DebounceOptions::default());
    let start = Instant::now();

    controller.input("react", start);
    let stale = controller.take_due(start + WINDOW).unwrap();

    // A newer keystroke lands while "react" is still being evaluated
    controller.input("tailwind", start + WINDOW + Duration::from_millis(10));
    let stale_results = folio::search(controller.index(), &stale.term);
    assert!(!controller.deliver(stale.generation, stale_results));
    assert!(controller.results().is_empty());
    assert_eq!(controller.state(), ControllerState::Typing);

    let fresh = controller.take_pending().unwrap();
    let results = folio::search(controller.index(), &fresh.term);
    assert!(controller.deliver(fresh.generation, results));
    assert_eq!(titles(controller.results()), vec!["Styling with Tailwind"]);
    assert_eq!(controller.state(), ControllerState::Settled);
}

#[test]
fn test_index_is_shared_not_copied() {
    let index = sample_index();
    let controller = SearchController::new(Arc::clone(&index), DebounceOptions::default());
    assert!(Arc::ptr_eq(controller.index(), &index));
}
