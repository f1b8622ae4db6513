// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The interactive controller: keystrokes in, settled results out.
//!
//! [`SearchController`] is a plain state machine with no clock and no runtime.
//! Callers hand it the current time; it tells them when an evaluation is due.
//! Tests drive it with fake time; the tokio driver in [`live`] drives it with
//! real time.
//!
//! ```text
//!            input(non-blank)                deadline passes
//!   Idle ───────────────────────▶ Typing ─────────────────────▶ Settled
//!    ▲                             │  ▲                            │
//!    │   clear() / blank input     │  └──── input(non-blank) ──────┘
//!    └─────────────────────────────┴───────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! - **Last write wins**: at most one evaluation is pending. A new keystroke
//!   replaces it and pushes the deadline out by a full window.
//! - **Generations**: every scheduled evaluation gets a fresh [`Generation`];
//!   `clear()` issues one too. Results for anything but the latest generation
//!   are dropped by [`SearchController::deliver`].
//! - **Clear is immediate**: no debounce, results are empty on return.

#[cfg(not(target_arch = "wasm32"))]
pub mod debounce;
#[cfg(not(target_arch = "wasm32"))]
pub mod live;

#[cfg(not(target_arch = "wasm32"))]
pub use debounce::Debouncer;
#[cfg(not(target_arch = "wasm32"))]
pub use live::{LiveSearch, SearchSnapshot};

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::DebounceOptions;
use crate::index::SearchIndex;
use crate::search::search;
use crate::types::SearchResult;

/// Monotonic id of a scheduled evaluation (or a clear).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn next(self) -> Self {
        Generation(self.0 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No term.
    Idle,
    /// Term entered, results stale or pending.
    Typing,
    /// Results match the current term.
    Settled,
}

/// An evaluation the caller should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: Generation,
    pub term: String,
}

#[derive(Debug, Clone)]
struct Pending {
    deadline: Instant,
    request: SearchRequest,
}

/// Debounced search state for one search UI session.
#[derive(Debug)]
pub struct SearchController {
    index: Arc<SearchIndex>,
    window: Duration,
    term: String,
    state: ControllerState,
    generation: Generation,
    pending: Option<Pending>,
    results: Vec<SearchResult>,
}

impl SearchController {
    pub fn new(index: Arc<SearchIndex>, debounce: DebounceOptions) -> Self {
        Self {
            index,
            window: debounce.window(),
            term: String::new(),
            state: ControllerState::Idle,
            generation: Generation::default(),
            pending: None,
            results: Vec::new(),
        }
    }

    pub fn index(&self) -> &Arc<SearchIndex> {
        &self.index
    }

    /// The raw term, updated on every keystroke.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Latest issued generation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Results of the last applied evaluation.
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// When the pending evaluation becomes due, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn pending_generation(&self) -> Option<Generation> {
        self.pending.as_ref().map(|p| p.request.generation)
    }

    /// Record a keystroke.
    ///
    /// A blank term behaves like [`clear`](Self::clear) except that the raw
    /// term is kept for echo. Returns the generation now current.
    pub fn input(&mut self, term: impl Into<String>, now: Instant) -> Generation {
        let term = term.into();
        if term.trim().is_empty() {
            self.reset();
            self.term = term;
            return self.generation;
        }

        self.generation = self.generation.next();
        self.pending = Some(Pending {
            deadline: now + self.window,
            request: SearchRequest {
                generation: self.generation,
                term: term.clone(),
            },
        });
        self.term = term;
        self.state = ControllerState::Typing;
        self.generation
    }

    /// Reset to `Idle` with no term and no results, immediately.
    pub fn clear(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.generation = self.generation.next();
        self.pending = None;
        self.term.clear();
        self.results.clear();
        self.state = ControllerState::Idle;
    }

    /// Hand out the pending request if its quiet window has elapsed.
    pub fn take_due(&mut self, now: Instant) -> Option<SearchRequest> {
        match &self.pending {
            Some(p) if p.deadline <= now => self.take_pending(),
            _ => None,
        }
    }

    /// Hand out the pending request regardless of its deadline.
    ///
    /// For drivers that keep their own timer.
    pub fn take_pending(&mut self) -> Option<SearchRequest> {
        self.pending.take().map(|p| p.request)
    }

    /// Apply results for `generation`. Returns `false` (and drops them) when
    /// a newer input or a clear has happened since.
    pub fn deliver(&mut self, generation: Generation, results: Vec<SearchResult>) -> bool {
        if generation != self.generation || self.pending.is_some() {
            tracing::trace!(
                stale = generation.get(),
                current = self.generation.get(),
                "discarding superseded results"
            );
            return false;
        }
        self.results = results;
        self.state = ControllerState::Settled;
        true
    }

    /// Run the pending evaluation inline if it is due.
    ///
    /// Returns `true` when an evaluation ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(request) = self.take_due(now) else {
            return false;
        };
        let results = search(&self.index, &request.term);
        self.deliver(request.generation, results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{make_index, sample_posts};

    fn controller() -> SearchController {
        SearchController::new(Arc::new(make_index(&sample_posts())), DebounceOptions::default())
    }

    const WINDOW: Duration = Duration::from_millis(300);

    #[test]
    fn test_starts_idle() {
        let c = controller();
        assert_eq!(c.state(), ControllerState::Idle);
        assert!(c.results().is_empty());
        assert!(c.deadline().is_none());
    }

    #[test]
    fn test_term_echoes_immediately() {
        let mut c = controller();
        let t0 = Instant::now();
        c.input("clo", t0);
        assert_eq!(c.term(), "clo");
        assert_eq!(c.state(), ControllerState::Typing);
        assert!(!c.poll(t0));
    }

    #[test]
    fn test_burst_collapses_to_last() {
        let mut c = controller();
        let t0 = Instant::now();
        c.input("r", t0);
        c.input("re", t0 + Duration::from_millis(100));
        c.input("rea", t0 + Duration::from_millis(200));

        // 300ms after the first keystroke, but only 100ms after the last
        assert!(c.take_due(t0 + WINDOW).is_none());

        let request = c.take_due(t0 + Duration::from_millis(500)).unwrap();
        assert_eq!(request.term, "rea");
        assert!(c.take_due(t0 + Duration::from_secs(10)).is_none());
    }

    #[test]
    fn test_poll_settles() {
        let mut c = controller();
        let t0 = Instant::now();
        c.input("react", t0);
        assert!(c.poll(t0 + WINDOW));
        assert_eq!(c.state(), ControllerState::Settled);
        assert!(!c.results().is_empty());
    }

    #[test]
    fn test_typing_after_settled() {
        let mut c = controller();
        let t0 = Instant::now();
        c.input("react", t0);
        c.poll(t0 + WINDOW);
        c.input("reacts", t0 + WINDOW);
        assert_eq!(c.state(), ControllerState::Typing);
        // Old results stay visible until the new ones land
        assert!(!c.results().is_empty());
    }

    #[test]
    fn test_clear_is_immediate() {
        let mut c = controller();
        let t0 = Instant::now();
        c.input("react", t0);
        c.poll(t0 + WINDOW);
        c.input("reac", t0 + WINDOW);
        c.clear();
        assert_eq!(c.state(), ControllerState::Idle);
        assert_eq!(c.term(), "");
        assert!(c.results().is_empty());
        assert!(c.deadline().is_none());
    }

    #[test]
    fn test_blank_input_acts_as_clear() {
        let mut c = controller();
        let t0 = Instant::now();
        c.input("react", t0);
        c.poll(t0 + WINDOW);
        c.input("  ", t0 + WINDOW);
        assert_eq!(c.state(), ControllerState::Idle);
        assert_eq!(c.term(), "  ");
        assert!(c.results().is_empty());
    }

    #[test]
    fn test_stale_delivery_discarded() {
        let mut c = controller();
        let t0 = Instant::now();
        c.input("react", t0);
        let old = c.take_due(t0 + WINDOW).unwrap();
        c.input("closure", t0 + WINDOW);
        let fresh = c.take_due(t0 + WINDOW * 2).unwrap();

        let fresh_results = search(c.index(), &fresh.term);
        assert!(c.deliver(fresh.generation, fresh_results));
        // The slower, older evaluation finishes last
        assert!(!c.deliver(old.generation, vec![]));
        assert_eq!(c.results()[0].item.title, "Understanding Closures");
    }

    #[test]
    fn test_delivery_after_clear_discarded() {
        let mut c = controller();
        let t0 = Instant::now();
        c.input("react", t0);
        let request = c.take_due(t0 + WINDOW).unwrap();
        c.clear();
        let results = search(c.index(), &request.term);
        assert!(!c.deliver(request.generation, results));
        assert!(c.results().is_empty());
        assert_eq!(c.state(), ControllerState::Idle);
    }

    #[test]
    fn test_generations_increase() {
        let mut c = controller();
        let t0 = Instant::now();
        let a = c.input("a", t0);
        let b = c.input("ab", t0);
        c.clear();
        assert!(a < b);
        assert!(b < c.generation());
    }
}
