// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Async driver: the controller state machine on a tokio runtime.
//!
//! Keystrokes go through a [`Debouncer`]; when one survives its window the
//! worker takes the controller's pending request and evaluates it on the
//! blocking pool. Results are published on a `watch` channel, so subscribers
//! only ever see the latest settled snapshot.
//!
//! An evaluation that finishes after a newer keystroke (or a clear) is
//! dropped by [`SearchController::deliver`] and never published.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::{ControllerState, Debouncer, Generation, SearchController, SearchRequest};
use crate::config::DebounceOptions;
use crate::index::SearchIndex;
use crate::search::search;
use crate::types::SearchResult;

/// What subscribers see after every applied evaluation or clear.
#[derive(Debug, Clone, Default)]
pub struct SearchSnapshot {
    pub generation: Generation,
    pub term: String,
    pub results: Vec<SearchResult>,
}

impl SearchSnapshot {
    fn of(controller: &SearchController) -> Self {
        Self {
            generation: controller.generation(),
            term: controller.term().to_string(),
            results: controller.results().to_vec(),
        }
    }
}

struct Shared {
    controller: Mutex<SearchController>,
    tx: watch::Sender<SearchSnapshot>,
    evaluations: AtomicUsize,
}

impl Shared {
    fn publish(&self, controller: &SearchController) {
        self.tx.send_replace(SearchSnapshot::of(controller));
    }

    async fn evaluate(self: Arc<Self>, request: SearchRequest) {
        let index = Arc::clone(self.controller.lock().index());
        let term = request.term.clone();
        self.evaluations.fetch_add(1, Ordering::Relaxed);

        let results = match tokio::task::spawn_blocking(move || search(&index, &term)).await {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(error = %e, term = %request.term, "search evaluation failed");
                return;
            }
        };

        let mut controller = self.controller.lock();
        if controller.deliver(request.generation, results) {
            self.publish(&controller);
        }
    }
}

/// A debounced search session running on tokio.
///
/// Must be created inside a runtime. Dropping it stops the worker.
pub struct LiveSearch {
    shared: Arc<Shared>,
    debouncer: Debouncer<Generation>,
    worker: JoinHandle<()>,
}

impl LiveSearch {
    pub fn new(index: Arc<SearchIndex>, debounce: DebounceOptions) -> Self {
        let (tx, _rx) = watch::channel(SearchSnapshot::default());
        let shared = Arc::new(Shared {
            controller: Mutex::new(SearchController::new(index, debounce)),
            tx,
            evaluations: AtomicUsize::new(0),
        });
        let (debouncer, rx) = Debouncer::new(debounce.window());
        let worker = tokio::spawn(run(Arc::clone(&shared), rx));

        Self {
            shared,
            debouncer,
            worker,
        }
    }

    /// Record a keystroke. Blank input clears immediately.
    pub fn input(&mut self, term: impl Into<String>) {
        let mut controller = self.shared.controller.lock();
        let generation = controller.input(term, Instant::now());

        if controller.pending_generation() == Some(generation) {
            drop(controller);
            self.debouncer.call(generation);
        } else {
            self.debouncer.cancel();
            self.shared.publish(&controller);
        }
    }

    /// Reset to an empty term and empty results, published immediately.
    pub fn clear(&mut self) {
        self.debouncer.cancel();
        let mut controller = self.shared.controller.lock();
        controller.clear();
        self.shared.publish(&controller);
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.shared.tx.subscribe()
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> SearchSnapshot {
        self.shared.tx.borrow().clone()
    }

    pub fn term(&self) -> String {
        self.shared.controller.lock().term().to_string()
    }

    pub fn state(&self) -> ControllerState {
        self.shared.controller.lock().state()
    }

    /// Evaluations started so far.
    pub fn evaluations(&self) -> usize {
        self.shared.evaluations.load(Ordering::Relaxed)
    }
}

impl Drop for LiveSearch {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

impl std::fmt::Debug for LiveSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveSearch")
            .field("term", &self.term())
            .field("state", &self.state())
            .field("evaluations", &self.evaluations())
            .finish()
    }
}

async fn run(shared: Arc<Shared>, mut rx: mpsc::UnboundedReceiver<Generation>) {
    while let Some(generation) = rx.recv().await {
        let request = {
            let mut controller = shared.controller.lock();
            // A newer keystroke or a clear got there first
            if controller.pending_generation() != Some(generation) {
                continue;
            }
            controller.take_pending()
        };
        if let Some(request) = request {
            tokio::spawn(Arc::clone(&shared).evaluate(request));
        }
    }
}
