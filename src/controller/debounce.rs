// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A cancellable delayed send: the timer half of debouncing.
//!
//! Each `call` cancels the previous timer task and starts a new one. When a
//! timer survives its full window, its value goes out on the channel.
//! Cancellation wins ties (`biased` select), but a value already sent stays
//! sent; consumers that care about "latest only" check generations.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Collapses bursts of calls into one delivery per quiet window.
///
/// Must be used from inside a tokio runtime; `call` spawns the timer task.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Option<CancellationToken>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// A debouncer and the receiver its values arrive on.
    pub fn new(window: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                window,
                tx,
                pending: None,
            },
            rx,
        )
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedule `value`, replacing whatever was pending.
    pub fn call(&mut self, value: T) {
        self.cancel();

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let tx = self.tx.clone();
        let window = self.window;

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(window) => {
                    // Receiver gone means the owner shut down
                    let _ = tx.send(value);
                }
            }
        });

        self.pending = Some(token);
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }

    /// A timer was started and not cancelled. It may already have fired.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|t| !t.is_cancelled())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}
