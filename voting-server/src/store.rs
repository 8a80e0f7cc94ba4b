//! Single-writer state store.
//!
//! The store holds the current [`AppState`] and is the only place the
//! dispatcher runs in the server. Dispatches are applied one at a time, each
//! against the previous result, so concurrent requests never race on the same
//! snapshot. Every state that differs from its predecessor is published to
//! subscribers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use voting_types::{Action, AppState};

/// Operational counters for the store.
///
/// All counters are monotonically increasing (reset only on restart).
#[derive(Debug, Default)]
pub struct StoreMetrics {
    /// Total actions dispatched.
    pub dispatched_total: AtomicU64,
    /// Actions that left the state unchanged.
    pub noop_total: AtomicU64,
    /// States published to subscribers.
    pub published_total: AtomicU64,
}

/// Holds the current state and serializes dispatches against it.
#[derive(Debug)]
pub struct Store {
    /// Current snapshot; also the broadcast channel for observers.
    sender: watch::Sender<Arc<AppState>>,
    metrics: StoreMetrics,
}

impl Store {
    /// Create a store in the empty state.
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Create a store starting from `state`.
    pub fn with_state(state: AppState) -> Self {
        let (sender, _) = watch::channel(Arc::new(state));
        Self {
            sender,
            metrics: StoreMetrics::default(),
        }
    }

    /// Get the current snapshot.
    pub fn state(&self) -> Arc<AppState> {
        self.sender.borrow().clone()
    }

    /// Subscribe to published states.
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.sender.subscribe()
    }

    /// Get access to the store metrics.
    pub fn metrics(&self) -> &StoreMetrics {
        &self.metrics
    }

    /// Apply `action` to the current state and return the resulting snapshot.
    ///
    /// The channel's write lock is held while the dispatcher runs, so
    /// dispatches from different tasks are applied strictly in sequence.
    /// Subscribers are only woken when the state actually changed.
    pub fn dispatch(&self, action: &Action) -> Arc<AppState> {
        let mut result = None;

        let changed = self.sender.send_if_modified(|current| {
            let next = voting_core::dispatch(current, action);
            if next == **current {
                result = Some(Arc::clone(current));
                return false;
            }

            let next = Arc::new(next);
            *current = Arc::clone(&next);
            result = Some(next);
            true
        });

        self.metrics.dispatched_total.fetch_add(1, Ordering::Relaxed);
        if changed {
            self.metrics.published_total.fetch_add(1, Ordering::Relaxed);
        } else {
            self.metrics.noop_total.fetch_add(1, Ordering::Relaxed);
        }

        let state = result.unwrap_or_else(|| self.state());

        tracing::debug!(
            "Dispatched {}: changed={} phase={:?} round={:?}",
            action.kind(),
            changed,
            state.phase(),
            state.vote.as_ref().map(|round| round.round)
        );
        if changed {
            if let Some(winner) = &state.winner {
                tracing::info!("Contest concluded: winner={}", winner);
            }
        }

        state
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
