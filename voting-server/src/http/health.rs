//! Health check endpoint.

use crate::store::Store;
use axum::{Extension, Json};
use serde::Serialize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;
use voting_types::{Phase, Tally};

/// Global start time for uptime calculation.
static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// Initialize the start time (call once at startup).
pub fn init_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health status response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Where the contest is.
    pub phase: Phase,
    /// Current round number, if a round is in progress.
    pub round: Option<u32>,
    /// Ballots cast in the current round, if a round is in progress.
    pub ballots: Option<u64>,
    /// Total actions dispatched.
    pub dispatched: u64,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
}

/// Health check handler.
pub async fn health_handler(Extension(store): Extension<Arc<Store>>) -> Json<HealthStatus> {
    let uptime = START_TIME
        .get()
        .map(|start| start.elapsed().as_secs())
        .unwrap_or(0);
    let state = store.state();

    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        phase: state.phase(),
        round: state.vote.as_ref().map(|round| round.round),
        ballots: state
            .vote
            .as_ref()
            .map(|round| round.tally.as_ref().map_or(0, Tally::total)),
        dispatched: store.metrics().dispatched_total.load(Ordering::Relaxed),
        uptime_seconds: uptime,
    })
}
