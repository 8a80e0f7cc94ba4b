//! Startup loading and state observation.
//!
//! The entry list is read from a JSON file and dispatched as `SET_ENTRIES`
//! exactly once when the server starts. Action logs (one JSON action per
//! line) can be loaded for offline replay.

use std::path::Path;
use std::sync::Arc;
use tokio::sync::watch;
use voting_types::{Action, AppState, Entry};

use crate::error::{BootstrapError, BootstrapResult};
use crate::store::Store;

/// Read a JSON array of entry names.
pub async fn load_entries(path: &Path) -> BootstrapResult<Vec<Entry>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| BootstrapError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

    serde_json::from_str(&content).map_err(|e| BootstrapError::Entries {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read an action log: one JSON action per line, blank lines skipped.
pub async fn load_actions(path: &Path) -> BootstrapResult<Vec<Action>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| BootstrapError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            Action::from_json(line).map_err(|e| BootstrapError::Action {
                path: path.to_path_buf(),
                line: index + 1,
                source: e,
            })
        })
        .collect()
}

/// Load the entry list and dispatch `SET_ENTRIES` on `store`.
pub async fn bootstrap(store: &Store, path: &Path) -> BootstrapResult<Arc<AppState>> {
    let entries = load_entries(path).await?;
    tracing::info!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(store.dispatch(&Action::SetEntries { entries }))
}

/// Spawn a task that logs every state published by the store.
///
/// Ends when the store is dropped.
pub fn spawn_state_logger(mut rx: watch::Receiver<Arc<AppState>>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            match (&state.winner, &state.vote) {
                (Some(winner), _) => tracing::info!("Published state: winner={}", winner),
                (None, Some(round)) => tracing::info!(
                    "Published state: round={} pair={} vs {} waiting={}",
                    round.round,
                    round.pair[0],
                    round.pair[1],
                    state.entries().len()
                ),
                (None, None) => {
                    tracing::info!("Published state: {} entries waiting", state.entries().len())
                }
            }
        }
        tracing::debug!("State logger stopped");
    })
}
