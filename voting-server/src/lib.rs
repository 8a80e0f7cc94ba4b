//! # voting-server
//!
//! Single-writer store and HTTP transport for the pairwise voting engine.
//!
//! This crate is the application around `voting-core`:
//! - A [`Store`] that applies actions one at a time and publishes each new state
//! - An HTTP router that turns requests into actions
//! - A bootstrapper that loads the entry list and dispatches `SET_ENTRIES`
//!   once at startup
//!
//! ## Architecture
//!
//! ```text
//! HTTP request ──► Action ──► Store::dispatch ──► voting_core::dispatch
//!                                   │
//!                                   └──► watch channel ──► observers
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod http;
pub mod store;

pub use config::Config;
pub use error::{BootstrapError, Result, ServerError};
pub use store::{Store, StoreMetrics};

use std::sync::Arc;

/// Load the entry list, then serve HTTP until the process is stopped.
pub async fn serve(config: Config) -> Result<()> {
    http::health::init_start_time();

    let store = Arc::new(Store::new());
    let _logger = bootstrap::spawn_state_logger(store.subscribe());
    bootstrap::bootstrap(&store, &config.entries.path).await?;

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, http::build_router(store)).await?;
    Ok(())
}
