//! Error types for voting-server.

use std::path::PathBuf;

use voting_types::VoteError;

/// Main error type for voting-server operations.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Startup data could not be loaded.
    #[error("bootstrap error: {0}")]
    Bootstrap(#[from] BootstrapError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors loading entry lists and action logs from disk.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// File could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The file being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Entry list is not a JSON array of strings.
    #[error("invalid entry list in {path}: {source}")]
    Entries {
        /// The entry list file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A line of an action log is not a valid action.
    #[error("invalid action on line {line} of {path}: {source}")]
    Action {
        /// The action log file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Underlying decode error.
        source: VoteError,
    },
}

/// Result type alias for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Result type alias for bootstrap operations.
pub type BootstrapResult<T> = std::result::Result<T, BootstrapError>;
