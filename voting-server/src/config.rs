//! Configuration loading for voting-server.
//!
//! Configuration is loaded from a TOML file (default: `voting.toml`). Every
//! section and field is optional.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration for voting-server.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Entry list configuration.
    #[serde(default)]
    pub entries: EntriesConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP server (default: 0.0.0.0:8090).
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

/// Entry list configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EntriesConfig {
    /// Path to a JSON array of entry names loaded at startup
    /// (default: entries.json).
    #[serde(default = "default_entries_path")]
    pub path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is not set (default: info).
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_bind_address() -> String {
    "0.0.0.0:8090".to_string()
}

fn default_entries_path() -> PathBuf {
    PathBuf::from("entries.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

impl Default for EntriesConfig {
    fn default() -> Self {
        Self {
            path: default_entries_path(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Configuration file used when present and no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "voting.toml";

impl Config {
    /// Resolve and load the configuration.
    ///
    /// Uses `path` if given, otherwise [`DEFAULT_CONFIG_PATH`] if it exists,
    /// otherwise the built-in defaults.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let path = match path {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Path::new(DEFAULT_CONFIG_PATH),
            None => return Ok(Self::default()),
        };

        Ok(Self::from_file(path)?)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Failed to parse configuration file.
    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: toml::de::Error,
    },
}
