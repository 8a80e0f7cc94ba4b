//! voting-server binary entry point.
//!
//! Usage:
//! ```bash
//! voting-server --config voting.toml serve
//! voting-server replay actions.jsonl
//! voting-server --help
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use voting_server::{bootstrap, Config};

/// Pairwise voting server.
#[derive(Parser, Debug)]
#[command(name = "voting-server")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load the entry list and serve the HTTP API
    Serve,

    /// Fold an action log (one JSON action per line) from the empty state
    /// and print the final state
    Replay {
        /// Action log file
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(&config.log.level);

    match cli.command {
        Commands::Serve => {
            voting_server::serve(config)
                .await
                .context("Server failed")?;
        }
        Commands::Replay { file } => {
            let actions = bootstrap::load_actions(&file)
                .await
                .context("Failed to load action log")?;
            tracing::debug!("Replaying {} actions from {}", actions.len(), file.display());

            let state = voting_core::replay(&actions);
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
    }

    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
