//! Taskboard server: a Kanban board over a small REST API.
//!
//! Serves the board page at `/` and the task API under `/api/tasks`.
//! Tasks live in memory and are lost on restart.
//!
//! # Usage
//!
//! ```bash
//! # Run on the default address 0.0.0.0:4000 with sample tasks
//! cargo run --bin taskboard-server
//!
//! # Custom port, empty board
//! cargo run --bin taskboard-server -- --port 8080 --no-seed
//!
//! # Or via environment variable
//! PORT=8080 cargo run --bin taskboard-server
//! ```

use std::sync::Arc;

use clap::Parser;
use taskboard_server::api::{self, AppState};
use taskboard_server::config::{ServerCliArgs, ServerConfig};

#[tokio::main]
async fn main() {
    let cli = ServerCliArgs::parse();

    let config = match ServerConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let state = if config.seed {
        AppState::seeded()
    } else {
        AppState::default()
    };
    tracing::info!(
        addr = %config.bind_addr(),
        tasks = state.len(),
        "starting taskboard server"
    );

    match api::start_server_with_state(&config.bind_addr(), Arc::new(state)).await {
        Ok((bound_addr, handle)) => {
            tracing::info!(addr = %bound_addr, "taskboard server listening");
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "taskboard server task failed");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to start taskboard server");
            std::process::exit(1);
        }
    }
}
