//! plexwatch binary entrypoint
//!
//! Emits exactly one JSON document on standard output per invocation:
//! the session report (or command result) on success, `{"error": ...}`
//! on failure. All progress tracing goes to standard error. The process
//! exits non-zero on failure so shell callers do not have to parse the
//! output to detect it.

mod args;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use plexwatch_core::{ErrorReport, PlexResult};
use tracing::error;

use args::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = err.to_string();
            error!("Error in Plex script: {message}");
            let report = ErrorReport::new(message);
            println!("{}", serde_json::to_string(&report).unwrap_or_default());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> PlexResult<()> {
    match cli.into_command() {
        Commands::Sessions { base_url, token } => commands::sessions::run(base_url, token).await,
        Commands::Libraries { base_url, token } => commands::libraries::run(base_url, token).await,
        Commands::ServerInfo { base_url, token } => {
            commands::server_info::run(base_url, token).await
        }
    }
}
