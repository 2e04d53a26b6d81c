//! Unbeatable - unified CLI
//!
//! Runs the HTTP game server or a terminal game.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;
use unbeatable_server::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config, host, port } => run_server(config, host, port).await,
        Command::Play => run_play().await,
    }
}

/// Run the HTTP game server
async fn run_server(
    config: std::path::PathBuf,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let config = ServerConfig::load_or_default(Some(config.as_path()))?.with_overrides(host, port);
    init_tracing(config.log_filter());

    info!(address = %config.bind_address(), "Starting Unbeatable HTTP server");
    unbeatable_server::serve(&config).await
}

/// Run a game in the terminal
async fn run_play() -> Result<()> {
    // Keep the board readable: only warnings unless RUST_LOG says otherwise.
    init_tracing("warn");

    tokio::task::spawn_blocking(|| {
        let stdin = std::io::stdin();
        unbeatable_server::play(stdin.lock(), std::io::stdout()).map(|_| ())
    })
    .await?
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
