//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    // Load configuration
    let config = Config::load()?;

    // Create context for commands; the API URL comes from the CLI flag,
    // the environment, or the config file, in that order.
    let ctx = commands::Context {
        api_url: cli.api_url.or(config.api_url),
        config_username: config.username,
    };
    debug!(api_url = ?ctx.api_url, "resolved API URL");

    // Dispatch to appropriate command
    match cli.command {
        Commands::Export(args) => commands::export::execute(ctx, args).await,
        Commands::Config(args) => commands::config::execute(ctx, args).await,
    }
}

// Diagnostics go to stderr so stdout stays clean zone text.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
