//! Binary crate for the `weathernow` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration and city search
//! - Human-friendly output formatting

use clap::Parser;

mod app;
mod cli;
mod render;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default to warn so the interactive prompt stays clean; RUST_LOG opens it up.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
