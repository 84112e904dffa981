//! `sleepwell` binary entry point.

use anyhow::Result;
use clap::Parser;

use sleepwell::cli::{self, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Logs go to stderr; stdout carries command output (and JSON)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    cli::run(args).await
}
