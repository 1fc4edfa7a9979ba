//! Jobpulse CLI
//!
//! Scrapes a job board, classifies every posting, and publishes the
//! resulting analytics to Airtable.

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jobpulse")]
#[command(about = "Job board analytics: scrape, classify, publish", long_about = None)]
struct Cli {
    /// Function mapping file (TOML) replacing the built-in mapping
    #[arg(long, env = "JOBPULSE_MAPPING", global = true)]
    mapping: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; stdout is kept for the reports
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "jobpulse=info,jobpulse_sync=info,jobpulse_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::load(cli.mapping.as_deref())?;

    handle_command(cli.command, &config).await
}
