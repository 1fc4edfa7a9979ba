//! Run command handler
//!
//! The scheduled job: scrape the board, keep the dataset on disk, publish.

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use jobpulse_core::dataset::write_dataset;

use super::publish::publish_rows;
use super::scrape::scrape;
use crate::config::{AirtableArgs, BoardArgs, Config, DatasetArgs};

/// Run arguments
#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    #[command(flatten)]
    pub output: DatasetArgs,

    #[command(flatten)]
    pub airtable: AirtableArgs,

    /// Publish to an in-memory store instead of Airtable
    #[arg(long)]
    pub dry_run: bool,
}

/// Handle the run command
pub async fn handle_run_command(args: RunArgs, config: &Config) -> Result<()> {
    let rows = scrape(&args.board, config).await?;

    write_dataset(&args.output.dataset, &rows)
        .with_context(|| format!("Failed to write {}", args.output.dataset.display()))?;
    println!(
        "{} {}",
        "Dataset saved to".green(),
        args.output.dataset.display().to_string().bold()
    );

    publish_rows(&args.airtable, args.dry_run, &rows).await
}
