//! Scrape command handler
//!
//! Fetches every posting from the job board, classifies it, and writes the
//! dataset used by `report` and `publish`.

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use jobpulse_client::BoardClient;
use jobpulse_core::dataset::write_dataset;
use jobpulse_core::domain::{ClassifiedPosting, decode_postings};
use jobpulse_core::normalize::Source;
use jobpulse_core::report::summarize;

use super::report::{DEFAULT_TOP_TITLES, print_summary};
use crate::config::{BoardArgs, Config, DatasetArgs};

/// Scrape arguments
#[derive(Args)]
pub struct ScrapeArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    #[command(flatten)]
    pub output: DatasetArgs,

    /// Number of most frequent titles to list
    #[arg(long, default_value_t = DEFAULT_TOP_TITLES)]
    pub top: usize,
}

/// Handle the scrape command
pub async fn handle_scrape_command(args: ScrapeArgs, config: &Config) -> Result<()> {
    let rows = scrape(&args.board, config).await?;

    write_dataset(&args.output.dataset, &rows)
        .with_context(|| format!("Failed to write {}", args.output.dataset.display()))?;

    println!();
    print_summary(&summarize(&rows, args.top));
    println!();
    println!(
        "{} {}",
        "Dataset saved to".green(),
        args.output.dataset.display().to_string().bold()
    );

    Ok(())
}

/// Fetch and classify every posting on the board
pub async fn scrape(board: &BoardArgs, config: &Config) -> Result<Vec<ClassifiedPosting>> {
    let client = BoardClient::new(&board.board_url, &board.board_id);

    println!(
        "{}",
        format!("Fetching postings from board {}...", board.board_id).bold()
    );
    let entries = client
        .fetch_all_jobs()
        .await
        .context("Failed to fetch the job board")?;

    let decoded = decode_postings(&entries);
    println!(
        "{}",
        format!("Fetched {} posting(s)", decoded.postings.len()).green()
    );
    if decoded.skipped > 0 {
        println!(
            "{}",
            format!("Skipped {} malformed board entries", decoded.skipped).yellow()
        );
    }

    let inferred = decoded
        .postings
        .iter()
        .filter(|posting| {
            config
                .normalizer
                .resolve(posting.department.as_deref(), &posting.title)
                .source
                == Source::Inferred
        })
        .count();
    println!(
        "{}",
        format!("Inferred function for {} posting(s) from titles", inferred).dimmed()
    );

    Ok(decoded
        .postings
        .iter()
        .map(|posting| ClassifiedPosting::from_posting(posting, &config.normalizer))
        .collect())
}
