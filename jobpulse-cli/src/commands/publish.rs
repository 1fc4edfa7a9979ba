//! Publish command handler
//!
//! Syncs a saved dataset to every managed Airtable table. With `--dry-run`
//! the run goes to an in-memory store and nothing leaves the machine.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use jobpulse_client::AirtableClient;
use jobpulse_core::dataset::read_dataset;
use jobpulse_core::domain::ClassifiedPosting;
use jobpulse_sync::{InMemoryStore, PublishReport, Publisher, SyncMode, SyncPipeline};

use crate::config::{AirtableArgs, Config, DatasetArgs};

/// Publish arguments
#[derive(Args)]
pub struct PublishArgs {
    #[command(flatten)]
    pub input: DatasetArgs,

    #[command(flatten)]
    pub airtable: AirtableArgs,

    /// Run against an in-memory store instead of Airtable
    #[arg(long)]
    pub dry_run: bool,
}

/// Handle the publish command
pub async fn handle_publish_command(args: PublishArgs, config: &Config) -> Result<()> {
    let rows = read_dataset(&args.input.dataset, &config.normalizer)
        .with_context(|| format!("Failed to read {}", args.input.dataset.display()))?;

    println!(
        "{}",
        format!(
            "Loaded {} posting(s) from {}",
            rows.len(),
            args.input.dataset.display()
        )
        .bold()
    );

    publish_rows(&args.airtable, args.dry_run, &rows).await
}

/// Publish classified rows and print the outcome of every table
pub async fn publish_rows(
    airtable: &AirtableArgs,
    dry_run: bool,
    rows: &[ClassifiedPosting],
) -> Result<()> {
    let report = if dry_run {
        let store = InMemoryStore::new();
        let pipeline = SyncPipeline::new(Arc::new(store))
            .with_batch_size(airtable.batch_size)
            .with_batch_delay(Duration::ZERO);
        Publisher::new(pipeline, airtable.dry_run_tables())
            .with_snapshot_notes(&airtable.snapshot_notes)
            .publish(rows)
            .await
            .context("Dry run failed")?
    } else {
        let sync_config = airtable.sync_config()?;
        let client = AirtableClient::new(&sync_config.token, &sync_config.base_id);
        let pipeline = SyncPipeline::from_config(Arc::new(client), &sync_config);
        Publisher::new(pipeline, sync_config.tables.clone())
            .with_snapshot_notes(&airtable.snapshot_notes)
            .publish(rows)
            .await
            .context("Publish run failed")?
    };

    print_publish_report(&report, dry_run);

    Ok(())
}

fn print_publish_report(report: &PublishReport, dry_run: bool) {
    println!();
    if dry_run {
        println!("{}", "Dry run: nothing was sent to Airtable".yellow());
    }
    println!("  Run:          {}", report.run_id.to_string().dimmed());
    println!(
        "  Updated at:   {}",
        report
            .last_updated
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed()
    );
    println!();

    for (table, outcome) in &report.outcomes {
        let mode = match outcome.mode {
            SyncMode::Replace => "replaced".normal(),
            SyncMode::Append => "appended".cyan(),
        };
        println!(
            "  {} {:<20} {}  deleted {:>5}  created {:>5}",
            "▸".cyan(),
            table.label().bold(),
            mode,
            outcome.deleted,
            outcome.created
        );
    }

    println!();
    println!(
        "{}",
        format!(
            "Published {} record(s) to {} table(s)",
            report.total_created(),
            report.outcomes.len()
        )
        .green()
    );
}
