//! Report command handler
//!
//! Prints the analytics of a saved dataset without touching Airtable.

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use jobpulse_core::dataset::read_dataset;
use jobpulse_core::report::{
    DatasetSummary, company_report, fraction, function_report, pooling_report, summarize,
};

use crate::config::{Config, DatasetArgs};

/// Titles listed in a summary unless asked otherwise
pub const DEFAULT_TOP_TITLES: usize = 20;

const LISTED_COMPANIES: usize = 10;
const LISTED_OPPORTUNITIES: usize = 10;

/// Report arguments
#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: DatasetArgs,

    /// Number of most frequent titles to list
    #[arg(long, default_value_t = DEFAULT_TOP_TITLES)]
    pub top: usize,
}

/// Handle the report command
pub fn handle_report_command(args: ReportArgs, config: &Config) -> Result<()> {
    let rows = read_dataset(&args.input.dataset, &config.normalizer)
        .with_context(|| format!("Failed to read {}", args.input.dataset.display()))?;

    if rows.is_empty() {
        println!("{}", "Dataset is empty.".yellow());
        return Ok(());
    }

    print_summary(&summarize(&rows, args.top));

    println!();
    println!("{}", "Functions".bold());
    for stats in function_report(&rows) {
        println!(
            "  {} {:<32} {:>5}  remote {:>5.1}%  companies {:>4}  exec {:>3}  senior {:>4}",
            "▸".cyan(),
            stats.function.label(),
            stats.total,
            stats.remote_fraction * 100.0,
            stats.companies,
            stats.executive,
            stats.senior
        );
    }

    println!();
    println!("{}", format!("Top {} companies", LISTED_COMPANIES).bold());
    for stats in company_report(&rows).iter().take(LISTED_COMPANIES) {
        println!(
            "  {} {:<32} {:>5}  functions {:>2}  remote {:>5.1}%",
            "▸".cyan(),
            stats.company,
            stats.total,
            stats.unique_functions,
            stats.remote_fraction * 100.0
        );
    }

    let opportunities = pooling_report(&rows);
    println!();
    if opportunities.is_empty() {
        println!("{}", "No titles are posted by more than one company.".yellow());
    } else {
        println!("{}", "Talent pooling opportunities".bold());
        for opportunity in opportunities.iter().take(LISTED_OPPORTUNITIES) {
            println!(
                "  {} {} {}",
                "▸".cyan(),
                opportunity.title.bold(),
                format!("[{}]", opportunity.priority().label()).dimmed()
            );
            println!(
                "    {} openings at {}",
                opportunity.total_openings,
                opportunity.companies_label()
            );
        }
    }

    Ok(())
}

/// Print totals by function and level and the most frequent titles
pub fn print_summary(summary: &DatasetSummary) {
    println!("{}", format!("Total postings: {}", summary.total).bold());

    println!();
    println!("{}", "By function".bold());
    for (function, count) in &summary.by_function {
        println!(
            "  {:<32} {:>5} ({:>5.1}%)",
            function.label(),
            count,
            fraction(*count, summary.total) * 100.0
        );
    }

    println!();
    println!("{}", "By level".bold());
    for (level, count) in &summary.by_level {
        println!(
            "  {:<32} {:>5} ({:>5.1}%)",
            level.label(),
            count,
            fraction(*count, summary.total) * 100.0
        );
    }

    if !summary.top_titles.is_empty() {
        println!();
        println!("{}", "Most frequent titles".bold());
        for (title, count) in &summary.top_titles {
            println!("  {:>4}x {}", count, title);
        }
    }
}
