//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod publish;
mod report;
mod run;
mod scrape;

pub use publish::PublishArgs;
pub use report::ReportArgs;
pub use run::RunArgs;
pub use scrape::ScrapeArgs;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the job board, classify every posting, and save the dataset
    Scrape(ScrapeArgs),
    /// Print the analytics of a saved dataset
    Report(ReportArgs),
    /// Sync a saved dataset to the Airtable base
    Publish(PublishArgs),
    /// Scrape, then publish
    Run(RunArgs),
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Scrape(args) => scrape::handle_scrape_command(args, config).await,
        Commands::Report(args) => report::handle_report_command(args, config),
        Commands::Publish(args) => publish::handle_publish_command(args, config).await,
        Commands::Run(args) => run::handle_run_command(args, config).await,
    }
}
