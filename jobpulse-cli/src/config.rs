//! Configuration module
//!
//! Shared CLI settings and the argument groups reused across commands.
//! Every flag falls back to an environment variable.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use jobpulse_core::CategoryNormalizer;
use jobpulse_core::dto::DEFAULT_SNAPSHOT_NOTES;
use jobpulse_sync::config::{DEFAULT_BATCH_DELAY, DEFAULT_BATCH_SIZE};
use jobpulse_sync::{SyncConfig, Table, TableIds};
use tracing::info;

/// Search endpoint of the default job board
pub const DEFAULT_BOARD_URL: &str = "https://jobs.bvp.com/api-boards/search-jobs";

/// Identifier of the default job board
pub const DEFAULT_BOARD_ID: &str = "bessemer-ventures";

/// Default location of the classified dataset
pub const DEFAULT_DATASET: &str = "jobs_classified.csv";

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Department label resolver used while classifying
    pub normalizer: CategoryNormalizer,
}

impl Config {
    /// Builds the configuration, loading an external mapping if one is given
    pub fn load(mapping: Option<&Path>) -> Result<Self> {
        let normalizer = match mapping {
            Some(path) => {
                let normalizer = CategoryNormalizer::from_path(path)
                    .with_context(|| format!("Failed to load mapping {}", path.display()))?;
                info!(path = %path.display(), labels = normalizer.len(), "Loaded function mapping");
                normalizer
            }
            None => CategoryNormalizer::builtin(),
        };

        Ok(Self { normalizer })
    }
}

/// Job board connection
#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    /// Board search endpoint
    #[arg(long, env = "JOBPULSE_BOARD_URL", default_value = DEFAULT_BOARD_URL)]
    pub board_url: String,

    /// Board identifier
    #[arg(long, env = "JOBPULSE_BOARD_ID", default_value = DEFAULT_BOARD_ID)]
    pub board_id: String,
}

/// Location of the classified dataset
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// CSV file between scrape and publish
    #[arg(short, long, env = "JOBPULSE_DATASET", default_value = DEFAULT_DATASET)]
    pub dataset: PathBuf,
}

/// Airtable connection and table ids
#[derive(Args, Debug, Clone, Default)]
pub struct AirtableArgs {
    /// Personal access token
    #[arg(long, env = "AIRTABLE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base identifier
    #[arg(long, env = "AIRTABLE_BASE_ID")]
    pub base_id: Option<String>,

    /// Jobs table id
    #[arg(long, env = "JOBPULSE_JOBS_TABLE")]
    pub jobs_table: Option<String>,

    /// Function analytics table id
    #[arg(long, env = "JOBPULSE_FUNCTION_TABLE")]
    pub function_table: Option<String>,

    /// Company analytics table id
    #[arg(long, env = "JOBPULSE_COMPANY_TABLE")]
    pub company_table: Option<String>,

    /// Weekly snapshot table id
    #[arg(long, env = "JOBPULSE_SNAPSHOT_TABLE")]
    pub snapshot_table: Option<String>,

    /// Talent pooling table id
    #[arg(long, env = "JOBPULSE_POOLING_TABLE")]
    pub pooling_table: Option<String>,

    /// Records per write request (1-10)
    #[arg(long, env = "JOBPULSE_BATCH_SIZE", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Pause between write batches, in milliseconds
    #[arg(
        long,
        env = "JOBPULSE_BATCH_DELAY_MS",
        default_value_t = DEFAULT_BATCH_DELAY.as_millis() as u64
    )]
    pub batch_delay_ms: u64,

    /// Note attached to the weekly snapshot row
    #[arg(long, env = "JOBPULSE_SNAPSHOT_NOTES", default_value = DEFAULT_SNAPSHOT_NOTES)]
    pub snapshot_notes: String,
}

impl AirtableArgs {
    fn table_arg(&self, table: Table) -> Option<&str> {
        let value = match table {
            Table::Jobs => &self.jobs_table,
            Table::Function => &self.function_table,
            Table::Company => &self.company_table,
            Table::Snapshot => &self.snapshot_table,
            Table::Pooling => &self.pooling_table,
        };
        value.as_deref().filter(|id| !id.is_empty())
    }

    /// Builds a validated sync configuration; every value is required
    pub fn sync_config(&self) -> Result<SyncConfig> {
        let token = self
            .token
            .clone()
            .context("Airtable token not set (use --token or AIRTABLE_TOKEN)")?;
        let base_id = self
            .base_id
            .clone()
            .context("Airtable base not set (use --base-id or AIRTABLE_BASE_ID)")?;

        let mut tables = TableIds::default();
        for table in Table::ALL {
            let id = self.table_arg(table).with_context(|| {
                format!("Table id for {} not set ({})", table.label(), table.env_var())
            })?;
            tables.set(table, id);
        }

        let mut config = SyncConfig::new(base_id, token, tables);
        config.batch_size = self.batch_size;
        config.batch_delay = Duration::from_millis(self.batch_delay_ms);
        config.validate()?;

        Ok(config)
    }

    /// Table ids for a dry run; missing ids fall back to the table names
    pub fn dry_run_tables(&self) -> TableIds {
        let mut tables = TableIds::default();
        for table in Table::ALL {
            let id = self.table_arg(table).unwrap_or(table.label());
            tables.set(table, id);
        }
        tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_args() -> AirtableArgs {
        AirtableArgs {
            token: Some("pat".to_string()),
            base_id: Some("app123".to_string()),
            jobs_table: Some("tblJobs".to_string()),
            function_table: Some("tblFunction".to_string()),
            company_table: Some("tblCompany".to_string()),
            snapshot_table: Some("tblSnapshot".to_string()),
            pooling_table: Some("tblPooling".to_string()),
            batch_size: 10,
            batch_delay_ms: 200,
            snapshot_notes: DEFAULT_SNAPSHOT_NOTES.to_string(),
        }
    }

    #[test]
    fn test_sync_config_from_args() {
        let config = complete_args().sync_config().unwrap();
        assert_eq!(config.base_id, "app123");
        assert_eq!(config.tables.get(Table::Pooling), "tblPooling");
        assert_eq!(config.batch_delay, Duration::from_millis(200));
    }

    #[test]
    fn test_sync_config_requires_every_table() {
        let mut args = complete_args();
        args.snapshot_table = None;
        let err = args.sync_config().unwrap_err();
        assert!(err.to_string().contains("JOBPULSE_SNAPSHOT_TABLE"));
    }

    #[test]
    fn test_sync_config_rejects_large_batches() {
        let mut args = complete_args();
        args.batch_size = 50;
        assert!(args.sync_config().is_err());
    }

    #[test]
    fn test_dry_run_tables_fall_back_to_names() {
        let args = AirtableArgs {
            jobs_table: Some("tblJobs".to_string()),
            ..Default::default()
        };
        let tables = args.dry_run_tables();
        assert_eq!(tables.jobs, "tblJobs");
        assert_eq!(tables.pooling, "Talent Pooling");
    }
}
