//! Sync configuration
//!
//! Credentials, the ids of the managed tables, and the pacing of write
//! batches. The binary fills it from its arguments and their environment
//! fallbacks.

use std::time::Duration;

use jobpulse_client::MAX_RECORDS_PER_REQUEST;

use crate::error::{Result, SyncError};

/// Records per write request unless configured otherwise
pub const DEFAULT_BATCH_SIZE: usize = MAX_RECORDS_PER_REQUEST;

/// Pause between write batches unless configured otherwise
pub const DEFAULT_BATCH_DELAY: Duration = Duration::from_millis(200);

/// A table managed by the publisher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Jobs,
    Function,
    Company,
    Snapshot,
    Pooling,
}

impl Table {
    /// Publishing order
    pub const ALL: [Table; 5] = [
        Table::Jobs,
        Table::Function,
        Table::Company,
        Table::Snapshot,
        Table::Pooling,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Table::Jobs => "Jobs",
            Table::Function => "Function Analytics",
            Table::Company => "Company Analytics",
            Table::Snapshot => "Weekly Snapshots",
            Table::Pooling => "Talent Pooling",
        }
    }

    /// Environment variable holding the table id
    pub fn env_var(&self) -> &'static str {
        match self {
            Table::Jobs => "JOBPULSE_JOBS_TABLE",
            Table::Function => "JOBPULSE_FUNCTION_TABLE",
            Table::Company => "JOBPULSE_COMPANY_TABLE",
            Table::Snapshot => "JOBPULSE_SNAPSHOT_TABLE",
            Table::Pooling => "JOBPULSE_POOLING_TABLE",
        }
    }
}

/// Ids of the managed tables within the base
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableIds {
    pub jobs: String,
    pub function: String,
    pub company: String,
    pub snapshot: String,
    pub pooling: String,
}

impl TableIds {
    pub fn get(&self, table: Table) -> &str {
        match table {
            Table::Jobs => &self.jobs,
            Table::Function => &self.function,
            Table::Company => &self.company,
            Table::Snapshot => &self.snapshot,
            Table::Pooling => &self.pooling,
        }
    }

    pub fn set(&mut self, table: Table, id: impl Into<String>) {
        let slot = match table {
            Table::Jobs => &mut self.jobs,
            Table::Function => &mut self.function,
            Table::Company => &mut self.company,
            Table::Snapshot => &mut self.snapshot,
            Table::Pooling => &mut self.pooling,
        };
        *slot = id.into();
    }
}

/// Sync configuration
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Base identifier (e.g., "appXXXXXXXX")
    pub base_id: String,

    /// Personal access token
    pub token: String,

    pub tables: TableIds,

    /// Records per write request, at most 10
    pub batch_size: usize,

    /// Pause between consecutive write batches
    pub batch_delay: Duration,
}

impl SyncConfig {
    /// Creates a new configuration with default pacing
    pub fn new(base_id: impl Into<String>, token: impl Into<String>, tables: TableIds) -> Self {
        Self {
            base_id: base_id.into(),
            token: token.into(),
            tables,
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay: DEFAULT_BATCH_DELAY,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.token.is_empty() {
            return Err(SyncError::Config("token cannot be empty".into()));
        }

        if self.base_id.is_empty() {
            return Err(SyncError::Config("base_id cannot be empty".into()));
        }

        for table in Table::ALL {
            if self.tables.get(table).is_empty() {
                return Err(SyncError::Config(format!(
                    "table id for {} cannot be empty",
                    table.label()
                )));
            }
        }

        if self.batch_size == 0 || self.batch_size > MAX_RECORDS_PER_REQUEST {
            return Err(SyncError::Config(format!(
                "batch_size must be between 1 and {}",
                MAX_RECORDS_PER_REQUEST
            )));
        }

        Ok(())
    }
}
