//! Table reconciliation
//!
//! A sync replaces the whole content of a table: every existing record is
//! read and deleted, then the new rows are inserted. Writes go out in small
//! batches with a pause in between to stay under the store's rate limits.
//!
//! There is no rollback. A failure part way through leaves the table
//! partially updated and the error is returned; running the sync again
//! restores the intended content.

use std::sync::Arc;
use std::time::Duration;

use jobpulse_core::dto::Fields;
use tracing::{debug, info};

use crate::config::{DEFAULT_BATCH_DELAY, DEFAULT_BATCH_SIZE, SyncConfig};
use crate::error::{Phase, Result, SyncError};
use crate::store::TableStore;

/// How a sync treats the rows already in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Delete every existing record, then insert
    Replace,
    /// Insert only, keeping existing records as history
    Append,
}

/// Result of syncing one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub table_id: String,
    pub mode: SyncMode,
    pub deleted: usize,
    pub created: usize,
}

/// Reconciles tables of a [`TableStore`]
#[derive(Clone)]
pub struct SyncPipeline {
    store: Arc<dyn TableStore>,
    batch_size: usize,
    batch_delay: Duration,
}

impl SyncPipeline {
    /// Creates a pipeline with default batching
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self {
            store,
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay: DEFAULT_BATCH_DELAY,
        }
    }

    /// Creates a pipeline with the batching of a configuration
    pub fn from_config(store: Arc<dyn TableStore>, config: &SyncConfig) -> Self {
        Self::new(store)
            .with_batch_size(config.batch_size)
            .with_batch_delay(config.batch_delay)
    }

    /// Sets the number of records per write request (clamped to at least 1)
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn with_batch_delay(mut self, batch_delay: Duration) -> Self {
        self.batch_delay = batch_delay;
        self
    }

    /// Replaces or extends the content of a table with `rows`
    ///
    /// # Arguments
    /// * `table_id` - The table to reconcile
    /// * `rows` - Field maps of the new content
    /// * `mode` - Whether existing records are deleted first
    ///
    /// # Returns
    /// How many records were deleted and created
    pub async fn sync(
        &self,
        table_id: &str,
        rows: Vec<Fields>,
        mode: SyncMode,
    ) -> Result<SyncOutcome> {
        let deleted = match mode {
            SyncMode::Replace => self.clear(table_id).await?,
            SyncMode::Append => 0,
        };

        let created = self.insert(table_id, rows).await?;

        info!(table_id, deleted, created, "Synced table");

        Ok(SyncOutcome {
            table_id: table_id.to_string(),
            mode,
            deleted,
            created,
        })
    }

    /// Deletes every record of a table
    async fn clear(&self, table_id: &str) -> Result<usize> {
        let existing = self
            .store
            .list_records(table_id)
            .await
            .map_err(SyncError::store(table_id, Phase::Read))?;

        let ids: Vec<String> = existing.into_iter().map(|record| record.id).collect();
        debug!(table_id, existing = ids.len(), "Clearing table");

        let mut deleted = 0;
        for (i, batch) in ids.chunks(self.batch_size).enumerate() {
            if i > 0 {
                tokio::time::sleep(self.batch_delay).await;
            }
            let confirmed = self
                .store
                .delete_records(table_id, batch)
                .await
                .map_err(SyncError::store(table_id, Phase::Delete))?;
            deleted += confirmed.len();
        }

        Ok(deleted)
    }

    /// Inserts rows in batches
    async fn insert(&self, table_id: &str, rows: Vec<Fields>) -> Result<usize> {
        let mut created = 0;
        for (i, batch) in rows.chunks(self.batch_size).enumerate() {
            if i > 0 {
                tokio::time::sleep(self.batch_delay).await;
            }
            let records = self
                .store
                .create_records(table_id, batch.to_vec())
                .await
                .map_err(SyncError::store(table_id, Phase::Create))?;
            created += records.len();
        }

        Ok(created)
    }
}
