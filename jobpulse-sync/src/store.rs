//! Table store seam
//!
//! The sync pipeline talks to a [`TableStore`]. The Airtable client is the
//! production implementation; [`InMemoryStore`] backs tests and dry runs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use jobpulse_client::{AirtableClient, ClientError, MAX_RECORDS_PER_REQUEST, Result, StoredRecord};
use jobpulse_core::dto::Fields;

use crate::error::Phase;

/// Remote tabular store holding the managed tables
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Reads every record of a table
    async fn list_records(&self, table_id: &str) -> Result<Vec<StoredRecord>>;

    /// Creates records in a table
    ///
    /// # Arguments
    /// * `table_id` - The table to write to
    /// * `records` - At most `MAX_RECORDS_PER_REQUEST` field maps
    async fn create_records(
        &self,
        table_id: &str,
        records: Vec<Fields>,
    ) -> Result<Vec<StoredRecord>>;

    /// Deletes records by id
    ///
    /// # Returns
    /// The ids that were deleted
    async fn delete_records(&self, table_id: &str, ids: &[String]) -> Result<Vec<String>>;
}

#[async_trait]
impl TableStore for AirtableClient {
    async fn list_records(&self, table_id: &str) -> Result<Vec<StoredRecord>> {
        AirtableClient::list_records(self, table_id).await
    }

    async fn create_records(
        &self,
        table_id: &str,
        records: Vec<Fields>,
    ) -> Result<Vec<StoredRecord>> {
        AirtableClient::create_records(self, table_id, records).await
    }

    async fn delete_records(&self, table_id: &str, ids: &[String]) -> Result<Vec<String>> {
        AirtableClient::delete_records(self, table_id, ids).await
    }
}

#[derive(Debug, Default)]
struct StoreState {
    tables: HashMap<String, Vec<StoredRecord>>,
    next_id: u64,
    failures: HashMap<(String, Phase), u16>,
    requests: Vec<StoreRequest>,
}

impl StoreState {
    fn check_failure(&self, table_id: &str, phase: Phase) -> Result<()> {
        match self.failures.get(&(table_id.to_string(), phase)) {
            Some(&status) => Err(ClientError::api_error(
                status,
                format!("injected {} failure", phase),
            )),
            None => Ok(()),
        }
    }
}

/// A request received by an [`InMemoryStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreRequest {
    pub table_id: String,
    pub phase: Phase,
    /// Number of records in the request; 0 for reads
    pub size: usize,
}

/// In-memory implementation of TableStore
///
/// Enforces the same per-request write limit as the hosted store. Failures
/// can be injected per table and phase.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later `phase` request on `table_id` fail with `status`
    pub fn fail_on(&self, table_id: &str, phase: Phase, status: u16) {
        let mut state = self.state.lock().unwrap();
        state.failures.insert((table_id.to_string(), phase), status);
    }

    /// Removes all injected failures
    pub fn clear_failures(&self) {
        self.state.lock().unwrap().failures.clear();
    }

    /// Field maps currently stored in a table, in insertion order
    pub fn rows(&self, table_id: &str) -> Vec<Fields> {
        let state = self.state.lock().unwrap();
        state
            .tables
            .get(table_id)
            .map(|records| records.iter().map(|record| record.fields.clone()).collect())
            .unwrap_or_default()
    }

    /// Every request received so far
    pub fn requests(&self) -> Vec<StoreRequest> {
        self.state.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl TableStore for InMemoryStore {
    async fn list_records(&self, table_id: &str) -> Result<Vec<StoredRecord>> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(StoreRequest {
            table_id: table_id.to_string(),
            phase: Phase::Read,
            size: 0,
        });
        state.check_failure(table_id, Phase::Read)?;

        Ok(state.tables.get(table_id).cloned().unwrap_or_default())
    }

    async fn create_records(
        &self,
        table_id: &str,
        records: Vec<Fields>,
    ) -> Result<Vec<StoredRecord>> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(StoreRequest {
            table_id: table_id.to_string(),
            phase: Phase::Create,
            size: records.len(),
        });
        state.check_failure(table_id, Phase::Create)?;
        check_batch_size(records.len())?;

        let now = Utc::now();
        let mut created = Vec::with_capacity(records.len());
        for fields in records {
            state.next_id += 1;
            created.push(StoredRecord {
                id: format!("rec{:014}", state.next_id),
                created_time: Some(now),
                fields,
            });
        }

        state
            .tables
            .entry(table_id.to_string())
            .or_default()
            .extend(created.iter().cloned());

        Ok(created)
    }

    async fn delete_records(&self, table_id: &str, ids: &[String]) -> Result<Vec<String>> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(StoreRequest {
            table_id: table_id.to_string(),
            phase: Phase::Delete,
            size: ids.len(),
        });
        state.check_failure(table_id, Phase::Delete)?;
        check_batch_size(ids.len())?;

        let Some(records) = state.tables.get_mut(table_id) else {
            return Ok(Vec::new());
        };

        let mut deleted = Vec::new();
        records.retain(|record| {
            if ids.contains(&record.id) {
                deleted.push(record.id.clone());
                false
            } else {
                true
            }
        });

        Ok(deleted)
    }
}

fn check_batch_size(len: usize) -> Result<()> {
    if len > MAX_RECORDS_PER_REQUEST {
        return Err(ClientError::InvalidRequest(format!(
            "Too many records in batch: {} (max: {})",
            len, MAX_RECORDS_PER_REQUEST
        )));
    }
    Ok(())
}
