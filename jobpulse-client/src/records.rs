//! Table record API endpoints

use serde_json::{Map, Value};

use crate::error::{ClientError, Result};
use crate::types::{
    CreateRecordsRequest, CreateRecordsResponse, DeleteRecordsResponse, ListRecordsResponse,
    NewRecord, StoredRecord,
};
use crate::{AirtableClient, handle_response};

/// Per-request write limit of the table store
pub const MAX_RECORDS_PER_REQUEST: usize = 10;

/// Page size used for full table reads
const LIST_PAGE_SIZE: &str = "100";

impl AirtableClient {
    // =============================================================================
    // Reads
    // =============================================================================

    /// Read every record of a table
    ///
    /// Follows the `offset` cursor until the last page.
    ///
    /// # Arguments
    /// * `table_id` - The table identifier
    ///
    /// # Returns
    /// All records, in the order the store returns them
    pub async fn list_records(&self, table_id: &str) -> Result<Vec<StoredRecord>> {
        let url = self.table_url(table_id);
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(&url)
                .bearer_auth(&self.token)
                .query(&[("pageSize", LIST_PAGE_SIZE)]);
            if let Some(cursor) = &offset {
                request = request.query(&[("offset", cursor.as_str())]);
            }

            let page: ListRecordsResponse = handle_response(request.send().await?).await?;
            records.extend(page.records);

            match page.offset {
                Some(next) => offset = Some(next),
                None => break,
            }
        }

        tracing::debug!(table_id, count = records.len(), "Listed table records");

        Ok(records)
    }

    // =============================================================================
    // Writes
    // =============================================================================

    /// Create up to `MAX_RECORDS_PER_REQUEST` records
    ///
    /// # Arguments
    /// * `table_id` - The table identifier
    /// * `records` - Field maps of the records to create
    ///
    /// # Returns
    /// The created records, with their new ids
    pub async fn create_records(
        &self,
        table_id: &str,
        records: Vec<Map<String, Value>>,
    ) -> Result<Vec<StoredRecord>> {
        check_batch_size(records.len())?;
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let body = CreateRecordsRequest {
            records: records
                .into_iter()
                .map(|fields| NewRecord { fields })
                .collect(),
            typecast: true,
        };

        let response = self
            .client
            .post(self.table_url(table_id))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let created: CreateRecordsResponse = handle_response(response).await?;
        Ok(created.records)
    }

    /// Delete up to `MAX_RECORDS_PER_REQUEST` records by id
    ///
    /// # Arguments
    /// * `table_id` - The table identifier
    /// * `ids` - Record ids to delete
    ///
    /// # Returns
    /// The ids the store confirmed as deleted
    pub async fn delete_records(&self, table_id: &str, ids: &[String]) -> Result<Vec<String>> {
        check_batch_size(ids.len())?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query: Vec<(&str, &str)> = ids.iter().map(|id| ("records[]", id.as_str())).collect();

        let response = self
            .client
            .delete(self.table_url(table_id))
            .bearer_auth(&self.token)
            .query(&query)
            .send()
            .await?;

        let deleted: DeleteRecordsResponse = handle_response(response).await?;
        Ok(deleted
            .records
            .into_iter()
            .filter(|record| record.deleted)
            .map(|record| record.id)
            .collect())
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
