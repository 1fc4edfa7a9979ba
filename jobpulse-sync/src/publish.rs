//! Publishing a classified dataset to all managed tables

use chrono::{DateTime, Utc};
use jobpulse_core::domain::ClassifiedPosting;
use jobpulse_core::dto::{
    CompanyRecord, DEFAULT_SNAPSHOT_NOTES, Fields, FunctionRecord, JobRecord, PoolingRecord,
    SnapshotRecord, TableRecord,
};
use jobpulse_core::report::{company_report, function_report, pooling_report, snapshot};
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::config::{Table, TableIds};
use crate::error::Result;
use crate::pipeline::{SyncMode, SyncOutcome, SyncPipeline};

impl Table {
    /// Reconciliation mode used when publishing to this table
    pub fn sync_mode(&self) -> SyncMode {
        match self {
            Table::Snapshot => SyncMode::Append,
            _ => SyncMode::Replace,
        }
    }
}

/// Summary of one publish run
#[derive(Debug, Clone)]
pub struct PublishReport {
    pub run_id: Uuid,
    /// Timestamp written to every row of the run
    pub last_updated: DateTime<Utc>,
    /// One outcome per table, in publishing order
    pub outcomes: Vec<(Table, SyncOutcome)>,
}

impl PublishReport {
    pub fn total_created(&self) -> usize {
        self.outcomes.iter().map(|(_, outcome)| outcome.created).sum()
    }

    pub fn total_deleted(&self) -> usize {
        self.outcomes.iter().map(|(_, outcome)| outcome.deleted).sum()
    }
}

/// Computes every report of a dataset and syncs it to its table
pub struct Publisher {
    pipeline: SyncPipeline,
    tables: TableIds,
    snapshot_notes: String,
}

impl Publisher {
    pub fn new(pipeline: SyncPipeline, tables: TableIds) -> Self {
        Self {
            pipeline,
            tables,
            snapshot_notes: DEFAULT_SNAPSHOT_NOTES.to_string(),
        }
    }

    /// Overrides the note attached to the weekly snapshot row
    pub fn with_snapshot_notes(mut self, notes: impl Into<String>) -> Self {
        self.snapshot_notes = notes.into();
        self
    }

    /// Publishes `rows` stamped with the current time
    pub async fn publish(&self, rows: &[ClassifiedPosting]) -> Result<PublishReport> {
        self.publish_at(rows, Utc::now()).await
    }

    /// Publishes `rows` stamped with `last_updated`
    ///
    /// Tables are synced one after another in [`Table::ALL`] order. The
    /// first failure stops the run; tables already synced keep their new
    /// content.
    pub async fn publish_at(
        &self,
        rows: &[ClassifiedPosting],
        last_updated: DateTime<Utc>,
    ) -> Result<PublishReport> {
        let run_id = Uuid::new_v4();
        let span = info_span!("publish", %run_id);

        async move {
            info!(postings = rows.len(), "Starting publish run");

            let mut outcomes = Vec::with_capacity(Table::ALL.len());
            for table in Table::ALL {
                let fields = self.table_rows(table, rows, last_updated)?;
                let table_id = self.tables.get(table);

                info!(table = table.label(), rows = fields.len(), "Syncing table");
                let outcome = self.pipeline.sync(table_id, fields, table.sync_mode()).await?;
                outcomes.push((table, outcome));
            }

            let report = PublishReport {
                run_id,
                last_updated,
                outcomes,
            };
            info!(
                created = report.total_created(),
                deleted = report.total_deleted(),
                "Publish run complete"
            );

            Ok(report)
        }
        .instrument(span)
        .await
    }

    /// Rows of one table for a dataset
    pub fn table_rows(
        &self,
        table: Table,
        rows: &[ClassifiedPosting],
        last_updated: DateTime<Utc>,
    ) -> Result<Vec<Fields>> {
        let fields: jobpulse_core::Result<Vec<Fields>> = match table {
            Table::Jobs => rows
                .iter()
                .map(|row| JobRecord::new(row, last_updated).to_fields())
                .collect(),
            Table::Function => function_report(rows)
                .iter()
                .map(|stats| FunctionRecord::new(stats, last_updated).to_fields())
                .collect(),
            Table::Company => company_report(rows)
                .iter()
                .map(|stats| CompanyRecord::new(stats, last_updated).to_fields())
                .collect(),
            Table::Snapshot => {
                let stats = snapshot(rows, last_updated.date_naive());
                SnapshotRecord::new(&stats, self.snapshot_notes.clone())
                    .to_fields()
                    .map(|fields| vec![fields])
            }
            Table::Pooling => pooling_report(rows)
                .iter()
                .map(|opportunity| PoolingRecord::new(opportunity, last_updated).to_fields())
                .collect(),
        };

        Ok(fields?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Phase, SyncError};
    use crate::store::InMemoryStore;
    use chrono::TimeZone;
    use jobpulse_core::domain::{FunctionCategory, RemoteStatus, SeniorityLevel};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    fn posting(
        title: &str,
        company: &str,
        function: FunctionCategory,
        remote: RemoteStatus,
    ) -> ClassifiedPosting {
        ClassifiedPosting {
            title: title.to_string(),
            company: company.to_string(),
            function,
            level: SeniorityLevel::MidLevel,
            location: "Remote".to_string(),
            remote,
            url: String::new(),
        }
    }

    fn dataset() -> Vec<ClassifiedPosting> {
        use FunctionCategory::*;
        use RemoteStatus::*;

        vec![
            posting("Software Engineer", "Acme", Engineering, Yes),
            posting("Software Engineer", "Globex", Engineering, No),
            posting("Software Engineer", "Initech", Engineering, No),
            posting("Account Executive", "Acme", Sales, Hybrid),
            posting("Account Executive", "Initech", Sales, Yes),
            posting("Product Manager", "Initech", Product, No),
        ]
    }

    fn tables() -> TableIds {
        TableIds {
            jobs: "tblJobs".to_string(),
            function: "tblFunction".to_string(),
            company: "tblCompany".to_string(),
            snapshot: "tblSnapshot".to_string(),
            pooling: "tblPooling".to_string(),
        }
    }

    fn publisher(store: &InMemoryStore) -> Publisher {
        let pipeline = SyncPipeline::new(Arc::new(store.clone())).with_batch_delay(Duration::ZERO);
        Publisher::new(pipeline, tables())
    }

    #[tokio::test]
    async fn test_publish_writes_every_table() {
        let store = InMemoryStore::new();
        let at = Utc.with_ymd_and_hms(2026, 10, 12, 9, 0, 0).unwrap();

        let report = publisher(&store).publish_at(&dataset(), at).await.unwrap();

        let order: Vec<Table> = report.outcomes.iter().map(|(table, _)| *table).collect();
        assert_eq!(order, Table::ALL.to_vec());

        assert_eq!(store.rows("tblJobs").len(), 6);
        assert_eq!(store.rows("tblFunction").len(), 3);
        assert_eq!(store.rows("tblCompany").len(), 3);
        assert_eq!(store.rows("tblSnapshot").len(), 1);
        assert_eq!(store.rows("tblPooling").len(), 2);

        let snapshot = &store.rows("tblSnapshot")[0];
        assert_eq!(snapshot["Snapshot Date"], json!("2026-10-12"));
        assert_eq!(snapshot["Total Jobs"], json!(6));
        assert_eq!(snapshot["Notes"], json!(DEFAULT_SNAPSHOT_NOTES));
    }

    #[tokio::test]
    async fn test_custom_snapshot_notes() {
        let store = InMemoryStore::new();
        let publisher = publisher(&store).with_snapshot_notes("Manual backfill");

        publisher.publish(&dataset()).await.unwrap();

        let snapshot = &store.rows("tblSnapshot")[0];
        assert_eq!(snapshot["Notes"], json!("Manual backfill"));
    }

    #[tokio::test]
    async fn test_rows_share_run_timestamp() {
        let store = InMemoryStore::new();
        let at = Utc.with_ymd_and_hms(2026, 10, 12, 9, 0, 0).unwrap();

        publisher(&store).publish_at(&dataset(), at).await.unwrap();

        for table in ["tblJobs", "tblFunction", "tblCompany", "tblPooling"] {
            for row in store.rows(table) {
                assert_eq!(row["Last Updated"], json!("2026-10-12T09:00:00Z"));
            }
        }
    }

    #[tokio::test]
    async fn test_republish_replaces_and_appends_snapshot() {
        let store = InMemoryStore::new();
        let publisher = publisher(&store);

        publisher.publish(&dataset()).await.unwrap();
        let second = publisher.publish(&dataset()[..2]).await.unwrap();

        assert_eq!(store.rows("tblJobs").len(), 2);
        assert_eq!(store.rows("tblSnapshot").len(), 2);
        assert_eq!(store.rows("tblPooling").len(), 1);

        let (_, jobs) = &second.outcomes[0];
        assert_eq!(jobs.deleted, 6);
        assert_eq!(jobs.created, 2);
    }

    #[tokio::test]
    async fn test_failure_halts_run() {
        let store = InMemoryStore::new();
        let publisher = publisher(&store);

        // Seed the company table so the delete phase is reached
        publisher.publish(&dataset()).await.unwrap();
        store.fail_on("tblCompany", Phase::Delete, 503);

        let err = publisher.publish(&dataset()).await.unwrap_err();
        match err {
            SyncError::Store { table, phase, .. } => {
                assert_eq!(table, "tblCompany");
                assert_eq!(phase, Phase::Delete);
            }
            other => panic!("unexpected error: {other}"),
        }

        // Later tables were not touched by the failed run
        assert_eq!(store.rows("tblSnapshot").len(), 1);
    }
}
