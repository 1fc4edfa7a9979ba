//! Weekly snapshot table DTO

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::report::SnapshotStats;

/// Note attached to snapshots written by the scheduled run
pub const DEFAULT_SNAPSHOT_NOTES: &str = "Automated weekly update";

/// One row of the weekly snapshot table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRecord {
    #[serde(rename = "Snapshot Date")]
    pub snapshot_date: NaiveDate,
    #[serde(rename = "Total Jobs")]
    pub total_jobs: usize,
    #[serde(rename = "Total Companies Hiring")]
    pub total_companies: usize,
    #[serde(rename = "Engineering Jobs")]
    pub engineering_jobs: usize,
    #[serde(rename = "Sales Jobs")]
    pub sales_jobs: usize,
    #[serde(rename = "Marketing Jobs")]
    pub marketing_jobs: usize,
    #[serde(rename = "Product Jobs")]
    pub product_jobs: usize,
    #[serde(rename = "Remote Jobs")]
    pub remote_jobs: usize,
    #[serde(rename = "Remote Percentage")]
    pub remote_percentage: f64,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl SnapshotRecord {
    pub fn new(stats: &SnapshotStats, notes: impl Into<String>) -> Self {
        Self {
            snapshot_date: stats.date,
            total_jobs: stats.total,
            total_companies: stats.companies,
            engineering_jobs: stats.engineering,
            sales_jobs: stats.sales,
            marketing_jobs: stats.marketing,
            product_jobs: stats.product,
            remote_jobs: stats.remote,
            remote_percentage: stats.remote_fraction,
            notes: notes.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::TableRecord;
    use crate::report::snapshot;
    use serde_json::json;

    #[test]
    fn test_snapshot_record_fields() {
        let stats = snapshot(&[], NaiveDate::from_ymd_opt(2026, 10, 12).unwrap());
        let fields = SnapshotRecord::new(&stats, DEFAULT_SNAPSHOT_NOTES).to_fields().unwrap();

        assert_eq!(fields["Snapshot Date"], json!("2026-10-12"));
        assert_eq!(fields["Total Jobs"], json!(0));
        assert_eq!(fields["Remote Percentage"], json!(0.0));
        assert_eq!(fields["Notes"], json!("Automated weekly update"));
    }
}
