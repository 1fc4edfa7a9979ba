//! Point-in-time snapshot of the whole dataset

use chrono::NaiveDate;
use std::collections::HashSet;

use super::fraction;
use crate::domain::{ClassifiedPosting, FunctionCategory};

/// Dataset-wide totals for one run
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotStats {
    pub date: NaiveDate,
    pub total: usize,
    pub companies: usize,
    pub engineering: usize,
    pub sales: usize,
    pub marketing: usize,
    pub product: usize,
    pub remote: usize,
    pub remote_fraction: f64,
}

/// Compute the snapshot row for `date`
pub fn snapshot(rows: &[ClassifiedPosting], date: NaiveDate) -> SnapshotStats {
    let companies: HashSet<&str> = rows.iter().map(|row| row.company.as_str()).collect();
    let remote = rows.iter().filter(|row| row.remote.is_remote()).count();
    let count_of =
        |function: FunctionCategory| rows.iter().filter(|row| row.function == function).count();

    SnapshotStats {
        date,
        total: rows.len(),
        companies: companies.len(),
        engineering: count_of(FunctionCategory::Engineering),
        sales: count_of(FunctionCategory::Sales),
        marketing: count_of(FunctionCategory::Marketing),
        product: count_of(FunctionCategory::Product),
        remote,
        remote_fraction: fraction(remote, rows.len()),
    }
}
