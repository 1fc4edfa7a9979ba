//! Per-function breakdown

use std::collections::HashSet;

use super::{fraction, tally};
use crate::domain::{ClassifiedPosting, FunctionCategory, SeniorityLevel};

/// Hiring statistics for one function category
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionStats {
    pub function: FunctionCategory,
    pub total: usize,
    /// `total` over the size of the whole dataset
    pub share_of_total: f64,
    /// Postings fully remote (hybrid does not count)
    pub remote: usize,
    pub remote_fraction: f64,
    /// Distinct companies hiring for this function
    pub companies: usize,
    pub executive: usize,
    pub senior: usize,
}

/// Group postings by function, largest group first
pub fn function_report(rows: &[ClassifiedPosting]) -> Vec<FunctionStats> {
    let mut report: Vec<FunctionStats> = tally(rows.iter().map(|row| row.function))
        .into_iter()
        .map(|(function, total)| {
            let group = || rows.iter().filter(move |row| row.function == function);

            let companies: HashSet<&str> = group().map(|row| row.company.as_str()).collect();
            let remote = group().filter(|row| row.remote.is_remote()).count();
            let executive = group()
                .filter(|row| row.level == SeniorityLevel::Executive)
                .count();
            let senior = group()
                .filter(|row| row.level == SeniorityLevel::Senior)
                .count();

            FunctionStats {
                function,
                total,
                share_of_total: fraction(total, rows.len()),
                remote,
                remote_fraction: fraction(remote, total),
                companies: companies.len(),
                executive,
                senior,
            }
        })
        .collect();

    report.sort_by(|a, b| b.total.cmp(&a.total));
    report
}
