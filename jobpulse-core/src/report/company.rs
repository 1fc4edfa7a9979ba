//! Per-company breakdown

use std::collections::HashSet;

use super::{fraction, tally};
use crate::domain::{ClassifiedPosting, FunctionCategory};

/// Number of companies kept in the report
pub const COMPANY_REPORT_LIMIT: usize = 50;

/// Hiring statistics for one company
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyStats {
    pub company: String,
    pub total: usize,
    /// Distinct function categories the company is hiring for
    pub unique_functions: usize,
    pub remote_fraction: f64,
    pub engineering: usize,
    pub sales: usize,
    pub marketing: usize,
    pub product: usize,
}

/// Group postings by company, keeping the `COMPANY_REPORT_LIMIT` largest
pub fn company_report(rows: &[ClassifiedPosting]) -> Vec<CompanyStats> {
    let mut report: Vec<CompanyStats> = tally(rows.iter().map(|row| row.company.as_str()))
        .into_iter()
        .map(|(company, total)| {
            let group: Vec<&ClassifiedPosting> =
                rows.iter().filter(|row| row.company == company).collect();

            let functions: HashSet<FunctionCategory> =
                group.iter().map(|row| row.function).collect();
            let remote = group.iter().filter(|row| row.remote.is_remote()).count();
            let count_of = |function: FunctionCategory| {
                group.iter().filter(|row| row.function == function).count()
            };

            CompanyStats {
                company: company.to_string(),
                total,
                unique_functions: functions.len(),
                remote_fraction: fraction(remote, total),
                engineering: count_of(FunctionCategory::Engineering),
                sales: count_of(FunctionCategory::Sales),
                marketing: count_of(FunctionCategory::Marketing),
                product: count_of(FunctionCategory::Product),
            }
        })
        .collect();

    report.sort_by(|a, b| b.total.cmp(&a.total));
    report.truncate(COMPANY_REPORT_LIMIT);
    report
}
