//! Aggregate reports
//!
//! Every report is a pure function of a complete classified dataset. Nothing
//! is carried between runs; each run recomputes the reports from scratch and
//! the sync replaces the previous ones wholesale.
//!
//! Orderings are stable: when two groups tie on the sort key, the one that
//! appears first in the input comes first.

pub mod company;
pub mod function;
pub mod pooling;
pub mod snapshot;
pub mod summary;

pub use company::{COMPANY_REPORT_LIMIT, CompanyStats, company_report};
pub use function::{FunctionStats, function_report};
pub use pooling::{POOLING_REPORT_LIMIT, PoolingOpportunity, Priority, pooling_report};
pub use snapshot::{SnapshotStats, snapshot};
pub use summary::{DatasetSummary, summarize};

use std::collections::HashMap;
use std::hash::Hash;

/// `part / whole`, defined as 0 for an empty whole
pub fn fraction(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Count occurrences, keeping keys in first-seen order
pub(crate) fn tally<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        match index.get(&item) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    counts
}

/// Most frequent value; ties go to the value seen first
pub(crate) fn mode<K, I>(items: I) -> Option<K>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut best: Option<(K, usize)> = None;
    for (key, count) in tally(items) {
        if best.as_ref().is_none_or(|(_, top)| count > *top) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}

/// Tally sorted by descending count, ties in first-seen order
pub(crate) fn ranked<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut counts = tally(items);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
