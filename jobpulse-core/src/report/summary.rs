//! Quick terminal-oriented overview of a dataset

use super::ranked;
use crate::domain::{ClassifiedPosting, FunctionCategory, SeniorityLevel};

/// Counts by function, by level, and the most common titles
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub total: usize,
    pub by_function: Vec<(FunctionCategory, usize)>,
    pub by_level: Vec<(SeniorityLevel, usize)>,
    pub top_titles: Vec<(String, usize)>,
}

/// Summarize a dataset, keeping the `top_titles` most frequent titles
pub fn summarize(rows: &[ClassifiedPosting], top_titles: usize) -> DatasetSummary {
    let mut titles = ranked(rows.iter().map(|row| row.title.as_str()));
    titles.truncate(top_titles);

    DatasetSummary {
        total: rows.len(),
        by_function: ranked(rows.iter().map(|row| row.function)),
        by_level: ranked(rows.iter().map(|row| row.level)),
        top_titles: titles
            .into_iter()
            .map(|(title, count)| (title.to_string(), count))
            .collect(),
    }
}
