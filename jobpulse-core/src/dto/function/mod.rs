//! Function analytics table DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::FunctionCategory;
use crate::report::FunctionStats;

/// One row of the function analytics table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionRecord {
    #[serde(rename = "Function")]
    pub function: FunctionCategory,
    #[serde(rename = "Total Jobs")]
    pub total_jobs: usize,
    #[serde(rename = "Percentage of Total")]
    pub percentage_of_total: f64,
    #[serde(rename = "Remote Jobs")]
    pub remote_jobs: usize,
    #[serde(rename = "Remote Percentage")]
    pub remote_percentage: f64,
    #[serde(rename = "Companies Hiring")]
    pub companies_hiring: usize,
    #[serde(rename = "Executive Roles")]
    pub executive_roles: usize,
    #[serde(rename = "Senior Roles")]
    pub senior_roles: usize,
    #[serde(rename = "Last Updated")]
    pub last_updated: DateTime<Utc>,
}

impl FunctionRecord {
    pub fn new(stats: &FunctionStats, last_updated: DateTime<Utc>) -> Self {
        Self {
            function: stats.function,
            total_jobs: stats.total,
            percentage_of_total: stats.share_of_total,
            remote_jobs: stats.remote,
            remote_percentage: stats.remote_fraction,
            companies_hiring: stats.companies,
            executive_roles: stats.executive,
            senior_roles: stats.senior,
            last_updated,
        }
    }
}
