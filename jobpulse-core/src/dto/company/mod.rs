//! Company analytics table DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::report::CompanyStats;

/// One row of the company analytics table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRecord {
    #[serde(rename = "Company Name")]
    pub company: String,
    #[serde(rename = "Total Jobs")]
    pub total_jobs: usize,
    #[serde(rename = "Engineering Jobs")]
    pub engineering_jobs: usize,
    #[serde(rename = "Sales Jobs")]
    pub sales_jobs: usize,
    #[serde(rename = "Marketing Jobs")]
    pub marketing_jobs: usize,
    #[serde(rename = "Product Jobs")]
    pub product_jobs: usize,
    #[serde(rename = "Remote Percentage")]
    pub remote_percentage: f64,
    #[serde(rename = "Unique Functions")]
    pub unique_functions: usize,
    #[serde(rename = "Last Updated")]
    pub last_updated: DateTime<Utc>,
}

impl CompanyRecord {
    pub fn new(stats: &CompanyStats, last_updated: DateTime<Utc>) -> Self {
        Self {
            company: stats.company.clone(),
            total_jobs: stats.total,
            engineering_jobs: stats.engineering,
            sales_jobs: stats.sales,
            marketing_jobs: stats.marketing,
            product_jobs: stats.product,
            remote_percentage: stats.remote_fraction,
            unique_functions: stats.unique_functions,
            last_updated,
        }
    }
}
