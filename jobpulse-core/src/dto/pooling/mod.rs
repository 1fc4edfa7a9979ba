//! Talent pooling table DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{FunctionCategory, SeniorityLevel};
use crate::report::PoolingOpportunity;

/// One row of the talent pooling table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolingRecord {
    #[serde(rename = "Job Title")]
    pub title: String,
    #[serde(rename = "Number of Companies")]
    pub company_count: usize,
    #[serde(rename = "Total Openings")]
    pub total_openings: usize,
    #[serde(rename = "Companies")]
    pub companies: String,
    #[serde(rename = "Function")]
    pub function: FunctionCategory,
    #[serde(rename = "Level")]
    pub level: SeniorityLevel,
    #[serde(rename = "Priority")]
    pub priority: String,
    #[serde(rename = "Last Updated")]
    pub last_updated: DateTime<Utc>,
}

impl PoolingRecord {
    pub fn new(opportunity: &PoolingOpportunity, last_updated: DateTime<Utc>) -> Self {
        Self {
            title: opportunity.title.clone(),
            company_count: opportunity.company_count(),
            total_openings: opportunity.total_openings,
            companies: opportunity.companies_label(),
            function: opportunity.function,
            level: opportunity.level,
            priority: opportunity.priority().label().to_string(),
            last_updated,
        }
    }
}
