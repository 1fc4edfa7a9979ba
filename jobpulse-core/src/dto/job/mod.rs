//! Jobs table DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ClassifiedPosting, FunctionCategory, RemoteStatus, SeniorityLevel};

/// One row of the jobs table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Job Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Function")]
    pub function: FunctionCategory,
    #[serde(rename = "Level")]
    pub level: SeniorityLevel,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Remote")]
    pub remote: RemoteStatus,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Last Updated")]
    pub last_updated: DateTime<Utc>,
}

impl JobRecord {
    pub fn new(posting: &ClassifiedPosting, last_updated: DateTime<Utc>) -> Self {
        Self {
            title: posting.title.clone(),
            company: posting.company.clone(),
            function: posting.function,
            level: posting.level,
            location: posting.location.clone(),
            remote: posting.remote,
            url: posting.url.clone(),
            last_updated,
        }
    }
}
