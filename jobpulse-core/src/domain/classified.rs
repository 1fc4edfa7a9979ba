//! Classified posting domain type

use serde::{Deserialize, Serialize};

use super::category::{FunctionCategory, RemoteStatus, SeniorityLevel};
use super::posting::Posting;
use crate::classify::classify_title;
use crate::normalize::CategoryNormalizer;

/// A posting tagged with its function and seniority
///
/// This is also the row shape of the intermediate dataset, hence the column
/// names. It is derived from a `Posting` and never patched afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedPosting {
    #[serde(rename = "Title")]
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
}

impl ClassifiedPosting {
    /// Classify a posting, resolving its upstream department through the
    /// normalizer
    pub fn from_posting(posting: &Posting, normalizer: &CategoryNormalizer) -> Self {
        let function = normalizer.normalize(posting.department.as_deref(), &posting.title);
        let (_, level) = classify_title(&posting.title);

        Self {
            title: posting.title.clone(),
            company: posting.company.clone(),
            function,
            level,
            location: posting.location_label(),
            remote: posting.remote_status(),
            url: posting.url.clone().unwrap_or_default(),
        }
    }
}
