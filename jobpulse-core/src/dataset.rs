//! Intermediate dataset file
//!
//! Classified postings are persisted as CSV between the scrape and the sync,
//! with the columns `Title, Company, Function, Level, Location, Remote, URL`.
//! On read, every row is passed through the normalizer again so that files
//! written by older rule revisions, or edited by hand, still only yield
//! canonical categories.

use serde::Deserialize;
use std::path::Path;

use crate::classify::classify_level;
use crate::domain::{ClassifiedPosting, RemoteStatus, SeniorityLevel};
use crate::error::{CoreError, Result};
use crate::normalize::CategoryNormalizer;

/// A dataset row as found on disk, before validation
#[derive(Debug, Deserialize)]
struct StoredRow {
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Company", default)]
    company: String,
    #[serde(rename = "Function", default)]
    function: String,
    #[serde(rename = "Level", default)]
    level: String,
    #[serde(rename = "Location", default)]
    location: String,
    #[serde(rename = "Remote", default)]
    remote: String,
    #[serde(rename = "URL", default)]
    url: Option<String>,
}

impl StoredRow {
    fn into_classified(self, normalizer: &CategoryNormalizer) -> ClassifiedPosting {
        let function = normalizer.normalize(Some(&self.function), &self.title);
        let level = self
            .level
            .parse::<SeniorityLevel>()
            .unwrap_or_else(|_| classify_level(&self.title));
        let remote = match self.remote.trim() {
            "Yes" => RemoteStatus::Yes,
            "Hybrid" => RemoteStatus::Hybrid,
            _ => RemoteStatus::No,
        };

        ClassifiedPosting {
            title: self.title,
            company: self.company,
            function,
            level,
            location: self.location,
            remote,
            url: self.url.unwrap_or_default(),
        }
    }
}

/// Write classified postings to a CSV file, replacing it
pub fn write_dataset(path: impl AsRef<Path>, rows: &[ClassifiedPosting]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(|e| CoreError::io(path.as_ref(), e))
}

/// Read a dataset file, re-normalizing every row
pub fn read_dataset(
    path: impl AsRef<Path>,
    normalizer: &CategoryNormalizer,
) -> Result<Vec<ClassifiedPosting>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut rows = Vec::new();
    for record in reader.deserialize::<StoredRow>() {
        rows.push(record?.into_classified(normalizer));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FunctionCategory;
    use std::io::Write;

    #[test]
    fn test_write_then_read_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.csv");

        let rows = vec![ClassifiedPosting {
            title: "Senior Data Analyst".to_string(),
            company: "Acme, Inc.".to_string(),
            function: FunctionCategory::DataAnalytics,
            level: SeniorityLevel::Senior,
            location: "Boston, MA (Hybrid)".to_string(),
            remote: RemoteStatus::Hybrid,
            url: "https://jobs.example.com/1".to_string(),
        }];

        write_dataset(&path, &rows).unwrap();

        let header = std::fs::read_to_string(&path).unwrap();
        assert!(header.starts_with("Title,Company,Function,Level,Location,Remote,URL"));

        let read = read_dataset(&path, &CategoryNormalizer::builtin()).unwrap();
        assert_eq!(read, rows);
    }

    #[test]
    fn test_read_dataset_renormalizes_legacy_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Title,Company,Function,Level,Location,Remote,URL").unwrap();
        writeln!(file, "Growth Lead,Acme,Growth,Director/Lead,Remote (Remote),Yes,").unwrap();
        writeln!(file, "Software Engineer,Globex,Mystery Dept,,NYC,No,").unwrap();
        writeln!(file, "Sales Director,Initech,,Unheard-of,NYC,maybe,").unwrap();
        file.flush().unwrap();

        let rows = read_dataset(file.path(), &CategoryNormalizer::builtin()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].function, FunctionCategory::Marketing);
        assert_eq!(rows[0].remote, RemoteStatus::Yes);
        assert_eq!(rows[0].url, "");
        assert_eq!(rows[1].function, FunctionCategory::Engineering);
        assert_eq!(rows[1].level, SeniorityLevel::MidLevel);
        assert_eq!(rows[2].function, FunctionCategory::Sales);
        assert_eq!(rows[2].level, SeniorityLevel::DirectorLead);
        assert_eq!(rows[2].remote, RemoteStatus::No);
    }
}
