//! Posting domain types
//!
//! A `Posting` is one job opening as fetched from the board, before any
//! classification. Board payloads are loosely typed, so decoding is done
//! field by field and tolerates missing or oddly-shaped values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::category::RemoteStatus;

/// Company name used when the board omits one
pub const UNKNOWN_COMPANY: &str = "Unknown";

/// Location label used when the board provides none
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// A job posting as fetched from the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub title: String,
    /// First upstream department label, if the board supplied one
    pub department: Option<String>,
    pub company: String,
    /// Free-text locations (`locations` on the board)
    pub locations: Vec<String>,
    /// Labels of structured locations (`normalizedLocations` on the board)
    pub normalized_locations: Vec<String>,
    pub remote: bool,
    pub hybrid: bool,
    pub url: Option<String>,
}

impl Posting {
    /// Decode a posting from a raw board entry
    ///
    /// Returns `None` for entries that are not JSON objects.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;

        let department = object
            .get("departments")
            .and_then(Value::as_array)
            .and_then(|departments| departments.first())
            .and_then(value_text)
            .filter(|label| !label.trim().is_empty());

        let company = string_field(object, "companyName")
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_COMPANY.to_string());

        let locations = object
            .get("locations")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(value_text).collect())
            .unwrap_or_default();

        let normalized_locations = object
            .get("normalizedLocations")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::Object(location) => Some(
                            string_field(location, "label")
                                .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
                        ),
                        other => value_text(other),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let url = string_field(object, "url")
            .filter(|url| !url.is_empty())
            .or_else(|| string_field(object, "applyUrl").filter(|url| !url.is_empty()));

        Some(Self {
            title: string_field(object, "title").unwrap_or_default(),
            department,
            company,
            locations,
            normalized_locations,
            remote: bool_field(object, "remote"),
            hybrid: bool_field(object, "hybrid"),
            url,
        })
    }

    pub fn remote_status(&self) -> RemoteStatus {
        RemoteStatus::from_flags(self.remote, self.hybrid)
    }

    /// Display location: first free-text location, else first structured
    /// label, else "Unknown", suffixed with the remote/hybrid marker
    pub fn location_label(&self) -> String {
        let base = self
            .locations
            .first()
            .or_else(|| self.normalized_locations.first())
            .map(String::as_str)
            .unwrap_or(UNKNOWN_LOCATION);

        match self.remote_status() {
            RemoteStatus::Yes => format!("{} (Remote)", base),
            RemoteStatus::Hybrid => format!("{} (Hybrid)", base),
            RemoteStatus::No => base.to_string(),
        }
    }
}

/// Postings decoded from a raw board payload
#[derive(Debug, Clone, Default)]
pub struct DecodedPostings {
    pub postings: Vec<Posting>,
    /// Entries dropped because they were not records
    pub skipped: usize,
}

/// Decode every raw board entry, skipping malformed ones
pub fn decode_postings(entries: &[Value]) -> DecodedPostings {
    let mut decoded = DecodedPostings::default();

    for entry in entries {
        match Posting::from_value(entry) {
            Some(posting) => decoded.postings.push(posting),
            None => decoded.skipped += 1,
        }
    }

    decoded
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(value_text)
}

fn bool_field(object: &Map<String, Value>, key: &str) -> bool {
    object.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Null => None,
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_posting() {
        let raw = json!({
            "title": "Senior Software Engineer",
            "departments": ["Engineering", "Platform"],
            "companyName": "Acme",
            "locations": ["New York, NY"],
            "remote": false,
            "hybrid": true,
            "url": "https://jobs.example.com/1"
        });

        let posting = Posting::from_value(&raw).unwrap();
        assert_eq!(posting.title, "Senior Software Engineer");
        assert_eq!(posting.department.as_deref(), Some("Engineering"));
        assert_eq!(posting.company, "Acme");
        assert_eq!(posting.remote_status(), RemoteStatus::Hybrid);
        assert_eq!(posting.location_label(), "New York, NY (Hybrid)");
        assert_eq!(posting.url.as_deref(), Some("https://jobs.example.com/1"));
    }

    #[test]
    fn test_decode_falls_back_to_normalized_locations_and_apply_url() {
        let raw = json!({
            "title": "Account Executive",
            "locations": [],
            "normalizedLocations": [{"label": "London, UK"}],
            "remote": true,
            "url": "",
            "applyUrl": "https://apply.example.com/2"
        });

        let posting = Posting::from_value(&raw).unwrap();
        assert_eq!(posting.company, UNKNOWN_COMPANY);
        assert_eq!(posting.department, None);
        assert_eq!(posting.location_label(), "London, UK (Remote)");
        assert_eq!(posting.url.as_deref(), Some("https://apply.example.com/2"));
    }

    #[test]
    fn test_decode_without_any_location() {
        let posting = Posting::from_value(&json!({"title": "Recruiter"})).unwrap();
        assert_eq!(posting.location_label(), UNKNOWN_LOCATION);
        assert_eq!(posting.remote_status(), RemoteStatus::No);
        assert_eq!(posting.url, None);
    }

    #[test]
    fn test_empty_department_is_absent() {
        let posting =
            Posting::from_value(&json!({"title": "Designer", "departments": ["  "]})).unwrap();
        assert_eq!(posting.department, None);
    }

    #[test]
    fn test_decode_postings_skips_non_records() {
        let entries = vec![
            json!({"title": "Engineer"}),
            json!("not a record"),
            json!(42),
            json!({"title": "Designer"}),
        ];

        let decoded = decode_postings(&entries);
        assert_eq!(decoded.postings.len(), 2);
        assert_eq!(decoded.skipped, 2);
    }
}
