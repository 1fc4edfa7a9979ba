//! Wire types for the job board and the table store APIs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Table store (Airtable)
// =============================================================================

/// A record as stored in a remote table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: String,
    #[serde(rename = "createdTime", default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// One page of `GET /v0/{base}/{table}`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ListRecordsResponse {
    #[serde(default)]
    pub records: Vec<StoredRecord>,
    /// Cursor for the next page; absent on the last page
    pub offset: Option<String>,
}

/// A record to create
#[derive(Debug, Clone, Serialize)]
pub(crate) struct NewRecord {
    pub fields: Map<String, Value>,
}

/// Body of `POST /v0/{base}/{table}`
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CreateRecordsRequest {
    pub records: Vec<NewRecord>,
    /// Let the store coerce values into single-select options
    pub typecast: bool,
}

/// Response of `POST /v0/{base}/{table}`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreateRecordsResponse {
    #[serde(default)]
    pub records: Vec<StoredRecord>,
}

/// Response of `DELETE /v0/{base}/{table}`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DeleteRecordsResponse {
    #[serde(default)]
    pub records: Vec<DeletedRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DeletedRecord {
    pub id: String,
    #[serde(default)]
    pub deleted: bool,
}

// =============================================================================
// Job board search
// =============================================================================

/// Body of the board search request
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SearchRequest<'a> {
    pub board: BoardRef<'a>,
    pub grouped: bool,
    pub meta: SearchMeta,
    pub query: SearchQuery,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BoardRef<'a> {
    pub id: &'a str,
    pub is_parent: bool,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SearchMeta {
    pub size: u32,
    /// Pagination cursor echoed back from the previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchQuery {
    pub promote_featured: bool,
}

/// One page of board search results
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    /// Raw postings; kept untyped since entries vary in shape
    #[serde(default)]
    pub jobs: Value,
    /// Total number of postings on the board
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub sequence: Option<Value>,
}

impl SearchPage {
    /// Entries of the page; empty when `jobs` is missing or not a list
    pub fn entries(&self) -> &[Value] {
        self.jobs.as_array().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Cursor for the next page, if the board returned one
    pub fn next_sequence(&self) -> Option<&Value> {
        self.meta
            .as_ref()
            .and_then(|meta| meta.sequence.as_ref())
            .filter(|sequence| !sequence.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_request_shape() {
        let request = SearchRequest {
            board: BoardRef {
                id: "example-board",
                is_parent: true,
            },
            grouped: false,
            meta: SearchMeta {
                size: 100,
                sequence: None,
            },
            query: SearchQuery {
                promote_featured: true,
            },
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "board": {"id": "example-board", "isParent": true},
                "grouped": false,
                "meta": {"size": 100},
                "query": {"promoteFeatured": true}
            })
        );
    }

    #[test]
    fn test_search_page_tolerates_odd_payloads() {
        let page: SearchPage = serde_json::from_value(json!({"jobs": {"oops": 1}})).unwrap();
        assert!(page.entries().is_empty());
        assert_eq!(page.total, 0);
        assert!(page.next_sequence().is_none());

        let page: SearchPage = serde_json::from_value(json!({
            "jobs": [{"title": "Engineer"}],
            "total": 250,
            "meta": {"sequence": "abc"}
        }))
        .unwrap();
        assert_eq!(page.entries().len(), 1);
        assert_eq!(page.next_sequence(), Some(&json!("abc")));
    }

    #[test]
    fn test_list_response_parses_records() {
        let page: ListRecordsResponse = serde_json::from_value(json!({
            "records": [
                {
                    "id": "rec1",
                    "createdTime": "2026-10-12T09:30:00.000Z",
                    "fields": {"Company": "Acme"}
                },
                {"id": "rec2", "fields": {}}
            ],
            "offset": "itr123"
        }))
        .unwrap();

        assert_eq!(page.records.len(), 2);
        assert_eq!(page.records[0].fields["Company"], json!("Acme"));
        assert!(page.records[0].created_time.is_some());
        assert_eq!(page.offset.as_deref(), Some("itr123"));
    }
}
