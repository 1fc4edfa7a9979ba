//! Jobpulse HTTP Clients
//!
//! Thin, typed HTTP clients for the two remote services the pipeline talks to:
//!
//! - [`BoardClient`]: the public job-board search API (cursor pagination)
//! - [`AirtableClient`]: the hosted table store (list, batch create, batch delete)
//!
//! Neither client retries on its own except the board client's page fetch;
//! table store errors are returned to the caller unchanged.
//!
//! # Example
//!
//! ```no_run
//! use jobpulse_client::AirtableClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = AirtableClient::new("patXXXXXXXX", "appXXXXXXXX");
//!
//!     let records = client.list_records("tblXXXXXXXX").await?;
//!     println!("{} records", records.len());
//!     Ok(())
//! }
//! ```

pub mod board;
pub mod error;
mod records;
pub mod types;

// Re-export commonly used types
pub use board::BoardClient;
pub use error::{ClientError, Result};
pub use records::MAX_RECORDS_PER_REQUEST;
pub use types::{SearchPage, StoredRecord};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Default Airtable REST endpoint
pub const AIRTABLE_API_URL: &str = "https://api.airtable.com/v0";

/// HTTP client for one Airtable base
///
/// Record operations are grouped in the `records` module:
/// - `list_records`: full read of a table, following pagination
/// - `create_records`: batch insert (at most 10 per call)
/// - `delete_records`: batch delete (at most 10 per call)
#[derive(Debug, Clone)]
pub struct AirtableClient {
    /// API root (e.g., "https://api.airtable.com/v0")
    base_url: String,
    /// Base identifier (e.g., "appXXXXXXXX")
    base_id: String,
    /// Personal access token
    token: String,
    /// HTTP client instance
    client: Client,
}

impl AirtableClient {
    /// Create a new client for a base
    ///
    /// # Arguments
    /// * `token` - Personal access token
    /// * `base_id` - The base identifier
    ///
    /// # Example
    /// ```
    /// use jobpulse_client::AirtableClient;
    ///
    /// let client = AirtableClient::new("patXXXXXXXX", "appXXXXXXXX");
    /// assert_eq!(client.base_id(), "appXXXXXXXX");
    /// ```
    pub fn new(token: impl Into<String>, base_id: impl Into<String>) -> Self {
        Self::with_client(AIRTABLE_API_URL, token, base_id, Client::new())
    }

    /// Create a new client with a custom API root and HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, or to
    /// point the client at a local stand-in for the API.
    ///
    /// # Example
    /// ```
    /// use jobpulse_client::AirtableClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = AirtableClient::with_client(
    ///     "http://localhost:8080/v0",
    ///     "patXXXXXXXX",
    ///     "appXXXXXXXX",
    ///     http_client,
    /// );
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        token: impl Into<String>,
        base_id: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            base_id: base_id.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the API root
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the base identifier
    pub fn base_id(&self) -> &str {
        &self.base_id
    }

    /// URL of a table within the base
    fn table_url(&self, table_id: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.base_id, table_id)
    }
}

// =============================================================================
// Response Handlers
// =============================================================================

/// Check the status code and deserialize the JSON body
///
/// Non-success responses become `ClientError::ApiError` carrying the body
/// text as the message.
pub(crate) async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(status.as_u16(), error_text));
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
}
