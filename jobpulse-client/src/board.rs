//! Job board search client

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::handle_response;
use crate::types::{BoardRef, SearchMeta, SearchPage, SearchQuery, SearchRequest};

/// Postings requested per page
pub const PAGE_SIZE: u32 = 100;

/// Pause between consecutive page requests
pub const PAGE_DELAY: Duration = Duration::from_millis(500);

/// First backoff delay after a transient failure; doubles on every retry
pub const RETRY_DELAY: Duration = Duration::from_millis(500);

const MAX_ATTEMPTS: u32 = 5;
const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

/// HTTP client for a job board search endpoint
#[derive(Debug, Clone)]
pub struct BoardClient {
    /// Search endpoint
    url: String,
    /// Board identifier sent with every request
    board_id: String,
    /// HTTP client instance
    client: Client,
    page_delay: Duration,
    retry_delay: Duration,
}

impl BoardClient {
    /// Create a new board client
    ///
    /// # Arguments
    /// * `url` - The search endpoint
    /// * `board_id` - The board identifier
    pub fn new(url: impl Into<String>, board_id: impl Into<String>) -> Self {
        Self::with_client(url, board_id, Client::new())
    }

    /// Create a new board client with a custom HTTP client
    pub fn with_client(
        url: impl Into<String>,
        board_id: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            url: url.into(),
            board_id: board_id.into(),
            client,
            page_delay: PAGE_DELAY,
            retry_delay: RETRY_DELAY,
        }
    }

    /// Override the pause between pages
    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    /// Override the first backoff delay
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Get the search endpoint
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the board identifier
    pub fn board_id(&self) -> &str {
        &self.board_id
    }

    /// Fetch a single page of results
    ///
    /// # Arguments
    /// * `sequence` - Cursor from the previous page, `None` for the first page
    pub async fn fetch_page(&self, sequence: Option<&Value>) -> Result<SearchPage> {
        let body = SearchRequest {
            board: BoardRef {
                id: &self.board_id,
                is_parent: true,
            },
            grouped: false,
            meta: SearchMeta {
                size: PAGE_SIZE,
                sequence: sequence.cloned(),
            },
            query: SearchQuery {
                promote_featured: true,
            },
        };

        let response = self.client.post(&self.url).json(&body).send().await?;

        handle_response(response).await
    }

    /// Fetch a page, retrying transient failures with exponential backoff
    async fn fetch_page_with_retry(&self, sequence: Option<&Value>) -> Result<SearchPage> {
        let mut attempt = 0;
        let mut delay = self.retry_delay;

        loop {
            attempt += 1;

            match self.fetch_page(sequence).await {
                Ok(page) => {
                    if attempt > 1 {
                        info!("Fetched board page after {} attempt(s)", attempt);
                    }
                    return Ok(page);
                }
                Err(e) if e.is_transient() && attempt < MAX_ATTEMPTS => {
                    warn!(
                        "Board request failed (attempt {}/{}): {}",
                        attempt, MAX_ATTEMPTS, e
                    );
                    warn!("Retrying in {} ms...", delay.as_millis());

                    tokio::time::sleep(delay).await;

                    // Exponential backoff with cap
                    delay = (delay * 2).min(MAX_RETRY_DELAY);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Fetch every posting on the board
    ///
    /// Pages are requested one after another until the board reports no
    /// further cursor, the cursor stops moving, or `total` entries have been
    /// collected. Entries are returned raw; decoding happens downstream.
    pub async fn fetch_all_jobs(&self) -> Result<Vec<Value>> {
        let mut jobs: Vec<Value> = Vec::new();
        let mut sequence: Option<Value> = None;
        let mut page_number = 0u32;

        loop {
            page_number += 1;
            let page = self.fetch_page_with_retry(sequence.as_ref()).await?;
            let entries = page.entries();
            jobs.extend_from_slice(entries);

            debug!(
                page = page_number,
                fetched = entries.len(),
                collected = jobs.len(),
                total = page.total,
                "Fetched board page"
            );

            let next = page.next_sequence().cloned();
            let more = should_continue(
                jobs.len(),
                entries.len(),
                page.total,
                sequence.as_ref(),
                next.as_ref(),
            );
            if !more {
                break;
            }
            sequence = next;

            tokio::time::sleep(self.page_delay).await;
        }

        info!(pages = page_number, jobs = jobs.len(), "Finished fetching board");

        Ok(jobs)
    }
}

/// Decide whether another page should be requested
fn should_continue(
    collected: usize,
    page_len: usize,
    total: u64,
    current: Option<&Value>,
    next: Option<&Value>,
) -> bool {
    if page_len == 0 || collected as u64 >= total {
        return false;
    }
    match next {
        None => false,
        Some(next) => current != Some(next),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    /// Serves `responses` in order, one connection each, and counts requests
    async fn serve(responses: Vec<(u16, String)>) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/search", listener.local_addr().unwrap());
        let served = Arc::new(AtomicUsize::new(0));

        let counter = served.clone();
        tokio::spawn(async move {
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().await.unwrap();
                read_request(&mut stream).await;
                counter.fetch_add(1, Ordering::SeqCst);

                let response = format!(
                    "HTTP/1.1 {status} Canned\r\n\
                     content-type: application/json\r\n\
                     content-length: {}\r\n\
                     connection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).await.unwrap();
                stream.shutdown().await.ok();
            }
        });

        (url, served)
    }

    async fn read_request(stream: &mut TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    return;
                }
            }
        }
    }

    fn page(titles: &[&str], total: u64, sequence: Option<&str>) -> (u16, String) {
        let jobs: Vec<Value> = titles.iter().map(|title| json!({"title": title})).collect();
        let body = json!({"jobs": jobs, "total": total, "meta": {"sequence": sequence}});
        (200, body.to_string())
    }

    fn fast_client(url: &str) -> BoardClient {
        BoardClient::new(url, "example-board")
            .with_page_delay(Duration::ZERO)
            .with_retry_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_fetch_all_jobs_follows_cursor() {
        let (url, served) = serve(vec![
            page(&["Engineer", "Designer"], 3, Some("seq-1")),
            page(&["Recruiter"], 3, Some("seq-2")),
        ])
        .await;

        let jobs = fast_client(&url).fetch_all_jobs().await.unwrap();

        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[2]["title"], json!("Recruiter"));
        assert_eq!(served.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_transient_failures_are_retried() {
        let (url, served) = serve(vec![
            (503, "unavailable".to_string()),
            (429, "slow down".to_string()),
            page(&["Engineer"], 1, None),
        ])
        .await;

        let jobs = fast_client(&url).fetch_all_jobs().await.unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(served.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retries_stop_after_max_attempts() {
        let failures = (0..MAX_ATTEMPTS)
            .map(|_| (502, "bad gateway".to_string()))
            .collect();
        let (url, served) = serve(failures).await;

        let err = fast_client(&url).fetch_all_jobs().await.unwrap_err();

        assert!(matches!(err, ClientError::ApiError { status: 502, .. }));
        assert_eq!(served.load(Ordering::SeqCst), MAX_ATTEMPTS as usize);
    }

    #[tokio::test]
    async fn test_client_errors_are_not_retried() {
        let (url, served) = serve(vec![
            (400, "bad board".to_string()),
            page(&["Engineer"], 1, None),
        ])
        .await;

        let err = fast_client(&url).fetch_all_jobs().await.unwrap_err();

        assert!(matches!(err, ClientError::ApiError { status: 400, .. }));
        assert_eq!(served.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_board_client_creation() {
        let client = BoardClient::new("https://boards.example.com/api/search", "example-board");
        assert_eq!(client.url(), "https://boards.example.com/api/search");
        assert_eq!(client.board_id(), "example-board");
        assert_eq!(client.page_delay, PAGE_DELAY);
        assert_eq!(client.retry_delay, RETRY_DELAY);
    }

    #[test]
    fn test_continues_while_cursor_moves() {
        let first = json!("seq-1");
        assert!(should_continue(100, 100, 250, None, Some(&first)));

        let second = json!("seq-2");
        assert!(should_continue(200, 100, 250, Some(&first), Some(&second)));
    }

    #[test]
    fn test_stops_when_total_reached() {
        let next = json!("seq-3");
        assert!(!should_continue(250, 50, 250, None, Some(&next)));
    }

    #[test]
    fn test_stops_without_cursor() {
        assert!(!should_continue(100, 100, 250, None, None));
    }

    #[test]
    fn test_stops_when_cursor_repeats() {
        let same = json!("seq-1");
        assert!(!should_continue(200, 100, 500, Some(&same), Some(&same)));
    }

    #[test]
    fn test_stops_on_empty_page() {
        let next = json!("seq-2");
        assert!(!should_continue(100, 0, 500, None, Some(&next)));
    }
}
