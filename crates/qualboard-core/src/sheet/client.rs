//! HTTP client for the published-sheet CSV export.
//!
//! One unauthenticated GET per load, no retries. A failed or slow fetch
//! is answered by the seed fallback, so the client's only job is to
//! return the body text or a `LoadError` quickly.

use std::time::Duration;

use anyhow::Result;
use reqwest::{header, Client};
use tracing::debug;

use super::LoadError;

/// Published CSV export of the qualification sheet.
pub const SHEET_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vT9_zU6E9FM_tBZ_APPRU11yCU9zEoCMjbyppEL0Z10I4JFr2RoKg5-6GB53WHOD7FZbXrKjdUdcs9z/pub?gid=0&single=true&output=csv";

/// HTTP request timeout in seconds.
/// Published-sheet exports answer in well under a second; anything past
/// 30s is better served by the seed fallback than by a spinner.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for fetching the sheet CSV.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct SheetClient {
    client: Client,
}

impl SheetClient {
    /// Create a new sheet client with the request timeout applied.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch the CSV body from `url`.
    ///
    /// Requests `Cache-Control: no-store` so an edited sheet shows up on
    /// the next load rather than whenever an intermediary cache expires.
    pub async fn fetch_csv(&self, url: &str) -> Result<String, LoadError> {
        debug!(url, "Fetching sheet CSV");

        let response = self
            .client
            .get(url)
            .header(header::CACHE_CONTROL, "no-store")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LoadError::from_status(response.status()));
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "Sheet CSV received");
        Ok(body)
    }
}
