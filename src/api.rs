//! News-search endpoint client.
//!
//! This module wraps the newsdata.io-style `archive` endpoint behind a small
//! trait so the collector's pagination loop is unit-testable against a mock
//! without network access.
//!
//! # Architecture
//!
//! - [`SearchApi`]: core trait exposing one operation, a single page fetch
//! - [`SearchParams`]: the request filters for one page
//! - [`NewsDataClient`]: reqwest-backed implementation with a fixed
//!   15-second per-request timeout
//!
//! # Failure Surface
//!
//! Connection errors, timeouts, non-2xx statuses, and malformed JSON all
//! come back as errors from [`SearchApi::search`]. A 429 rate-limit
//! response is not special-cased into a retry; the caller aborts its loop
//! and keeps whatever it already accumulated.

use crate::models::SearchResponse;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use std::error::Error;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// Per-request timeout for the archive endpoint.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Filters for one archive search request.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Free-text query, e.g. `"Kochi metro expansion"`.
    pub query: String,
    /// Two-letter language filter, passed through unvalidated.
    pub language: String,
    /// Two-letter country filter, passed through unvalidated.
    pub country: String,
    /// Start of the date window (inclusive).
    pub from_date: NaiveDate,
    /// End of the date window (inclusive).
    pub to_date: NaiveDate,
    /// Opaque page cursor from the previous response; `None` on the first call.
    pub page: Option<String>,
}

/// Trait for fetching one page of search results.
///
/// Implementors send the request and return the parsed page. This
/// abstraction keeps the pagination logic independent of the transport,
/// so tests can script responses without a server.
pub trait SearchApi {
    /// Fetch a single page of results matching `params`.
    async fn search(&self, params: &SearchParams) -> Result<SearchResponse, Box<dyn Error>>;
}

/// reqwest-backed client for a newsdata.io-compatible archive endpoint.
#[derive(Debug, Clone)]
pub struct NewsDataClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl NewsDataClient {
    /// Build a client for the given base URL (e.g. `https://newsdata.io/api/1/`).
    ///
    /// # Errors
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, Box<dyn Error>> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        // Trailing slash matters: Url::join treats "api/1" and "api/1/" differently.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)?;
        Ok(Self {
            http,
            base_url,
            api_key: api_key.to_string(),
        })
    }
}

impl SearchApi for NewsDataClient {
    #[instrument(level = "info", skip_all, fields(query = %params.query, page = ?params.page))]
    async fn search(&self, params: &SearchParams) -> Result<SearchResponse, Box<dyn Error>> {
        let url = self.base_url.join("archive")?;

        let mut query: Vec<(&str, String)> = vec![
            ("apikey", self.api_key.clone()),
            ("q", params.query.clone()),
            ("language", params.language.clone()),
            ("country", params.country.clone()),
            ("from", params.from_date.format("%Y-%m-%d").to_string()),
            ("to", params.to_date.format("%Y-%m-%d").to_string()),
        ];
        if let Some(ref page) = params.page {
            query.push(("page", page.clone()));
        }

        let response = self.http.get(url).query(&query).send().await?;
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            // Same abort path as any other failure; the limitation is known.
            warn!("Rate limit hit (HTTP 429); wait before making more requests");
        }
        let response = response.error_for_status()?;

        let page: SearchResponse = response.json().await?;
        debug!(
            status = %page.status,
            results = page.results.len(),
            total_results = page.total_results,
            has_next = page.next_page.is_some(),
            "Archive page received"
        );
        Ok(page)
    }
}
