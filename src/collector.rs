//! Paginated article collection from the news-search archive.
//!
//! The collector drives a bounded fetch loop over the cursor-paginated
//! archive endpoint, throttling between pages with a fixed sleep, then
//! normalizes the raw records into [`Article`] rows.
//!
//! # Failure Policy
//!
//! Any transport failure or API-level error mid-loop aborts the loop and
//! returns whatever was accumulated so far. This is a deliberate best-effort
//! policy, not silent data loss: the condition is logged and callers must
//! handle a result set smaller than requested (including empty). Nothing in
//! this module raises.

use crate::api::{SearchApi, SearchParams};
use crate::models::Article;
use chrono::NaiveDate;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, instrument, warn};

/// Fixed delay between page fetches, a static throttle against the API's
/// rate limit. Not adaptive.
pub const PAGE_DELAY: Duration = Duration::from_secs(6);

/// One collection request: query, window, filters, and loop bounds.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub query: String,
    /// Start of the window; must not be after `to_date`.
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub language: String,
    pub country: String,
    /// Maximum pages to fetch. At least 1.
    pub page_limit: usize,
    /// Stop fetching more pages once this many articles have accumulated.
    pub max_articles: usize,
}

/// Drives the paginated fetch loop against a [`SearchApi`].
#[derive(Debug)]
pub struct Collector<A> {
    api: A,
    page_delay: Duration,
}

impl<A> Collector<A>
where
    A: SearchApi,
{
    /// Create a collector with the standard 6-second inter-page throttle.
    pub fn new(api: A) -> Self {
        Self {
            api,
            page_delay: PAGE_DELAY,
        }
    }

    /// Override the inter-page delay. Tests use `Duration::ZERO`.
    pub fn with_page_delay(api: A, page_delay: Duration) -> Self {
        Self { api, page_delay }
    }

    /// Fetch all pages for `request` and return the normalized articles.
    ///
    /// Loops up to `page_limit` pages, stopping early when `max_articles`
    /// accumulate, when a page comes back empty, or when the response
    /// carries no next-page cursor. Failures abort the loop and yield a
    /// partial (possibly empty) result.
    ///
    /// Every returned row has a valid `published_at`; raw records whose
    /// date fails to parse are dropped during normalization.
    #[instrument(level = "info", skip_all, fields(query = %request.query))]
    pub async fn fetch_articles(&self, request: &FetchRequest) -> Vec<Article> {
        let mut raw_articles = Vec::new();
        let mut next_page: Option<String> = None;
        let mut page_counter = 0usize;

        while page_counter < request.page_limit && raw_articles.len() < request.max_articles {
            let params = SearchParams {
                query: request.query.clone(),
                language: request.language.clone(),
                country: request.country.clone(),
                from_date: request.from_date,
                to_date: request.to_date,
                page: next_page.clone(),
            };

            let page = match self.api.search(&params).await {
                Ok(page) => page,
                Err(e) => {
                    warn!(error = %e, "Failed to fetch page; aborting with partial results");
                    break;
                }
            };

            if !page.is_success() {
                warn!(
                    status = %page.status,
                    message = page.message.as_deref().unwrap_or("Unknown error"),
                    "API reported failure; aborting with partial results"
                );
                break;
            }

            if page.results.is_empty() {
                info!("No more articles found in batch");
                break;
            }
            raw_articles.extend(page.results);

            info!(
                fetched = raw_articles.len(),
                total_results = page.total_results,
                page_token = next_page.as_deref().unwrap_or("initial"),
                "Fetched page of articles"
            );

            next_page = page.next_page;
            if next_page.is_none() {
                info!("No more pages available");
                break;
            }

            page_counter += 1;
            if page_counter < request.page_limit && raw_articles.len() < request.max_articles {
                sleep(self.page_delay).await;
            }
        }

        if raw_articles.is_empty() {
            info!(query = %request.query, "No articles found in the specified date range");
            return Vec::new();
        }

        let raw_count = raw_articles.len();
        let articles: Vec<Article> = raw_articles
            .into_iter()
            .filter_map(Article::from_raw)
            .collect();
        let dropped = raw_count - articles.len();
        if dropped > 0 {
            warn!(dropped, "Dropped records with missing or unparsable dates");
        }
        info!(count = articles.len(), "Normalized fetched articles");
        articles
    }
}
