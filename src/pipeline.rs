//! End-to-end pipeline orchestration.
//!
//! One run is strictly sequential: fetch all pages, score every row,
//! aggregate by day, write the CSV. No state persists across runs; given
//! identical upstream responses, two runs produce byte-identical output.

use crate::api::SearchApi;
use crate::collector::{Collector, FetchRequest};
use crate::models::ScoredArticle;
use crate::outputs;
use crate::sentiment::{self, SentimentModel};
use crate::trend::daily_sentiment_trend;
use chrono::NaiveDate;
use std::error::Error;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Parameters for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub query: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub language: String,
    pub country: String,
    pub page_limit: usize,
    pub max_articles: usize,
    /// Article text field to score; unknown names fall back to `description`.
    pub text_column: String,
    pub output_dir: PathBuf,
}

/// Run the full collect → score → aggregate → persist pipeline.
///
/// Returns the path of the written CSV, or `None` when the fetch produced
/// no data (clean early exit, no file written).
///
/// # Errors
///
/// Only the final persistence step can fail; collection and scoring
/// degrade to partial or empty results instead of erroring.
#[instrument(level = "info", skip_all, fields(query = %config.query))]
pub async fn run<A, M>(
    collector: &Collector<A>,
    model: &M,
    config: &PipelineConfig,
) -> Result<Option<PathBuf>, Box<dyn Error>>
where
    A: SearchApi,
    M: SentimentModel,
{
    info!(
        from = %config.from_date,
        to = %config.to_date,
        "Starting news data collection"
    );

    let articles = collector
        .fetch_articles(&FetchRequest {
            query: config.query.clone(),
            from_date: config.from_date,
            to_date: config.to_date,
            language: config.language.clone(),
            country: config.country.clone(),
            page_limit: config.page_limit,
            max_articles: config.max_articles,
        })
        .await;

    if articles.is_empty() {
        info!("No news data collected; exiting");
        return Ok(None);
    }
    info!(count = articles.len(), "Collected articles");
    for article in articles.iter().take(5) {
        debug!(
            date = %article.published_at,
            title = article.title.as_deref().unwrap_or(""),
            source = article.source.as_deref().unwrap_or(""),
            "Sample article"
        );
    }

    let scored = sentiment::add_sentiment_columns(articles, &config.text_column, model);

    log_trend_tail(&scored);

    let path = outputs::csv::write_scored_articles(&scored, &config.output_dir, &config.query)?;
    info!(path = %path.display(), "Processed data saved");
    Ok(Some(path))
}

/// Log the most recent days of the daily sentiment trend (up to 7).
fn log_trend_tail(scored: &[ScoredArticle]) {
    let trend = daily_sentiment_trend(scored);
    let tail_start = trend.len().saturating_sub(7);
    for day in &trend[tail_start..] {
        info!(
            date = %day.date,
            mean_polarity = %format!("{:.4}", day.mean_polarity),
            articles = day.article_count,
            "Daily sentiment"
        );
    }
}

/// Compute the collection window: `end_date` back `lookback_days` days.
pub fn date_window(end_date: NaiveDate, lookback_days: i64) -> (NaiveDate, NaiveDate) {
    (end_date - chrono::Duration::days(lookback_days), end_date)
}
