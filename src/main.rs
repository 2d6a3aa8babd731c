//! # News Sentiment Trend
//!
//! A one-shot batch pipeline that collects news articles matching a query
//! over a date window from a newsdata.io-style archive API, cleans and
//! scores each article's text for sentiment, and persists the enriched
//! rows to a CSV file alongside a logged daily sentiment trend.
//!
//! ## Usage
//!
//! ```sh
//! news_sentiment_trend "Kochi metro expansion" --api-key pub_xxx -o ./data
//! ```
//!
//! ## Architecture
//!
//! The application is a strictly sequential pipeline:
//! 1. **Collection**: Paginated fetch from the archive endpoint with a
//!    fixed 6-second throttle between pages
//! 2. **Scoring**: Text cleaning plus lexicon-based sentiment per article
//! 3. **Aggregation**: Mean polarity grouped by calendar day (logged)
//! 4. **Output**: CSV file named after the query
//!
//! Transport failures abort the fetch loop and the run continues with
//! whatever was collected; an empty collection exits cleanly without
//! writing a file.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod collector;
mod models;
mod outputs;
mod pipeline;
mod sentiment;
mod trend;

use api::NewsDataClient;
use cli::Cli;
use collector::Collector;
use pipeline::{PipelineConfig, date_window};
use sentiment::LexiconModel;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_sentiment_trend starting up");

    let args = Cli::parse();
    debug!(?args.query, ?args.output_dir, "Parsed CLI arguments");

    let end_date = args.end_date.unwrap_or_else(|| Local::now().date_naive());
    let (from_date, to_date) = date_window(end_date, args.lookback_days);

    let client = NewsDataClient::new(&args.base_url, &args.api_key)?;
    let collector = Collector::new(client);
    let model = LexiconModel::new();

    let config = PipelineConfig {
        query: args.query,
        from_date,
        to_date,
        language: args.language,
        country: args.country,
        page_limit: args.page_limit,
        max_articles: args.max_articles,
        text_column: args.text_column,
        output_dir: args.output_dir,
    };

    let written = pipeline::run(&collector, &model, &config).await?;

    let elapsed = start_time.elapsed();
    match written {
        Some(path) => info!(
            path = %path.display(),
            secs = elapsed.as_secs(),
            millis = elapsed.subsec_millis(),
            "Execution complete"
        ),
        None => info!(
            secs = elapsed.as_secs(),
            millis = elapsed.subsec_millis(),
            "Execution complete; no output written"
        ),
    }

    Ok(())
}
