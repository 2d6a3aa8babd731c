//! Command-line interface definitions.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The API key can be provided via flag or the `NEWSDATA_API_KEY`
//! environment variable.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the news sentiment trend pipeline.
///
/// # Examples
///
/// ```sh
/// # Fetch 60 days of coverage and score it
/// news_sentiment_trend "Kochi metro expansion" --api-key pub_xxx
///
/// # Narrower run against a fixed end date
/// news_sentiment_trend "Artificial Intelligence India" \
///     --end-date 2025-07-20 --lookback-days 30 --page-limit 3 --max-articles 30
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Free-text search query; also determines the output filename
    pub query: String,

    /// Output directory for the CSV file
    #[arg(short, long, default_value = "data")]
    pub output_dir: PathBuf,

    /// newsdata.io API key
    #[arg(long, env = "NEWSDATA_API_KEY")]
    pub api_key: String,

    /// Base URL of the news-search API
    #[arg(long, default_value = "https://newsdata.io/api/1/")]
    pub base_url: String,

    /// Two-letter language filter, passed through to the API unvalidated
    #[arg(short, long, default_value = "en")]
    pub language: String,

    /// Two-letter country filter, passed through to the API unvalidated
    #[arg(short, long, default_value = "in")]
    pub country: String,

    /// Maximum number of pages to fetch
    #[arg(long, default_value_t = 5)]
    pub page_limit: usize,

    /// Stop fetching once this many articles have accumulated
    #[arg(long, default_value_t = 50)]
    pub max_articles: usize,

    /// Days of coverage before the end date
    #[arg(long, default_value_t = 60)]
    pub lookback_days: i64,

    /// End of the date window (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Article text field to score (title, description, or content)
    #[arg(long, default_value = "description")]
    pub text_column: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["news_sentiment_trend", "metro expansion", "--api-key", "k"]);
        assert_eq!(cli.query, "metro expansion");
        assert_eq!(cli.output_dir.to_str().unwrap(), "data");
        assert_eq!(cli.language, "en");
        assert_eq!(cli.country, "in");
        assert_eq!(cli.page_limit, 5);
        assert_eq!(cli.max_articles, 50);
        assert_eq!(cli.lookback_days, 60);
        assert!(cli.end_date.is_none());
        assert_eq!(cli.text_column, "description");
    }

    #[test]
    fn test_end_date_parses() {
        let cli = Cli::parse_from([
            "news_sentiment_trend",
            "q",
            "--api-key",
            "k",
            "--end-date",
            "2025-07-20",
        ]);
        assert_eq!(cli.end_date.unwrap().to_string(), "2025-07-20");
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from([
            "news_sentiment_trend",
            "q",
            "--api-key",
            "k",
            "-o",
            "/tmp/out",
            "-l",
            "fr",
            "-c",
            "fr",
        ]);
        assert_eq!(cli.output_dir.to_str().unwrap(), "/tmp/out");
        assert_eq!(cli.language, "fr");
        assert_eq!(cli.country, "fr");
    }
}
