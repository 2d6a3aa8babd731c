//! CSV persistence for scored articles.
//!
//! Writes one row per scored article, in the order the collector returned
//! them, to `<output_dir>/<query slug>_news_sentiment.csv`. The output
//! schema is exactly the normalized article fields plus the two sentiment
//! columns; aggregation helpers never leak into the file, and no generation
//! timestamp is embedded, so identical inputs produce byte-identical files.

use crate::models::ScoredArticle;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Column order of the output file.
const HEADER: &[&str] = &[
    "date",
    "title",
    "description",
    "content",
    "url",
    "source",
    "category",
    "sentiment_polarity",
    "sentiment_subjectivity",
];

/// Derive the output filename from the query string.
///
/// Lowercased, spaces replaced by underscores, suffixed with
/// `_news_sentiment.csv`.
pub fn output_filename(query: &str) -> String {
    format!("{}_news_sentiment.csv", query.to_lowercase().replace(' ', "_"))
}

/// Write scored articles to a CSV file under `output_dir`.
///
/// Creates the directory if absent and returns the path of the written
/// file.
///
/// # Errors
///
/// Fails if the directory cannot be created or the file cannot be written.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir.display(), query = %query))]
pub fn write_scored_articles(
    articles: &[ScoredArticle],
    output_dir: &Path,
    query: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(output_filename(query));

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(HEADER)?;
    for scored in articles {
        let article = &scored.article;
        writer.write_record(&[
            article.published_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            article.title.clone().unwrap_or_default(),
            article.description.clone().unwrap_or_default(),
            article.content.clone().unwrap_or_default(),
            article.url.clone().unwrap_or_default(),
            article.source.clone().unwrap_or_default(),
            article.category.clone().unwrap_or_default(),
            scored.sentiment_polarity.to_string(),
            scored.sentiment_subjectivity.to_string(),
        ])?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = articles.len(), "Wrote scored articles CSV");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;
    use chrono::NaiveDate;

    fn scored(title: &str, polarity: f64) -> ScoredArticle {
        ScoredArticle {
            article: Article {
                published_at: NaiveDate::from_ymd_opt(2025, 7, 20)
                    .unwrap()
                    .and_hms_opt(10, 30, 0)
                    .unwrap(),
                title: Some(title.into()),
                description: Some("desc, with comma".into()),
                content: None,
                url: Some("https://example.com/a".into()),
                source: Some("example".into()),
                category: Some("top".into()),
            },
            sentiment_polarity: polarity,
            sentiment_subjectivity: 0.5,
        }
    }

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("news_sentiment_trend_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_output_filename_slug() {
        assert_eq!(
            output_filename("Kochi Metro Expansion"),
            "kochi_metro_expansion_news_sentiment.csv"
        );
    }

    #[test]
    fn test_writes_header_and_rows() {
        let dir = temp_dir("rows");
        let rows = vec![scored("first", 0.25), scored("second", -0.5)];
        let path = write_scored_articles(&rows, &dir, "Test Query").unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "test_query_news_sentiment.csv"
        );

        let body = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("date,title,description"));
        assert!(lines[0].ends_with("sentiment_polarity,sentiment_subjectivity"));
        assert!(lines[1].contains("first"));
        assert!(lines[1].contains("0.25"));
        // Comma-bearing field is quoted, not split.
        assert!(lines[1].contains("\"desc, with comma\""));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_output_is_idempotent() {
        let dir = temp_dir("idempotent");
        let rows = vec![scored("same", 0.1)];
        let first = write_scored_articles(&rows, &dir, "q").unwrap();
        let first_bytes = fs::read(&first).unwrap();
        let second = write_scored_articles(&rows, &dir, "q").unwrap();
        let second_bytes = fs::read(&second).unwrap();
        assert_eq!(first_bytes, second_bytes);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_empty_optional_fields_become_empty_cells() {
        let dir = temp_dir("empty");
        let mut row = scored("t", 0.0);
        row.article.description = None;
        row.article.category = None;
        let path = write_scored_articles(&[row], &dir, "q").unwrap();
        let body = fs::read_to_string(&path).unwrap();
        let data_line = body.lines().nth(1).unwrap();
        assert!(data_line.contains(",,"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
