//! Data models for the news-search wire format and the normalized article rows.
//!
//! This module defines the core data structures used throughout the application:
//! - [`SearchResponse`] / [`RawArticle`]: the newsdata.io-style archive API payload
//! - [`Article`]: a normalized article row with a guaranteed-valid publication date
//! - [`ScoredArticle`]: an [`Article`] enriched with sentiment scores
//!
//! The wire models tolerate missing fields everywhere (`#[serde(default)]`);
//! normalization is where rows with unusable dates get dropped.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// One page of results from the news-search archive endpoint.
///
/// # Wire Format
///
/// ```json
/// {
///   "status": "success",
///   "totalResults": 123,
///   "results": [ { "pubDate": "...", "title": "...", ... } ],
///   "nextPage": "opaque-cursor"
/// }
/// ```
///
/// On failure the API returns `status != "success"` and a `message` field
/// describing the problem.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// `"success"` on a good response; anything else is an API-level error.
    #[serde(default)]
    pub status: String,
    /// The article records in this page.
    #[serde(default)]
    pub results: Vec<RawArticle>,
    /// Total matching articles across all pages, as reported by the API.
    #[serde(default, rename = "totalResults")]
    pub total_results: u64,
    /// Opaque cursor for the next page; absent when the result set is exhausted.
    #[serde(default, rename = "nextPage")]
    pub next_page: Option<String>,
    /// Error detail when `status` is not `"success"`.
    #[serde(default)]
    pub message: Option<String>,
}

impl SearchResponse {
    /// Whether the API reported this page as a success.
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// A raw article record exactly as the archive endpoint returns it.
///
/// Every field is optional: upstream regularly omits `description`,
/// `content`, or `source_name`, and that must never fail deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticle {
    /// Publication date string, usually `YYYY-MM-DD HH:MM:SS`.
    #[serde(default, rename = "pubDate")]
    pub pub_date: Option<String>,
    /// Article headline.
    #[serde(default)]
    pub title: Option<String>,
    /// Short summary or teaser text.
    #[serde(default)]
    pub description: Option<String>,
    /// Full article body, when the plan exposes it.
    #[serde(default)]
    pub content: Option<String>,
    /// Link to the article.
    #[serde(default, rename = "link")]
    pub url: Option<String>,
    /// Publisher name.
    #[serde(default, rename = "source_name")]
    pub source: Option<String>,
    /// Category, either a plain string or a list of strings on the wire.
    #[serde(default)]
    pub category: Option<serde_json::Value>,
}

/// A normalized article row.
///
/// Invariant: `published_at` is always a successfully parsed timestamp.
/// Records whose date is missing or unparsable never become an `Article`;
/// see [`Article::from_raw`]. All other fields stay optional and the field
/// set is fixed regardless of what the upstream API returned.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// Parsed publication timestamp. Never invalid by construction.
    pub published_at: NaiveDateTime,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    pub source: Option<String>,
    /// Category passed through unchanged (list values joined with `", "`).
    pub category: Option<String>,
}

impl Article {
    /// Normalize a raw API record into an [`Article`].
    ///
    /// Returns `None` when the publication date is absent or fails to
    /// parse; the caller drops such rows. Everything else is backfilled as
    /// `None` so column presence is guaranteed downstream.
    pub fn from_raw(raw: RawArticle) -> Option<Self> {
        let published_at = raw.pub_date.as_deref().and_then(parse_pub_date)?;
        Some(Article {
            published_at,
            title: raw.title,
            description: raw.description,
            content: raw.content,
            url: raw.url,
            source: raw.source,
            category: raw.category.as_ref().and_then(flatten_category),
        })
    }
}

/// An [`Article`] plus its sentiment scores. Computed once, immutable after.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredArticle {
    pub article: Article,
    /// Signed sentiment, -1.0 (most negative) to 1.0 (most positive).
    pub sentiment_polarity: f64,
    /// 0.0 (fully factual) to 1.0 (fully opinion-based).
    pub sentiment_subjectivity: f64,
}

/// Parse the API's publication date string.
///
/// The archive endpoint emits `YYYY-MM-DD HH:MM:SS`; RFC 3339 and a bare
/// date are accepted as fallbacks. Anything else is a parse failure and
/// the row gets dropped.
pub fn parse_pub_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    None
}

/// Flatten the wire `category` value into a display string.
///
/// newsdata.io sends either `"top"` or `["technology", "business"]`;
/// lists are joined with `", "` so the value survives a CSV cell.
fn flatten_category(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_pub_date_api_format() {
        let dt = parse_pub_date("2025-07-20 10:30:00").unwrap();
        assert_eq!(dt.to_string(), "2025-07-20 10:30:00");
    }

    #[test]
    fn test_parse_pub_date_rfc3339() {
        let dt = parse_pub_date("2025-07-20T10:30:00Z").unwrap();
        assert_eq!(dt.to_string(), "2025-07-20 10:30:00");
    }

    #[test]
    fn test_parse_pub_date_bare_date() {
        let dt = parse_pub_date("2025-07-20").unwrap();
        assert_eq!(dt.to_string(), "2025-07-20 00:00:00");
    }

    #[test]
    fn test_parse_pub_date_garbage() {
        assert!(parse_pub_date("not a date").is_none());
        assert!(parse_pub_date("").is_none());
    }

    #[test]
    fn test_from_raw_drops_missing_date() {
        let raw = RawArticle {
            title: Some("headline".into()),
            ..Default::default()
        };
        assert!(Article::from_raw(raw).is_none());
    }

    #[test]
    fn test_from_raw_backfills_missing_fields() {
        let raw = RawArticle {
            pub_date: Some("2025-07-20 10:30:00".into()),
            title: Some("headline".into()),
            ..Default::default()
        };
        let article = Article::from_raw(raw).unwrap();
        assert_eq!(article.title.as_deref(), Some("headline"));
        assert!(article.description.is_none());
        assert!(article.source.is_none());
    }

    #[test]
    fn test_category_string_and_list() {
        let mut raw = RawArticle {
            pub_date: Some("2025-07-20 10:30:00".into()),
            category: Some(json!("top")),
            ..Default::default()
        };
        assert_eq!(
            Article::from_raw(raw.clone()).unwrap().category.as_deref(),
            Some("top")
        );

        raw.category = Some(json!(["technology", "business"]));
        assert_eq!(
            Article::from_raw(raw).unwrap().category.as_deref(),
            Some("technology, business")
        );
    }

    #[test]
    fn test_search_response_tolerates_sparse_payload() {
        let response: SearchResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(response.is_success());
        assert!(response.results.is_empty());
        assert!(response.next_page.is_none());
    }
}
