//! Text cleaning and sentiment scoring.
//!
//! Scoring is split into a fixed cleaning pre-pass and a pluggable model:
//!
//! - [`clean_text`]: normalizes raw article text (lowercase, strip bracketed
//!   annotations, URLs, HTML-like tags, punctuation, collapse whitespace)
//! - [`SentimentModel`]: minimal trait `text -> (polarity, subjectivity)` so
//!   the lexicon backend can be swapped without touching the cleaning or
//!   batch logic
//! - [`add_sentiment_columns`]: batch enrichment of normalized article rows
//!
//! An empty cleaned string scores exactly `(0.0, 0.0)` — a defined neutral
//! default, not an error.

use crate::models::{Article, ScoredArticle};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

pub mod lexicon;

pub use lexicon::LexiconModel;

static BRACKETED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]").unwrap());
static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").unwrap());
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>+").unwrap());
static PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r##"[!"#$%&'()*+,\-./:;<=>?@\[\\\]^_`{|}~]"##).unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize raw article text for scoring.
///
/// Lowercases, strips `[...]` annotations, URLs, `<...>` tags, and a fixed
/// punctuation set, then collapses newlines and run-on whitespace to single
/// spaces and trims. `None` cleans to an empty string.
pub fn clean_text(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let text = raw.to_lowercase();
    let text = BRACKETED_RE.replace_all(&text, "");
    let text = URL_RE.replace_all(&text, "");
    let text = TAG_RE.replace_all(&text, "");
    let text = PUNCT_RE.replace_all(&text, "");
    let text = text.replace('\n', " ");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}

/// Trait for sentiment scoring backends.
///
/// Implementors receive already-cleaned, non-empty text and return
/// `(polarity, subjectivity)` with polarity in `[-1.0, 1.0]` and
/// subjectivity in `[0.0, 1.0]`. Any equivalent lexicon or statistical
/// analyzer satisfies the contract.
pub trait SentimentModel {
    /// Score cleaned text. Must respect the output ranges.
    fn score(&self, text: &str) -> (f64, f64);
}

/// Clean `raw` and score it with `model`.
///
/// The neutral-on-empty rule lives here: if cleaning yields an empty
/// string (including `None` input), the result is exactly `(0.0, 0.0)`
/// and the model is never consulted.
pub fn analyze<M: SentimentModel + ?Sized>(model: &M, raw: Option<&str>) -> (f64, f64) {
    let cleaned = clean_text(raw);
    if cleaned.is_empty() {
        return (0.0, 0.0);
    }
    model.score(&cleaned)
}

/// Which article text field to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColumn {
    Title,
    Description,
    Content,
}

impl TextColumn {
    /// Resolve a column name; `None` for anything outside the fixed schema.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "title" => Some(TextColumn::Title),
            "description" => Some(TextColumn::Description),
            "content" => Some(TextColumn::Content),
            _ => None,
        }
    }

    /// The named text field of an article.
    pub fn get<'a>(&self, article: &'a Article) -> Option<&'a str> {
        match self {
            TextColumn::Title => article.title.as_deref(),
            TextColumn::Description => article.description.as_deref(),
            TextColumn::Content => article.content.as_deref(),
        }
    }
}

/// Score every row from the named text column.
///
/// An unrecognized column name is logged and falls back to `description`;
/// this never raises. Row count and order are preserved, article fields
/// pass through unchanged, and exactly two fields are appended per row.
pub fn add_sentiment_columns<M: SentimentModel + ?Sized>(
    articles: Vec<Article>,
    text_column: &str,
    model: &M,
) -> Vec<ScoredArticle> {
    let column = match TextColumn::parse(text_column) {
        Some(column) => column,
        None => {
            warn!(
                text_column,
                "Text column not in schema; falling back to 'description'"
            );
            TextColumn::Description
        }
    };

    info!(column = ?column, rows = articles.len(), "Analyzing sentiment");
    let scored: Vec<ScoredArticle> = articles
        .into_iter()
        .map(|article| {
            let (sentiment_polarity, sentiment_subjectivity) =
                analyze(model, column.get(&article));
            ScoredArticle {
                article,
                sentiment_polarity,
                sentiment_subjectivity,
            }
        })
        .collect();
    info!(rows = scored.len(), "Sentiment analysis complete");
    scored
}
