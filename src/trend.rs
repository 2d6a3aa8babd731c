//! Daily sentiment trend aggregation.
//!
//! The trend is derived on demand from scored rows and never persisted as
//! its own entity: group by the calendar date of `published_at`, mean the
//! polarity, sort ascending by date.

use crate::models::ScoredArticle;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Mean polarity of all articles published on one calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySentiment {
    pub date: NaiveDate,
    pub mean_polarity: f64,
    pub article_count: usize,
}

/// Group scored articles by publication date and average their polarity.
///
/// Returns one entry per distinct date, ascending.
pub fn daily_sentiment_trend(articles: &[ScoredArticle]) -> Vec<DailySentiment> {
    let mut by_date: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for scored in articles {
        let entry = by_date
            .entry(scored.article.published_at.date())
            .or_insert((0.0, 0));
        entry.0 += scored.sentiment_polarity;
        entry.1 += 1;
    }
    by_date
        .into_iter()
        .map(|(date, (sum, count))| DailySentiment {
            date,
            mean_polarity: sum / count as f64,
            article_count: count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;

    fn scored(date: &str, hour: u32, polarity: f64) -> ScoredArticle {
        let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        ScoredArticle {
            article: Article {
                published_at: day.and_hms_opt(hour, 0, 0).unwrap(),
                title: None,
                description: None,
                content: None,
                url: None,
                source: None,
                category: None,
            },
            sentiment_polarity: polarity,
            sentiment_subjectivity: 0.5,
        }
    }

    #[test]
    fn test_empty_input_empty_trend() {
        assert!(daily_sentiment_trend(&[]).is_empty());
    }

    #[test]
    fn test_groups_by_calendar_date_and_averages() {
        let rows = vec![
            scored("2025-07-19", 9, 0.8),
            scored("2025-07-19", 21, 0.2),
            scored("2025-07-20", 12, -0.4),
        ];
        let trend = daily_sentiment_trend(&rows);
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].date.to_string(), "2025-07-19");
        assert!((trend[0].mean_polarity - 0.5).abs() < 1e-9);
        assert_eq!(trend[0].article_count, 2);
        assert_eq!(trend[1].date.to_string(), "2025-07-20");
        assert!((trend[1].mean_polarity + 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_dates_ascend() {
        let rows = vec![
            scored("2025-07-20", 8, 0.1),
            scored("2025-07-18", 8, 0.2),
            scored("2025-07-19", 8, 0.3),
        ];
        let trend = daily_sentiment_trend(&rows);
        let dates: Vec<String> = trend.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-07-18", "2025-07-19", "2025-07-20"]);
    }
}
