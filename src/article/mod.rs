//! Article fetching and extraction.
//!
//! The fetcher downloads a page, pulls out its title and paragraph text and
//! emits an [`ArticleRecord`] as JSON. Classification fields are only present
//! when the caller supplies them explicitly.

pub mod extract;
pub mod fetch;

pub use extract::{extract_article, ExtractedArticle, UNKNOWN_TITLE};
pub use fetch::ArticleFetcher;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::{format_date, truncate_chars};

/// Caller-supplied classification attached to a fetched article
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub industry: Option<String>,
    pub impact_type: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub url: String,
    pub date: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl ArticleRecord {
    pub fn new(
        url: &str,
        date: NaiveDate,
        article: ExtractedArticle,
        content_limit: usize,
        classification: Classification,
    ) -> Self {
        Self {
            url: url.to_string(),
            date: format_date(date),
            title: article.title,
            content: truncate_chars(&article.content, content_limit).to_string(),
            industry: classification.industry,
            impact_type: classification.impact_type,
            summary: classification.summary,
        }
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(content: &str) -> ExtractedArticle {
        ExtractedArticle {
            title: "标题".to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn record_truncates_content_to_limit() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        let record = ArticleRecord::new(
            "http://x",
            date,
            article(&"字".repeat(1500)),
            1000,
            Classification::default(),
        );
        assert_eq!(record.content.chars().count(), 1000);
        assert_eq!(record.date, "2026-02-10");
    }

    #[test]
    fn json_omits_missing_classification() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        let record = ArticleRecord::new("http://x", date, article("正文"), 1000, Classification::default());
        let json = record.to_pretty_json().unwrap();
        assert!(json.contains("\"title\": \"标题\""));
        assert!(!json.contains("industry"));
        assert!(!json.contains("summary"));
    }

    #[test]
    fn json_keeps_explicit_classification() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        let classification = Classification {
            industry: Some("金融服务".to_string()),
            impact_type: Some("替代".to_string()),
            summary: None,
        };
        let record = ArticleRecord::new("http://x", date, article("正文"), 1000, classification);
        let value: serde_json::Value = serde_json::from_str(&record.to_pretty_json().unwrap()).unwrap();
        assert_eq!(value["industry"], "金融服务");
        assert_eq!(value["impact_type"], "替代");
        assert!(value.get("summary").is_none());
    }
}
