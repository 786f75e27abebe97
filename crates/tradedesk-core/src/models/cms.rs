//! CMS content records: blog posts, FAQ entries, press releases

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{Searchable, Sortable};

/// A published blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub author_name: String,
    #[serde(default)]
    pub author_role: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published_at: NaiveDate,
    /// Estimated read time in minutes
    pub read_time: u16,
    pub views: u64,
    pub likes: u64,
    #[serde(default)]
    pub featured: bool,
}

impl Searchable for BlogPost {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.excerpt.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl Sortable for BlogPost {
    fn sort_date(&self) -> Option<DateTime<Utc>> {
        self.published_at
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
    }

    fn sort_views(&self) -> Option<u64> {
        Some(self.views)
    }
}

/// A frequently asked question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    #[serde(default)]
    pub popular: bool,
}

impl Searchable for FaqItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.question, &self.answer]
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl Sortable for FaqItem {}

/// A press release entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PressRelease {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub category: String,
    pub published_at: NaiveDate,
}

impl Searchable for PressRelease {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.summary]
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl Sortable for PressRelease {
    fn sort_date(&self) -> Option<DateTime<Utc>> {
        self.published_at
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, tags: &[&str]) -> BlogPost {
        BlogPost {
            id: "post-1".to_string(),
            title: title.to_string(),
            excerpt: "excerpt".to_string(),
            author_name: "A. Author".to_string(),
            author_role: String::new(),
            category: "Trading".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            published_at: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            read_time: 5,
            views: 100,
            likes: 10,
            featured: false,
        }
    }

    #[test]
    fn test_blog_search_covers_tags() {
        let p = post("Trade tips", &["MOQ", "Negotiation"]);
        assert!(crate::query::matches(&p, "negoti", "all"));
    }

    #[test]
    fn test_blog_post_date_only_wire_format() {
        let p = post("Trade tips", &[]);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["publishedAt"], "2024-01-15");
    }
}
