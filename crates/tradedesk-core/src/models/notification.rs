//! Notification records for the current actor

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::Searchable;

/// What produced the notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    System,
    Business,
    Interaction,
    Promotional,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::System => "System",
            NotificationKind::Business => "Business",
            NotificationKind::Interaction => "Interaction",
            NotificationKind::Promotional => "Promotional",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl NotificationPriority {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationPriority::Low => "Low",
            NotificationPriority::Medium => "Medium",
            NotificationPriority::High => "High",
            NotificationPriority::Critical => "Critical",
        }
    }
}

/// A server-owned notification; the client caches and refetches, it never
/// invents local state for these
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub priority: NotificationPriority,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    #[serde(default)]
    pub action_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Read-status tag used by the page filter tabs
    pub fn status_tag(&self) -> &'static str {
        if self.is_read {
            "read"
        } else {
            "unread"
        }
    }
}

impl Searchable for Notification {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.message]
    }

    fn category(&self) -> &str {
        self.status_tag()
    }
}

/// Count of unread notifications in a list
///
/// Derived on demand from the in-memory list; never stored separately.
pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.is_read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: &str, is_read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            kind: NotificationKind::Business,
            priority: NotificationPriority::Medium,
            title: "New RFQ response".to_string(),
            message: "A supplier replied to your request".to_string(),
            is_read,
            action_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_unread_count_matches_predicate() {
        // Property 5: unread count equals the is_read predicate count
        let items = vec![
            notification("n1", false),
            notification("n2", true),
            notification("n3", false),
        ];
        assert_eq!(unread_count(&items), 2);
    }

    #[test]
    fn test_unread_count_empty_list() {
        assert_eq!(unread_count(&[]), 0);
    }

    #[test]
    fn test_status_tag() {
        assert_eq!(notification("n1", false).status_tag(), "unread");
        assert_eq!(notification("n1", true).status_tag(), "read");
    }

    #[test]
    fn test_kind_wire_name_is_type() {
        let n = notification("n1", false);
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["type"], "business");
        assert_eq!(json["isRead"], false);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(NotificationPriority::Critical > NotificationPriority::High);
        assert!(NotificationPriority::Medium > NotificationPriority::Low);
    }
}
