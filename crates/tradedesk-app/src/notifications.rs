//! Notification store shared by the header panel and the notifications page
//!
//! One read-through cache of the actor's notifications. Every mutation goes
//! to the backend first and is followed by a full refetch; the store never
//! patches entries locally.

use tradedesk_core::query::{self, FilterState};
use tradedesk_core::{unread_count, Notification};

use crate::message::NotificationOp;

/// How many notifications one fetch pulls
pub const FETCH_LIMIT: u32 = 100;

/// What activating a notification should do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Unread: mark it read remotely (refetch follows), then maybe navigate
    MarkRead {
        op: NotificationOp,
        action_url: Option<String>,
    },
    /// Already read: just follow its link, if any
    Follow { action_url: Option<String> },
}

#[derive(Debug, Clone, Default)]
pub struct NotificationStore {
    pub items: Vec<Notification>,
    /// Read-status tab + text filter over the cached list
    pub filter: FilterState,
    pub selected: usize,
    pub loading: bool,
    pub loaded: bool,
    /// A mutation is in flight; panel actions are disabled until the
    /// refetch lands
    pub mutating: bool,
    pub error: Option<String>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn set_items(&mut self, items: Vec<Notification>) {
        self.items = items;
        self.loading = false;
        self.loaded = true;
        self.mutating = false;
        self.error = None;
        let len = self.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.loading = false;
        self.loaded = true;
        self.mutating = false;
        self.error = Some(message);
    }

    /// Derived count over the full cached list, not the filtered view
    pub fn unread_count(&self) -> usize {
        unread_count(&self.items)
    }

    /// Filtered view for the page (status tab + text query)
    pub fn visible(&self) -> Vec<&Notification> {
        query::filter(&self.items, &self.filter)
    }

    pub fn selected_item(&self) -> Option<&Notification> {
        self.visible().into_iter().nth(self.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Cycle the status tab: all -> unread -> read -> all
    pub fn cycle_status_filter(&mut self) {
        self.filter.category = match self.filter.category.as_str() {
            "unread" => "read".to_string(),
            "read" => tradedesk_core::CATEGORY_ALL.to_string(),
            _ => "unread".to_string(),
        };
        self.selected = 0;
    }

    /// What pressing Enter on the selection should do
    ///
    /// Returns `None` while a mutation is in flight or nothing is selected.
    pub fn activate_selected(&self) -> Option<Activation> {
        if self.mutating {
            return None;
        }
        let item = self.selected_item()?;
        if item.is_read {
            Some(Activation::Follow {
                action_url: item.action_url.clone(),
            })
        } else {
            Some(Activation::MarkRead {
                op: NotificationOp::MarkRead(item.id.clone()),
                action_url: item.action_url.clone(),
            })
        }
    }

    /// Delete op for the selection, if actions are enabled
    pub fn delete_selected(&self) -> Option<NotificationOp> {
        if self.mutating {
            return None;
        }
        self.selected_item()
            .map(|item| NotificationOp::Delete(item.id.clone()))
    }

    /// Mark-all op; a no-op when nothing is unread
    pub fn mark_all(&self) -> Option<NotificationOp> {
        if self.mutating || self.unread_count() == 0 {
            return None;
        }
        Some(NotificationOp::MarkAllRead)
    }

    pub fn begin_mutation(&mut self) {
        self.mutating = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tradedesk_core::{NotificationKind, NotificationPriority};

    fn notification(id: &str, is_read: bool, action_url: Option<&str>) -> Notification {
        Notification {
            id: id.to_string(),
            kind: NotificationKind::Business,
            priority: NotificationPriority::Medium,
            title: format!("title {id}"),
            message: "message".to_string(),
            is_read,
            action_url: action_url.map(|u| u.to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_unread_count_is_a_predicate_count() {
        // Property 5, including the empty list
        let mut store = NotificationStore::new();
        assert_eq!(store.unread_count(), 0);

        store.set_items(vec![
            notification("n1", false, None),
            notification("n2", true, None),
            notification("n3", false, None),
        ]);
        assert_eq!(store.unread_count(), 2);
    }

    #[test]
    fn test_unread_count_ignores_status_filter() {
        let mut store = NotificationStore::new();
        store.set_items(vec![
            notification("n1", false, None),
            notification("n2", true, None),
        ]);
        store.cycle_status_filter(); // unread tab
        assert_eq!(store.visible().len(), 1);
        assert_eq!(store.unread_count(), 1);
        store.cycle_status_filter(); // read tab
        assert_eq!(store.visible().len(), 1);
        assert_eq!(store.unread_count(), 1);
    }

    #[test]
    fn test_activate_unread_marks_read_and_carries_url() {
        let mut store = NotificationStore::new();
        store.set_items(vec![notification("n1", false, Some("/blog"))]);
        match store.activate_selected() {
            Some(Activation::MarkRead { op, action_url }) => {
                assert_eq!(op, NotificationOp::MarkRead("n1".to_string()));
                assert_eq!(action_url.as_deref(), Some("/blog"));
            }
            other => panic!("expected MarkRead, got {other:?}"),
        }
    }

    #[test]
    fn test_activate_read_only_follows() {
        let mut store = NotificationStore::new();
        store.set_items(vec![notification("n1", true, None)]);
        assert_eq!(
            store.activate_selected(),
            Some(Activation::Follow { action_url: None })
        );
    }

    #[test]
    fn test_actions_disabled_while_mutating() {
        let mut store = NotificationStore::new();
        store.set_items(vec![notification("n1", false, None)]);
        store.begin_mutation();
        assert_eq!(store.activate_selected(), None);
        assert_eq!(store.delete_selected(), None);
        assert_eq!(store.mark_all(), None);
    }

    #[test]
    fn test_mark_all_is_noop_when_everything_read() {
        let mut store = NotificationStore::new();
        store.set_items(vec![notification("n1", true, None)]);
        assert_eq!(store.mark_all(), None);
    }

    #[test]
    fn test_refetch_clears_mutating_flag() {
        let mut store = NotificationStore::new();
        store.set_items(vec![notification("n1", false, None)]);
        store.begin_mutation();
        store.set_items(vec![notification("n1", true, None)]);
        assert!(!store.mutating);
        assert_eq!(store.unread_count(), 0);
    }
}
