//! Reusable fetched-list page state
//!
//! Blog, FAQ, press, supplier directory, and the admin tables are all the
//! same shape: fetch once on entry, hold the mapped view-models, derive the
//! visible subset through the core query engine on every render, keep a
//! selection cursor into that derived view.

use tradedesk_core::query::{self, FilterState, Searchable, Sortable};
use tradedesk_core::CATEGORY_ALL;

/// State for one fetched, filterable list
#[derive(Debug, Clone)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub filter: FilterState,
    /// Cursor into the *visible* (filtered) view
    pub selected: usize,
    pub loading: bool,
    /// At least one fetch completed (renders the empty state, not a spinner)
    pub loaded: bool,
    pub error: Option<String>,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filter: FilterState::default(),
            selected: 0,
            loading: false,
            loaded: false,
            error: None,
        }
    }
}

impl<T> ListPage<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Install a fetched collection, clamping the cursor
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.loaded = true;
        self.error = None;
        self.selected = 0;
    }

    /// Degrade to an empty list; the caller has already logged the error
    pub fn set_error(&mut self, message: String) {
        self.items.clear();
        self.loading = false;
        self.loaded = true;
        self.error = Some(message);
        self.selected = 0;
    }

    /// Reset query and category, keep the fetched items
    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.selected = 0;
    }
}

impl<T: Searchable + Sortable> ListPage<T> {
    /// The derived view: filtered then sorted, recomputed on every call
    pub fn visible(&self) -> Vec<&T> {
        query::apply(&self.items, &self.filter)
    }

    pub fn visible_len(&self) -> usize {
        self.visible().len()
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.visible().into_iter().nth(self.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Distinct category tags in source order, for the category cycler
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for item in &self.items {
            let category = item.category();
            if !seen.iter().any(|c| c == category) {
                seen.push(category.to_string());
            }
        }
        seen
    }

    /// Advance the category filter: all -> first tag -> ... -> last -> all
    pub fn cycle_category(&mut self) {
        let categories = self.categories();
        if categories.is_empty() {
            return;
        }
        let next = if query::is_all_sentinel(&self.filter.category) {
            Some(categories[0].clone())
        } else {
            match categories.iter().position(|c| *c == self.filter.category) {
                Some(i) if i + 1 < categories.len() => Some(categories[i + 1].clone()),
                _ => None,
            }
        };
        self.filter.category = next.unwrap_or_else(|| CATEGORY_ALL.to_string());
        self.selected = 0;
    }

    /// Cycle the sort order and reset the cursor
    pub fn cycle_sort(&mut self) {
        self.filter.sort = self.filter.sort.next();
        self.selected = 0;
    }

    /// Append to the query and reset the cursor
    pub fn push_query_char(&mut self, c: char) {
        self.filter.push_char(c);
        self.selected = 0;
    }

    pub fn pop_query_char(&mut self) {
        self.filter.pop_char();
        self.selected = 0;
    }

    /// The empty state is shown only after a completed load yields nothing
    pub fn shows_empty_state(&self) -> bool {
        self.loaded && !self.loading && self.visible().is_empty()
    }
}
