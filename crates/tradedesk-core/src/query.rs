//! Generic list-query engine: text filter, category filter, sort, paginate
//!
//! Every list surface (blog, FAQ, press, supplier directory, admin tables,
//! search tabs) filters through this one module instead of re-implementing
//! the predicate per page. Collections are small (tens to low hundreds of
//! items), so everything here is recomputed synchronously on each render
//! with no memoization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel category value that bypasses the category predicate.
///
/// Matched case-insensitively so both `"all"` and `"All"` behave the same.
pub const CATEGORY_ALL: &str = "all";

/// Returns true when `category` is the bypass sentinel
pub fn is_all_sentinel(category: &str) -> bool {
    category.eq_ignore_ascii_case(CATEGORY_ALL)
}

/// An item that can be matched by the text/category filter
pub trait Searchable {
    /// Fields the free-text query is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// Category/status tag compared for equality against the selected category
    fn category(&self) -> &str;
}

/// Optional sort accessors for [`SortKey`]
///
/// Items return `None` for keys that do not apply to them; those items keep
/// their relative source order and sort after items that have the key.
pub trait Sortable {
    fn sort_date(&self) -> Option<DateTime<Utc>> {
        None
    }
    fn sort_price(&self) -> Option<f64> {
        None
    }
    fn sort_rating(&self) -> Option<f64> {
        None
    }
    fn sort_views(&self) -> Option<u64> {
        None
    }
}

/// Client-side sort order applied after filtering, as an independent step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keep source order (server relevance)
    #[default]
    Relevance,
    DateDesc,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    ViewsDesc,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::DateDesc => "Newest",
            SortKey::PriceAsc => "Price: low to high",
            SortKey::PriceDesc => "Price: high to low",
            SortKey::RatingDesc => "Top rated",
            SortKey::ViewsDesc => "Most viewed",
        }
    }

    /// Cycle to the next sort order (for the sort dropdown shortcut)
    pub fn next(self) -> Self {
        match self {
            SortKey::Relevance => SortKey::DateDesc,
            SortKey::DateDesc => SortKey::PriceAsc,
            SortKey::PriceAsc => SortKey::PriceDesc,
            SortKey::PriceDesc => SortKey::RatingDesc,
            SortKey::RatingDesc => SortKey::ViewsDesc,
            SortKey::ViewsDesc => SortKey::Relevance,
        }
    }
}

/// Filter state for a list page
///
/// Initialized to defaults on page entry and never persisted across
/// navigation. The search page seeds `query` from the submitted search
/// instead.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub query: String,
    pub category: String,
    pub sort: SortKey,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: CATEGORY_ALL.to_string(),
            sort: SortKey::default(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when either predicate would exclude anything
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !is_all_sentinel(&self.category)
    }

    /// Reset query to empty and category to the sentinel ("Clear Filters")
    pub fn clear(&mut self) {
        self.query.clear();
        self.category = CATEGORY_ALL.to_string();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }
}

/// Does `item` match the free-text query and selected category?
///
/// An empty query matches everything. The query is a case-insensitive
/// substring match against any of the item's search fields. Category is an
/// exact tag comparison unless the sentinel bypasses it; an unknown category
/// simply matches nothing.
pub fn matches<T: Searchable>(item: &T, query: &str, category: &str) -> bool {
    if !is_all_sentinel(category) && item.category() != category {
        return false;
    }
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Filter a source collection, preserving source order
pub fn filter<'a, T: Searchable>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches(*item, &state.query, &state.category))
        .collect()
}

/// Sort a filtered view in place; stable with respect to source order
pub fn sort<T: Sortable>(items: &mut [&T], key: SortKey) {
    match key {
        SortKey::Relevance => {}
        SortKey::DateDesc => sort_desc(items, |i| i.sort_date()),
        SortKey::PriceAsc => sort_asc_f64(items, |i| i.sort_price()),
        SortKey::PriceDesc => sort_desc_f64(items, |i| i.sort_price()),
        SortKey::RatingDesc => sort_desc_f64(items, |i| i.sort_rating()),
        SortKey::ViewsDesc => sort_desc(items, |i| i.sort_views()),
    }
}

/// Filter then sort in one call
pub fn apply<'a, T: Searchable + Sortable>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    let mut view = filter(items, state);
    sort(&mut view, state.sort);
    view
}

/// Window a list by limit/offset; out-of-range offsets yield an empty slice
pub fn paginate<T>(items: &[T], limit: usize, offset: usize) -> &[T] {
    if offset >= items.len() {
        return &[];
    }
    let end = (offset + limit).min(items.len());
    &items[offset..end]
}

fn sort_desc<T, K: Ord>(items: &mut [&T], get: impl Fn(&T) -> Option<K>) {
    // Items without the key sort after items with it, keeping source order
    items.sort_by(|a, b| match (get(a), get(b)) {
        (Some(ka), Some(kb)) => kb.cmp(&ka),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

fn sort_asc_f64<T>(items: &mut [&T], get: impl Fn(&T) -> Option<f64>) {
    items.sort_by(|a, b| match (get(a), get(b)) {
        (Some(ka), Some(kb)) => ka.total_cmp(&kb),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

fn sort_desc_f64<T>(items: &mut [&T], get: impl Fn(&T) -> Option<f64>) {
    items.sort_by(|a, b| match (get(a), get(b)) {
        (Some(ka), Some(kb)) => kb.total_cmp(&ka),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Post {
        title: String,
        excerpt: String,
        category: String,
        views: u64,
        price: Option<f64>,
    }

    impl Post {
        fn new(title: &str, excerpt: &str, category: &str, views: u64) -> Self {
            Self {
                title: title.to_string(),
                excerpt: excerpt.to_string(),
                category: category.to_string(),
                views,
                price: None,
            }
        }

        fn with_price(mut self, price: f64) -> Self {
            self.price = Some(price);
            self
        }
    }

    impl Searchable for Post {
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.title, &self.excerpt]
        }

        fn category(&self) -> &str {
            &self.category
        }
    }

    impl Sortable for Post {
        fn sort_views(&self) -> Option<u64> {
            Some(self.views)
        }

        fn sort_price(&self) -> Option<f64> {
            self.price
        }
    }

    fn sample_posts() -> Vec<Post> {
        vec![
            Post::new("Negotiating MOQ", "minimum order quantities", "Trading", 890),
            Post::new("Supplier trust", "international suppliers", "Supply Chain", 980),
            Post::new("Payment methods", "secure B2B payments", "Finance", 2100),
            Post::new("Future of B2B", "e-commerce trends", "Trading", 1520),
        ]
    }

    #[test]
    fn test_all_sentinel_is_case_insensitive() {
        assert!(is_all_sentinel("all"));
        assert!(is_all_sentinel("All"));
        assert!(is_all_sentinel("ALL"));
        assert!(!is_all_sentinel("Trading"));
    }

    #[test]
    fn test_all_category_equals_search_only_filter() {
        // Property 1: sentinel category makes the category predicate a no-op
        let posts = sample_posts();
        let mut with_all = FilterState::new();
        with_all.query = "b2b".to_string();
        with_all.category = "All".to_string();

        let search_only: Vec<&Post> = posts
            .iter()
            .filter(|p| {
                p.search_fields()
                    .iter()
                    .any(|f| f.to_lowercase().contains("b2b"))
            })
            .collect();

        assert_eq!(filter(&posts, &with_all), search_only);
    }

    #[test]
    fn test_own_category_includes_item() {
        // Property 2: filtering by an item's own category keeps it
        let posts = sample_posts();
        for post in &posts {
            let state = FilterState {
                query: String::new(),
                category: post.category.clone(),
                sort: SortKey::Relevance,
            };
            assert!(filter(&posts, &state).contains(&post));
        }
    }

    #[test]
    fn test_empty_query_is_identity() {
        // Property 3: empty query returns the category-filtered source unchanged
        let posts = sample_posts();
        let state = FilterState::new();
        let all: Vec<&Post> = posts.iter().collect();
        assert_eq!(filter(&posts, &state), all);
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let posts = sample_posts();
        let state = FilterState {
            query: String::new(),
            category: "Logistics".to_string(),
            sort: SortKey::Relevance,
        };
        assert!(filter(&posts, &state).is_empty());
    }

    #[test]
    fn test_query_match_is_case_insensitive_substring() {
        let posts = sample_posts();
        let mut state = FilterState::new();
        state.query = "SUPPLIER".to_string();
        let hits = filter(&posts, &state);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Supplier trust");
    }

    #[test]
    fn test_no_match_yields_empty_not_error() {
        let posts = sample_posts();
        let mut state = FilterState::new();
        state.query = "zzzzz".to_string();
        assert!(filter(&posts, &state).is_empty());
    }

    #[test]
    fn test_filter_preserves_source_order() {
        let posts = sample_posts();
        let mut state = FilterState::new();
        state.query = "e".to_string(); // matches several
        let hits = filter(&posts, &state);
        let titles: Vec<&str> = hits.iter().map(|p| p.title.as_str()).collect();
        let mut expected: Vec<&str> = posts
            .iter()
            .filter(|p| {
                p.search_fields()
                    .iter()
                    .any(|f| f.to_lowercase().contains('e'))
            })
            .map(|p| p.title.as_str())
            .collect();
        expected.retain(|t| titles.contains(t));
        assert_eq!(titles, expected);
    }

    #[test]
    fn test_clear_resets_query_and_category() {
        // Property 6 (state half): clear-filters resets both fields
        let mut state = FilterState {
            query: "steel".to_string(),
            category: "Trading".to_string(),
            sort: SortKey::ViewsDesc,
        };
        state.clear();
        assert_eq!(state.query, "");
        assert!(is_all_sentinel(&state.category));
        // Sort survives a clear; it is an independent step
        assert_eq!(state.sort, SortKey::ViewsDesc);
    }

    #[test]
    fn test_sort_views_desc() {
        let posts = sample_posts();
        let mut view: Vec<&Post> = posts.iter().collect();
        sort(&mut view, SortKey::ViewsDesc);
        let views: Vec<u64> = view.iter().map(|p| p.views).collect();
        assert_eq!(views, vec![2100, 1520, 980, 890]);
    }

    #[test]
    fn test_sort_price_missing_keys_sort_last() {
        let posts = vec![
            Post::new("no price", "", "Trading", 0),
            Post::new("cheap", "", "Trading", 0).with_price(5.0),
            Post::new("dear", "", "Trading", 0).with_price(50.0),
        ];
        let mut view: Vec<&Post> = posts.iter().collect();
        sort(&mut view, SortKey::PriceAsc);
        let titles: Vec<&str> = view.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["cheap", "dear", "no price"]);
    }

    #[test]
    fn test_sort_relevance_keeps_source_order() {
        let posts = sample_posts();
        let mut view: Vec<&Post> = posts.iter().collect();
        sort(&mut view, SortKey::Relevance);
        let titles: Vec<&str> = view.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles[0], "Negotiating MOQ");
        assert_eq!(titles[3], "Future of B2B");
    }

    #[test]
    fn test_paginate_window_and_bounds() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(paginate(&items, 3, 0), &[0, 1, 2]);
        assert_eq!(paginate(&items, 3, 9), &[9]);
        assert_eq!(paginate(&items, 3, 10), &[] as &[u32]);
        assert_eq!(paginate(&items, 100, 0).len(), 10);
    }

    #[test]
    fn test_sort_key_cycle_returns_to_start() {
        let mut key = SortKey::Relevance;
        for _ in 0..6 {
            key = key.next();
        }
        assert_eq!(key, SortKey::Relevance);
    }
}
