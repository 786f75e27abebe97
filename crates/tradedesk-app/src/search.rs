//! Unified search controller with a latest-request-wins guard
//!
//! Every dispatched search carries a sequence number from a monotonic
//! counter. A response is applied only if its sequence matches the latest
//! dispatched one, so a slow early response can never overwrite a newer
//! result set. There is no debounce and no cancellation of in-flight
//! requests; stale responses are simply discarded on arrival.

use tradedesk_api::SearchResults;
use tradedesk_core::query::{self, FilterState, SortKey};
use tradedesk_core::SearchHit;

/// How many hits one search pulls
pub const SEARCH_LIMIT: u32 = 50;

/// A search request the update loop should dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Text being edited in the search box
    pub input: String,
    /// Query of the most recently dispatched request
    pub submitted: String,
    pub hits: Vec<SearchHit>,
    pub total: u32,
    pub loading: bool,
    /// Result-type tab and sort over the fetched list
    pub filter: FilterState,
    pub selected: usize,
    latest_seq: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the current input
    ///
    /// An empty or whitespace-only query issues no request: the result list
    /// is cleared and `None` is returned. Otherwise the sequence counter
    /// advances and the caller dispatches the returned request.
    pub fn submit(&mut self) -> Option<SearchRequest> {
        let query = self.input.trim().to_string();
        if query.is_empty() {
            self.submitted.clear();
            self.hits.clear();
            self.total = 0;
            self.loading = false;
            self.selected = 0;
            return None;
        }

        self.latest_seq += 1;
        self.submitted = query.clone();
        self.loading = true;
        Some(SearchRequest {
            seq: self.latest_seq,
            query,
        })
    }

    /// Apply a response; stale sequences are discarded
    ///
    /// Returns whether the response was applied.
    pub fn accept(&mut self, seq: u64, results: SearchResults) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "discarding stale search response");
            return false;
        }
        self.hits = results.hits;
        self.total = results.total;
        self.loading = false;
        self.selected = 0;
        true
    }

    /// A request failed: clear results, log-only degradation
    ///
    /// Stale failures are ignored the same way stale successes are.
    pub fn fail(&mut self, seq: u64) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.hits.clear();
        self.total = 0;
        self.loading = false;
        self.selected = 0;
        true
    }

    /// Tab + sort view over the fetched hits
    pub fn visible(&self) -> Vec<&SearchHit> {
        query::apply(&self.hits, &self.filter)
    }

    pub fn visible_len(&self) -> usize {
        self.visible().len()
    }

    pub fn selected_hit(&self) -> Option<&SearchHit> {
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

    /// Cycle the result-type tab: all -> product -> supplier -> category
    pub fn cycle_tab(&mut self) {
        self.filter.category = match self.filter.category.as_str() {
            "product" => "supplier".to_string(),
            "supplier" => "category".to_string(),
            "category" => tradedesk_core::CATEGORY_ALL.to_string(),
            _ => "product".to_string(),
        };
        self.selected = 0;
    }

    /// Cycle the sort order between the wired options
    pub fn cycle_sort(&mut self) {
        self.filter.sort = match self.filter.sort {
            SortKey::Relevance => SortKey::PriceAsc,
            SortKey::PriceAsc => SortKey::PriceDesc,
            SortKey::PriceDesc => SortKey::RatingDesc,
            _ => SortKey::Relevance,
        };
        self.selected = 0;
    }
}
