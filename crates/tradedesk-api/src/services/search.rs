//! Unified search endpoint
//!
//! The backend returns heterogeneous products and suppliers; this service
//! flattens them into one tagged `SearchHit` list, plus a best-effort
//! category grouping derived from product-id prefixes (not a taxonomy
//! lookup).

use std::sync::Arc;

use serde::Deserialize;

use tradedesk_core::prelude::*;
use tradedesk_core::{HitKind, SearchHit};

use crate::client::ApiClient;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductResult {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    price: f64,
    currency: String,
    #[serde(default)]
    rating: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SupplierResult {
    id: String,
    company_name: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    verified: bool,
    #[serde(default)]
    rating: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<ProductResult>,
    #[serde(default)]
    suppliers: Vec<SupplierResult>,
    #[serde(default)]
    total: u32,
}

/// Flattened search outcome handed to the app
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub hits: Vec<SearchHit>,
    pub total: u32,
}

#[derive(Debug, Clone)]
pub struct SearchService {
    client: Arc<ApiClient>,
}

impl SearchService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Run a unified text search
    ///
    /// Callers are responsible for never submitting an empty query; the
    /// app's search controller enforces that no request is made for one.
    pub async fn search(&self, q: &str, limit: u32, offset: u32) -> Result<SearchResults> {
        let query = [
            ("q", q.to_string()),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        let response: SearchResponse = self.client.get("search", &query).await?;
        Ok(partition(response))
    }
}

/// Flatten the response into tagged hits: products, suppliers, then derived
/// category groups
fn partition(response: SearchResponse) -> SearchResults {
    let total = if response.total > 0 {
        response.total
    } else {
        (response.products.len() + response.suppliers.len()) as u32
    };

    let mut hits: Vec<SearchHit> = Vec::new();

    for p in &response.products {
        hits.push(SearchHit {
            id: p.id.clone(),
            kind: HitKind::Product,
            title: p.name.clone(),
            subtitle: (!p.description.is_empty()).then(|| p.description.clone()),
            price: Some(p.price),
            currency: Some(p.currency.clone()),
            rating: p.rating,
            verified: true,
        });
    }

    for s in &response.suppliers {
        hits.push(SearchHit {
            id: s.id.clone(),
            kind: HitKind::Supplier,
            title: s.company_name.clone(),
            subtitle: (!s.country.is_empty()).then(|| s.country.clone()),
            price: None,
            currency: None,
            rating: s.rating,
            verified: s.verified,
        });
    }

    hits.extend(derive_category_groups(&response.products));

    SearchResults { hits, total }
}

/// Group products by the prefix of their id (the segment before the first
/// `-`), one category hit per distinct prefix, in first-seen order
fn derive_category_groups(products: &[ProductResult]) -> Vec<SearchHit> {
    let mut seen: Vec<&str> = Vec::new();
    let mut groups = Vec::new();

    for p in products {
        if p.id.is_empty() {
            continue;
        }
        let prefix = p.id.split('-').next().unwrap_or(&p.id);
        if seen.contains(&prefix) {
            continue;
        }
        seen.push(prefix);
        groups.push(SearchHit {
            id: prefix.to_string(),
            kind: HitKind::Category,
            title: format!("Category {prefix}"),
            subtitle: None,
            price: None,
            currency: None,
            rating: None,
            verified: false,
        });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str) -> ProductResult {
        ProductResult {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price: 10.0,
            currency: "USD".to_string(),
            rating: Some(4.0),
        }
    }

    fn supplier(id: &str, company: &str) -> SupplierResult {
        SupplierResult {
            id: id.to_string(),
            company_name: company.to_string(),
            country: "DE".to_string(),
            verified: true,
            rating: None,
        }
    }

    #[test]
    fn test_partition_tags_products_then_suppliers() {
        let results = partition(SearchResponse {
            products: vec![product("elec-1", "Cable")],
            suppliers: vec![supplier("s-1", "Acme")],
            total: 2,
        });
        assert_eq!(results.total, 2);
        assert_eq!(results.hits[0].kind, HitKind::Product);
        assert_eq!(results.hits[1].kind, HitKind::Supplier);
    }

    #[test]
    fn test_category_groups_deduplicate_prefixes() {
        let results = partition(SearchResponse {
            products: vec![
                product("elec-1", "Cable"),
                product("elec-2", "Switch"),
                product("metal-9", "Pipe"),
            ],
            suppliers: vec![],
            total: 3,
        });
        let categories: Vec<&SearchHit> = results
            .hits
            .iter()
            .filter(|h| h.kind == HitKind::Category)
            .collect();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].id, "elec");
        assert_eq!(categories[1].id, "metal");
    }

    #[test]
    fn test_empty_response_yields_no_hits() {
        let results = partition(SearchResponse {
            products: vec![],
            suppliers: vec![],
            total: 0,
        });
        assert!(results.hits.is_empty());
        assert_eq!(results.total, 0);
    }

    #[test]
    fn test_missing_total_falls_back_to_counts() {
        let results = partition(SearchResponse {
            products: vec![product("elec-1", "Cable")],
            suppliers: vec![supplier("s-1", "Acme")],
            total: 0,
        });
        assert_eq!(results.total, 2);
    }

    #[test]
    fn test_search_response_parses_with_absent_fields() {
        let json = r#"{"products": [{"id": "p-1", "name": "Pipe", "price": 3.5, "currency": "USD"}]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.products.len(), 1);
        assert!(response.suppliers.is_empty());
    }
}
