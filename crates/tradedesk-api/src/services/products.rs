//! Storefront product endpoints

use std::sync::Arc;

use serde::Deserialize;

use tradedesk_core::prelude::*;
use tradedesk_core::Product;

use crate::client::ApiClient;

/// Parameters for listing products
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListParams {
    pub limit: u32,
    pub offset: u32,
    pub category_id: Option<String>,
    pub supplier_id: Option<String>,
}

impl ProductListParams {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }

    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        if let Some(ref category_id) = self.category_id {
            query.push(("categoryId", category_id.clone()));
        }
        if let Some(ref supplier_id) = self.supplier_id {
            query.push(("supplierId", supplier_id.clone()));
        }
        query
    }
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    items: Vec<Product>,
}

#[derive(Debug, Clone)]
pub struct ProductService {
    client: Arc<ApiClient>,
}

impl ProductService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List products with pagination and optional category/supplier filter
    pub async fn list(&self, params: &ProductListParams) -> Result<Vec<Product>> {
        let response: ListResponse = self.client.get("products", &params.to_query()).await?;
        Ok(response.items)
    }

    /// Fetch a single product by id
    pub async fn get(&self, id: &str) -> Result<Product> {
        self.client.get(&format!("products/{id}"), &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_includes_optional_filters_only_when_set() {
        let bare = ProductListParams::with_limit(20);
        assert_eq!(
            bare.to_query(),
            vec![("limit", "20".to_string()), ("offset", "0".to_string())]
        );

        let filtered = ProductListParams {
            limit: 20,
            offset: 40,
            category_id: Some("cat-metals".to_string()),
            supplier_id: None,
        };
        let query = filtered.to_query();
        assert!(query.contains(&("categoryId", "cat-metals".to_string())));
        assert!(!query.iter().any(|(k, _)| *k == "supplierId"));
    }
}
