//! Back-office endpoints: moderation tables and dashboard stats

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use tradedesk_core::prelude::*;
use tradedesk_core::{AdminProduct, Buyer, CategoryStat, ListingStatus, SalesPoint, TopProduct};

use crate::client::ApiClient;

/// Parameters for the admin products table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminProductParams {
    pub limit: u32,
    pub offset: u32,
    pub status: Option<ListingStatus>,
}

impl AdminProductParams {
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
        if let Some(status) = self.status {
            query.push(("status", status.label().to_lowercase()));
        }
        query
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateStatusBody {
    status: ListingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct ListResponse<T> {
    #[serde(default)]
    items: Vec<T>,
}

#[derive(Debug, Clone)]
pub struct AdminService {
    client: Arc<ApiClient>,
}

impl AdminService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_products(&self, params: &AdminProductParams) -> Result<Vec<AdminProduct>> {
        let response: ListResponse<AdminProduct> = self
            .client
            .get("admin/products", &params.to_query())
            .await?;
        Ok(response.items)
    }

    /// Change a listing's moderation status, optionally with a reason shown
    /// to the supplier
    pub async fn update_product_status(
        &self,
        id: &str,
        status: ListingStatus,
        reason: Option<String>,
    ) -> Result<()> {
        let body = UpdateStatusBody { status, reason };
        self.client
            .put(&format!("admin/products/{id}/status"), &body)
            .await
    }

    pub async fn delete_product(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("admin/products/{id}")).await
    }

    pub async fn sales_data(&self, days: u32) -> Result<Vec<SalesPoint>> {
        let query = [("days", days.to_string())];
        let response: ListResponse<SalesPoint> =
            self.client.get("admin/stats/sales", &query).await?;
        Ok(response.items)
    }

    pub async fn category_stats(&self) -> Result<Vec<CategoryStat>> {
        let response: ListResponse<CategoryStat> =
            self.client.get("admin/stats/categories", &[]).await?;
        Ok(response.items)
    }

    pub async fn top_products(&self, limit: u32) -> Result<Vec<TopProduct>> {
        let query = [("limit", limit.to_string())];
        let response: ListResponse<TopProduct> =
            self.client.get("admin/stats/top-products", &query).await?;
        Ok(response.items)
    }

    pub async fn list_buyers(&self, limit: u32, offset: u32) -> Result<Vec<Buyer>> {
        let query = [
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        let response: ListResponse<Buyer> = self.client.get("admin/buyers", &query).await?;
        Ok(response.items)
    }
}
