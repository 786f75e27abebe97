//! Supplier directory endpoints

use std::sync::Arc;

use serde::Deserialize;

use tradedesk_core::prelude::*;
use tradedesk_core::{Supplier, SupplierPatch};

use crate::client::ApiClient;

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    items: Vec<Supplier>,
}

#[derive(Debug, Clone)]
pub struct SupplierService {
    client: Arc<ApiClient>,
}

impl SupplierService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, limit: u32, offset: u32) -> Result<Vec<Supplier>> {
        let query = [
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        let response: ListResponse = self.client.get("suppliers", &query).await?;
        Ok(response.items)
    }

    pub async fn get(&self, id: &str) -> Result<Supplier> {
        self.client.get(&format!("suppliers/{id}"), &[]).await
    }

    /// Apply a partial update; unset fields are left untouched server-side
    pub async fn update(&self, id: &str, patch: &SupplierPatch) -> Result<()> {
        self.client.put(&format!("suppliers/{id}"), patch).await
    }
}
