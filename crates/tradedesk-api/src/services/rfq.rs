//! Request-for-quote endpoints

use std::sync::Arc;

use serde::Deserialize;

use tradedesk_core::prelude::*;
use tradedesk_core::{CreateRfq, Rfq};

use crate::client::ApiClient;

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    items: Vec<Rfq>,
}

#[derive(Debug, Clone)]
pub struct RfqService {
    client: Arc<ApiClient>,
}

impl RfqService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Submit a new request-for-quote; returns the created record
    pub async fn create(&self, payload: &CreateRfq) -> Result<Rfq> {
        self.client.post("rfqs", payload).await
    }

    /// List the current buyer's requests
    pub async fn my_rfqs(&self, limit: u32, offset: u32) -> Result<Vec<Rfq>> {
        let query = [
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        let response: ListResponse = self.client.get("rfqs", &query).await?;
        Ok(response.items)
    }
}
