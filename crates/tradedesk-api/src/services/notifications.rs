//! Notification endpoints for the current actor

use std::sync::Arc;

use serde::Deserialize;

use tradedesk_core::prelude::*;
use tradedesk_core::Notification;

use crate::client::ApiClient;

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    items: Vec<Notification>,
}

#[derive(Debug, Clone)]
pub struct NotificationService {
    client: Arc<ApiClient>,
}

impl NotificationService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn my_notifications(&self, limit: u32, offset: u32) -> Result<Vec<Notification>> {
        let query = [
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        let response: ListResponse = self.client.get("notifications", &query).await?;
        Ok(response.items)
    }

    pub async fn mark_read(&self, id: &str) -> Result<()> {
        self.client
            .patch::<()>(&format!("notifications/{id}/read"), None)
            .await
    }

    pub async fn mark_all_read(&self) -> Result<()> {
        self.client.post_empty("notifications/read-all").await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("notifications/{id}")).await
    }
}
