//! CMS content endpoints: blog, FAQ, press

use std::sync::Arc;

use serde::Deserialize;

use tradedesk_core::prelude::*;
use tradedesk_core::{BlogPost, FaqItem, PressRelease};

use crate::client::ApiClient;

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Debug, Clone)]
pub struct CmsService {
    client: Arc<ApiClient>,
}

impl CmsService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn blog_posts(&self) -> Result<Vec<BlogPost>> {
        let response: ListResponse<BlogPost> = self.client.get("blog-posts", &[]).await?;
        Ok(response.items)
    }

    pub async fn faqs(&self) -> Result<Vec<FaqItem>> {
        let response: ListResponse<FaqItem> = self.client.get("faqs", &[]).await?;
        Ok(response.items)
    }

    pub async fn press_releases(&self) -> Result<Vec<PressRelease>> {
        let response: ListResponse<PressRelease> = self.client.get("press-releases", &[]).await?;
        Ok(response.items)
    }
}
