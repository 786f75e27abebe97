//! The marketplace service seam
//!
//! `MarketplaceApi` is the one trait the app crate dispatches remote calls
//! through. The real implementation bundles the typed services over a
//! shared [`ApiClient`]; tests substitute an in-memory stub.

use std::sync::Arc;
use std::time::Duration;

use tradedesk_core::prelude::*;
use tradedesk_core::{
    AdminProduct, BillingCycle, BlogPost, Buyer, CategoryStat, CreateRfq, FaqItem, ListingStatus,
    Notification, OtpMethod, PlanTier, PressRelease, Product, Rfq, SalesPoint, Supplier,
    SupplierPatch, TopProduct,
};

use crate::client::ApiClient;
use crate::services::{
    AdminProductParams, AdminService, AuthService, CmsService, NotificationService,
    ProductListParams, ProductService, RfqService, SearchResults, SearchService, SupplierService,
};

/// Every remote operation the app can dispatch
///
/// Futures are `Send` so action handlers can run them on spawned tasks.
#[trait_variant::make(MarketplaceApi: Send)]
pub trait LocalMarketplaceApi {
    // Catalog
    async fn list_products(&self, params: ProductListParams) -> Result<Vec<Product>>;
    async fn list_suppliers(&self, limit: u32, offset: u32) -> Result<Vec<Supplier>>;
    async fn get_supplier(&self, id: String) -> Result<Supplier>;
    async fn update_supplier(&self, id: String, patch: SupplierPatch) -> Result<()>;

    // RFQ
    async fn create_rfq(&self, payload: CreateRfq) -> Result<Rfq>;
    async fn my_rfqs(&self, limit: u32, offset: u32) -> Result<Vec<Rfq>>;

    // CMS
    async fn blog_posts(&self) -> Result<Vec<BlogPost>>;
    async fn faqs(&self) -> Result<Vec<FaqItem>>;
    async fn press_releases(&self) -> Result<Vec<PressRelease>>;

    // Search
    async fn search(&self, query: String, limit: u32, offset: u32) -> Result<SearchResults>;

    // Notifications
    async fn my_notifications(&self, limit: u32, offset: u32) -> Result<Vec<Notification>>;
    async fn mark_notification_read(&self, id: String) -> Result<()>;
    async fn mark_all_notifications_read(&self) -> Result<()>;
    async fn delete_notification(&self, id: String) -> Result<()>;

    // Back office
    async fn admin_products(&self, params: AdminProductParams) -> Result<Vec<AdminProduct>>;
    async fn update_product_status(
        &self,
        id: String,
        status: ListingStatus,
        reason: Option<String>,
    ) -> Result<()>;
    async fn delete_product(&self, id: String) -> Result<()>;
    async fn sales_data(&self, days: u32) -> Result<Vec<SalesPoint>>;
    async fn category_stats(&self) -> Result<Vec<CategoryStat>>;
    async fn top_products(&self, limit: u32) -> Result<Vec<TopProduct>>;
    async fn list_buyers(&self, limit: u32, offset: u32) -> Result<Vec<Buyer>>;

    // Account
    async fn request_otp(&self, method: OtpMethod, address: String) -> Result<()>;
    async fn verify_otp(&self, address: String, code: String) -> Result<()>;
    async fn upgrade_subscription(&self, tier: PlanTier, cycle: BillingCycle) -> Result<()>;
}

/// The real backend, reached over HTTP
#[derive(Debug, Clone)]
pub struct RemoteMarketplace {
    client: Arc<ApiClient>,
    products: ProductService,
    suppliers: SupplierService,
    rfq: RfqService,
    cms: CmsService,
    search: SearchService,
    notifications: NotificationService,
    admin: AdminService,
    auth: AuthService,
}

impl RemoteMarketplace {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Arc::new(ApiClient::new(base_url, timeout)?);
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Arc<ApiClient>) -> Self {
        Self {
            products: ProductService::new(client.clone()),
            suppliers: SupplierService::new(client.clone()),
            rfq: RfqService::new(client.clone()),
            cms: CmsService::new(client.clone()),
            search: SearchService::new(client.clone()),
            notifications: NotificationService::new(client.clone()),
            admin: AdminService::new(client.clone()),
            auth: AuthService::new(client.clone()),
            client,
        }
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }
}

impl MarketplaceApi for RemoteMarketplace {
    async fn list_products(&self, params: ProductListParams) -> Result<Vec<Product>> {
        self.products.list(&params).await
    }

    async fn list_suppliers(&self, limit: u32, offset: u32) -> Result<Vec<Supplier>> {
        self.suppliers.list(limit, offset).await
    }

    async fn get_supplier(&self, id: String) -> Result<Supplier> {
        self.suppliers.get(&id).await
    }

    async fn update_supplier(&self, id: String, patch: SupplierPatch) -> Result<()> {
        self.suppliers.update(&id, &patch).await
    }

    async fn create_rfq(&self, payload: CreateRfq) -> Result<Rfq> {
        self.rfq.create(&payload).await
    }

    async fn my_rfqs(&self, limit: u32, offset: u32) -> Result<Vec<Rfq>> {
        self.rfq.my_rfqs(limit, offset).await
    }

    async fn blog_posts(&self) -> Result<Vec<BlogPost>> {
        self.cms.blog_posts().await
    }

    async fn faqs(&self) -> Result<Vec<FaqItem>> {
        self.cms.faqs().await
    }

    async fn press_releases(&self) -> Result<Vec<PressRelease>> {
        self.cms.press_releases().await
    }

    async fn search(&self, query: String, limit: u32, offset: u32) -> Result<SearchResults> {
        self.search.search(&query, limit, offset).await
    }

    async fn my_notifications(&self, limit: u32, offset: u32) -> Result<Vec<Notification>> {
        self.notifications.my_notifications(limit, offset).await
    }

    async fn mark_notification_read(&self, id: String) -> Result<()> {
        self.notifications.mark_read(&id).await
    }

    async fn mark_all_notifications_read(&self) -> Result<()> {
        self.notifications.mark_all_read().await
    }

    async fn delete_notification(&self, id: String) -> Result<()> {
        self.notifications.delete(&id).await
    }

    async fn admin_products(&self, params: AdminProductParams) -> Result<Vec<AdminProduct>> {
        self.admin.list_products(&params).await
    }

    async fn update_product_status(
        &self,
        id: String,
        status: ListingStatus,
        reason: Option<String>,
    ) -> Result<()> {
        self.admin.update_product_status(&id, status, reason).await
    }

    async fn delete_product(&self, id: String) -> Result<()> {
        self.admin.delete_product(&id).await
    }

    async fn sales_data(&self, days: u32) -> Result<Vec<SalesPoint>> {
        self.admin.sales_data(days).await
    }

    async fn category_stats(&self) -> Result<Vec<CategoryStat>> {
        self.admin.category_stats().await
    }

    async fn top_products(&self, limit: u32) -> Result<Vec<TopProduct>> {
        self.admin.top_products(limit).await
    }

    async fn list_buyers(&self, limit: u32, offset: u32) -> Result<Vec<Buyer>> {
        self.admin.list_buyers(limit, offset).await
    }

    async fn request_otp(&self, method: OtpMethod, address: String) -> Result<()> {
        self.auth.request_otp(method, &address).await
    }

    async fn verify_otp(&self, address: String, code: String) -> Result<()> {
        self.auth.verify_otp(&address, &code).await
    }

    async fn upgrade_subscription(&self, tier: PlanTier, cycle: BillingCycle) -> Result<()> {
        let body = serde_json::json!({
            "plan": tier,
            "billingCycle": cycle,
        });
        let _: serde_json::Value = self.client.post("subscriptions/upgrade", &body).await?;
        Ok(())
    }
}
