//! Typed service wrappers over [`ApiClient`](crate::ApiClient)
//!
//! One service per backend area, mirroring the endpoints the marketplace
//! exposes. Services map wire DTOs into `tradedesk-core` view-models at the
//! fetch boundary.

pub mod admin;
pub mod auth;
pub mod cms;
pub mod notifications;
pub mod products;
pub mod rfq;
pub mod search;
pub mod suppliers;

pub use admin::{AdminProductParams, AdminService};
pub use auth::AuthService;
pub use cms::CmsService;
pub use notifications::NotificationService;
pub use products::{ProductListParams, ProductService};
pub use rfq::RfqService;
pub use search::{SearchResults, SearchService};
pub use suppliers::SupplierService;
