//! View-model records mapped from API responses
//!
//! These are plain data carriers: created by the service layer on fetch,
//! held in page state, discarded on the next fetch. The server is the
//! source of truth; no cross-entity integrity is enforced client-side.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod cms;
pub mod notification;
pub mod rfq;
pub mod search;
pub mod subscription;

pub use admin::{
    AdminProduct, Buyer, BuyerStatus, CategoryStat, ListingStatus, SalesPoint, TopProduct,
};
pub use auth::OtpMethod;
pub use catalog::{Product, ProductStatus, Supplier, SupplierPatch, SupplierStatus};
pub use cms::{BlogPost, FaqItem, PressRelease};
pub use notification::{unread_count, Notification, NotificationKind, NotificationPriority};
pub use rfq::{CreateRfq, Rfq, RfqStatus, QUOTE_UNITS};
pub use search::{HitKind, SearchHit};
pub use subscription::{BillingCycle, PlanConfig, PlanTier};
