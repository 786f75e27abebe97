//! # tradedesk-core - Core Domain Types
//!
//! Foundation crate for TradeDesk. Provides the marketplace view-models,
//! the generic list-query engine, pricing helpers, error handling, and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### View-Models (`models`)
//! - [`Product`], [`Supplier`] - catalog records
//! - [`BlogPost`], [`FaqItem`], [`PressRelease`] - CMS content
//! - [`Notification`] - server-owned notifications with derived
//!   [`unread_count`]
//! - [`Rfq`], [`CreateRfq`] - request-for-quote records
//! - [`SearchHit`] - unified search results tagged by [`HitKind`]
//! - [`AdminProduct`], [`Buyer`], dashboard stats - back-office records
//! - [`PlanTier`], [`BillingCycle`] - subscription plans
//!
//! ### List-Query Engine (`query`)
//! - [`Searchable`], [`Sortable`] - field-accessor traits for list items
//! - [`FilterState`] - query/category/sort state for a list page
//! - [`query::filter`], [`query::sort`], [`query::apply`],
//!   [`query::paginate`] - the one shared filter pipeline
//!
//! ### Error Handling (`error`)
//! - [`Error`] - custom error enum with `fatal` vs `recoverable`
//!   classification
//! - [`Result`] - type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use tradedesk_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod models;
pub mod pricing;
pub mod query;

/// Prelude for common imports used throughout all TradeDesk crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use models::{
    unread_count, AdminProduct, BillingCycle, BlogPost, Buyer, BuyerStatus, CategoryStat,
    CreateRfq, FaqItem, HitKind, ListingStatus, Notification, NotificationKind,
    NotificationPriority, OtpMethod, PlanConfig, PlanTier, PressRelease, Product, ProductStatus,
    Rfq, RfqStatus, SalesPoint, SearchHit, Supplier, SupplierPatch, SupplierStatus, TopProduct,
    QUOTE_UNITS,
};
pub use query::{FilterState, Searchable, SortKey, Sortable, CATEGORY_ALL};
