//! # tradedesk-api - Remote Marketplace Services
//!
//! The marketplace backend is an external collaborator reached over HTTP.
//! This crate owns the transport ([`ApiClient`]), the typed per-area
//! services (`services`), and the one seam the app dispatches through
//! ([`MarketplaceApi`]).
//!
//! Wire shapes follow the backend: camelCase field names, `{ "items": [..] }`
//! list envelopes, `{ "error": ".." }` failure bodies. Each service maps
//! its DTOs into `tradedesk-core` view-models at the fetch boundary, so
//! nothing above this crate sees wire JSON.

pub mod client;
pub mod marketplace;
pub mod services;

pub use client::{ApiClient, TokenPair, DEFAULT_TIMEOUT};
pub use marketplace::{MarketplaceApi, RemoteMarketplace};
pub use services::{
    AdminProductParams, AdminService, AuthService, CmsService, NotificationService,
    ProductListParams, ProductService, RfqService, SearchResults, SearchService, SupplierService,
};
