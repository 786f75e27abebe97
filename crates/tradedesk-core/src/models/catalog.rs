//! Storefront catalog records: products and suppliers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{Searchable, Sortable};

/// Storefront product listing state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Active,
    Inactive,
    Draft,
    OutOfStock,
}

impl ProductStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::Inactive => "Inactive",
            ProductStatus::Draft => "Draft",
            ProductStatus::OutOfStock => "Out of stock",
        }
    }
}

/// A catalog product as shown on storefront pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub supplier_id: String,
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub moq: u32,
    pub stock_quantity: u32,
    pub unit: String,
    pub rating: f64,
    pub review_count: u32,
    #[serde(default)]
    pub featured: bool,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }

    fn category(&self) -> &str {
        &self.category_id
    }
}

impl Sortable for Product {
    fn sort_date(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }

    fn sort_price(&self) -> Option<f64> {
        Some(self.price)
    }

    fn sort_rating(&self) -> Option<f64> {
        Some(self.rating)
    }
}

/// Supplier account state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplierStatus {
    Active,
    Inactive,
    Suspended,
    Pending,
}

impl SupplierStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SupplierStatus::Active => "Active",
            SupplierStatus::Inactive => "Inactive",
            SupplierStatus::Suspended => "Suspended",
            SupplierStatus::Pending => "Pending",
        }
    }
}

/// A supplier profile from the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub company_name: String,
    pub contact_name: String,
    pub country: String,
    pub city: String,
    #[serde(default)]
    pub description: String,
    pub verified: bool,
    pub status: SupplierStatus,
    pub subscription: super::subscription::PlanTier,
    pub rating: f64,
    pub total_products: u32,
    pub total_orders: u32,
    pub response_rate: f64,
    #[serde(default)]
    pub established: Option<u16>,
    pub created_at: DateTime<Utc>,
}

impl Searchable for Supplier {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.company_name, &self.country, &self.description]
    }

    fn category(&self) -> &str {
        &self.country
    }
}

impl Sortable for Supplier {
    fn sort_rating(&self) -> Option<f64> {
        Some(self.rating)
    }

    fn sort_date(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}

/// Fields a caller may change on a supplier profile; `None` leaves the
/// field untouched server-side
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SupplierStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<super::subscription::PlanTier>,
}
