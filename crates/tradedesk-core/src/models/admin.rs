//! Back-office records: moderated listings, buyers, dashboard stats

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{Searchable, Sortable};

/// Moderation state of a listing in the admin products table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Inactive,
    Pending,
    Rejected,
}

impl ListingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::Active => "Active",
            ListingStatus::Inactive => "Inactive",
            ListingStatus::Pending => "Pending",
            ListingStatus::Rejected => "Rejected",
        }
    }

    pub const ALL: [ListingStatus; 4] = [
        ListingStatus::Active,
        ListingStatus::Inactive,
        ListingStatus::Pending,
        ListingStatus::Rejected,
    ];
}

/// A product row in the admin moderation table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProduct {
    pub id: String,
    pub name: String,
    pub category_name: String,
    pub supplier_name: String,
    pub price: f64,
    pub currency: String,
    pub stock: u32,
    pub status: ListingStatus,
    pub views: u64,
    pub orders: u32,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

impl Searchable for AdminProduct {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.supplier_name]
    }

    fn category(&self) -> &str {
        &self.category_name
    }
}

impl Sortable for AdminProduct {
    fn sort_date(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }

    fn sort_price(&self) -> Option<f64> {
        Some(self.price)
    }

    fn sort_rating(&self) -> Option<f64> {
        Some(self.rating)
    }

    fn sort_views(&self) -> Option<u64> {
        Some(self.views)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuyerStatus {
    Active,
    Suspended,
}

impl BuyerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BuyerStatus::Active => "Active",
            BuyerStatus::Suspended => "Suspended",
        }
    }
}

/// A buyer row in the admin buyers table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buyer {
    pub id: String,
    pub company_name: String,
    pub contact_name: String,
    pub country: String,
    pub total_orders: u32,
    pub total_spent: f64,
    pub status: BuyerStatus,
    pub created_at: DateTime<Utc>,
}

impl Searchable for Buyer {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.company_name, &self.contact_name, &self.country]
    }

    fn category(&self) -> &str {
        &self.country
    }
}

impl Sortable for Buyer {
    fn sort_date(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}

/// One day of sales on the dashboard revenue chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPoint {
    pub date: NaiveDate,
    pub revenue: f64,
    pub orders: u32,
}

/// Per-category product counts for the dashboard breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub name: String,
    pub product_count: u32,
    /// Share of the catalog, 0.0..=1.0
    pub share: f64,
}

/// A best-selling product on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub id: String,
    pub name: String,
    pub orders: u32,
    pub revenue: f64,
}
