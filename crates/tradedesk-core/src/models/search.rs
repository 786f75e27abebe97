//! Unified search result records

use serde::{Deserialize, Serialize};

use crate::query::{Searchable, Sortable};

/// What a search hit refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    Product,
    Supplier,
    Category,
}

impl HitKind {
    /// Tag used by the result-type tab filter
    pub fn tag(&self) -> &'static str {
        match self {
            HitKind::Product => "product",
            HitKind::Supplier => "supplier",
            HitKind::Category => "category",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HitKind::Product => "Product",
            HitKind::Supplier => "Supplier",
            HitKind::Category => "Category",
        }
    }
}

/// One entry in the unified search result list
///
/// Heterogeneous backend results (products, suppliers) are flattened into
/// this shape, tagged by kind. Category hits are a best-effort grouping
/// derived client-side, not a taxonomy lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: String,
    pub kind: HitKind,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub verified: bool,
}

impl Searchable for SearchHit {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        if let Some(ref sub) = self.subtitle {
            fields.push(sub);
        }
        fields
    }

    fn category(&self) -> &str {
        self.kind.tag()
    }
}

impl Sortable for SearchHit {
    fn sort_price(&self) -> Option<f64> {
        self.price
    }

    fn sort_rating(&self) -> Option<f64> {
        self.rating
    }
}
