//! Request-for-quote records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Units a buyer can request quantities in
pub const QUOTE_UNITS: &[&str] = &["pcs", "kg", "g", "m", "l", "box", "set"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RfqStatus {
    Draft,
    Submitted,
    Active,
    Closed,
    Cancelled,
}

impl RfqStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RfqStatus::Draft => "Draft",
            RfqStatus::Submitted => "Submitted",
            RfqStatus::Active => "Active",
            RfqStatus::Closed => "Closed",
            RfqStatus::Cancelled => "Cancelled",
        }
    }
}

/// Payload for creating a request-for-quote
///
/// Built by the quote wizard after client-side validation; optional fields
/// are omitted from the wire when empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRfq {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    pub quantity: u64,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_delivery_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    pub currency: String,
}

/// A request-for-quote as stored server-side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rfq {
    pub id: String,
    pub buyer_id: String,
    #[serde(default)]
    pub product_id: Option<String>,
    pub product_name: String,
    #[serde(default)]
    pub supplier_id: Option<String>,
    pub quantity: u64,
    pub unit: String,
    #[serde(default)]
    pub specifications: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    pub currency: String,
    pub status: RfqStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rfq_omits_empty_optionals() {
        let payload = CreateRfq {
            product_id: Some("p-1".to_string()),
            product_name: "Steel pipe".to_string(),
            supplier_id: None,
            quantity: 100,
            unit: "pcs".to_string(),
            specifications: None,
            requirements: None,
            delivery_location: None,
            preferred_delivery_date: None,
            budget: None,
            currency: "USD".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("supplierId").is_none());
        assert!(json.get("budget").is_none());
        assert_eq!(json["quantity"], 100);
        assert_eq!(json["currency"], "USD");
    }

    #[test]
    fn test_rfq_status_wire_names() {
        let s: RfqStatus = serde_json::from_str("\"submitted\"").unwrap();
        assert_eq!(s, RfqStatus::Submitted);
    }
}
