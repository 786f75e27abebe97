//! Subscription plan tiers and pricing

use serde::{Deserialize, Serialize};

use crate::pricing;

/// Supplier subscription tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Free,
    Silver,
    Gold,
    Diamond,
}

impl PlanTier {
    pub fn label(&self) -> &'static str {
        match self {
            PlanTier::Free => "Free",
            PlanTier::Silver => "Silver",
            PlanTier::Gold => "Gold",
            PlanTier::Diamond => "Diamond",
        }
    }

    pub const ALL: [PlanTier; 4] = [
        PlanTier::Free,
        PlanTier::Silver,
        PlanTier::Gold,
        PlanTier::Diamond,
    ];

    /// Pricing for this tier
    pub fn config(&self) -> PlanConfig {
        match self {
            PlanTier::Free => PlanConfig::new(0.0, 0.0),
            PlanTier::Silver => PlanConfig::new(49.0, 490.0),
            PlanTier::Gold => PlanConfig::new(99.0, 990.0),
            PlanTier::Diamond => PlanConfig::new(199.0, 1990.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Yearly => "Yearly",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Yearly,
            BillingCycle::Yearly => BillingCycle::Monthly,
        }
    }
}

/// Prices for one plan tier, in USD
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanConfig {
    pub monthly_price: f64,
    pub yearly_price: f64,
}

impl PlanConfig {
    fn new(monthly_price: f64, yearly_price: f64) -> Self {
        Self {
            monthly_price,
            yearly_price,
        }
    }

    /// Price charged for the chosen billing cycle
    pub fn price(&self, cycle: BillingCycle) -> f64 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Yearly => self.yearly_price,
        }
    }

    /// Savings of paying yearly over 12 monthly payments
    pub fn yearly_savings(&self) -> f64 {
        pricing::yearly_savings(self.monthly_price, self.yearly_price)
    }
}
