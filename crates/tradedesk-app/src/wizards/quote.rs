//! Request-for-quote wizard
//!
//! Opened from a product. One form step, validated client-side before the
//! single `create_rfq` call; success shows a confirmation and auto-closes.

use std::sync::OnceLock;

use regex::Regex;

use tradedesk_core::prelude::*;
use tradedesk_core::{CreateRfq, QUOTE_UNITS};

use super::AUTO_CLOSE_TICKS;

/// Currencies offered by the budget selector, default first
pub const CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "IRR", "SAR", "AED", "CNY"];

fn quantity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+$").expect("static pattern"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStep {
    #[default]
    Form,
    Submitting,
    Done,
}

/// Form fields in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteField {
    #[default]
    Quantity,
    Unit,
    Specifications,
    Requirements,
    DeliveryLocation,
    DeliveryDate,
    Budget,
    Currency,
    Submit,
}

impl QuoteField {
    pub fn next(self) -> Self {
        match self {
            Self::Quantity => Self::Unit,
            Self::Unit => Self::Specifications,
            Self::Specifications => Self::Requirements,
            Self::Requirements => Self::DeliveryLocation,
            Self::DeliveryLocation => Self::DeliveryDate,
            Self::DeliveryDate => Self::Budget,
            Self::Budget => Self::Currency,
            Self::Currency => Self::Submit,
            Self::Submit => Self::Quantity,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Quantity => Self::Submit,
            Self::Unit => Self::Quantity,
            Self::Specifications => Self::Unit,
            Self::Requirements => Self::Specifications,
            Self::DeliveryLocation => Self::Requirements,
            Self::DeliveryDate => Self::DeliveryLocation,
            Self::Budget => Self::DeliveryDate,
            Self::Currency => Self::Budget,
            Self::Submit => Self::Currency,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Quantity => "Quantity",
            Self::Unit => "Unit",
            Self::Specifications => "Specifications",
            Self::Requirements => "Requirements",
            Self::DeliveryLocation => "Delivery location",
            Self::DeliveryDate => "Delivery date",
            Self::Budget => "Budget",
            Self::Currency => "Currency",
            Self::Submit => "Submit",
        }
    }

    /// Selector fields take Left/Right instead of text input
    pub fn is_selector(&self) -> bool {
        matches!(self, Self::Unit | Self::Currency)
    }
}

#[derive(Debug, Clone)]
pub struct QuoteWizard {
    pub product_id: String,
    pub product_name: String,
    pub supplier_id: Option<String>,
    pub moq: Option<u32>,

    pub step: QuoteStep,
    pub field: QuoteField,

    pub quantity: String,
    pub unit_index: usize,
    pub specifications: String,
    pub requirements: String,
    pub delivery_location: String,
    pub delivery_date: String,
    pub budget: String,
    pub currency_index: usize,

    pub error: Option<String>,
    pub created_id: Option<String>,
    close_in_ticks: Option<u8>,
}

impl QuoteWizard {
    pub fn new(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        supplier_id: Option<String>,
        moq: Option<u32>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            supplier_id,
            moq,
            step: QuoteStep::Form,
            field: QuoteField::Quantity,
            // Quantity is prefilled from the product's minimum order
            quantity: moq.map(|m| m.to_string()).unwrap_or_default(),
            unit_index: 0,
            specifications: String::new(),
            requirements: String::new(),
            delivery_location: String::new(),
            delivery_date: String::new(),
            budget: String::new(),
            currency_index: 0,
            error: None,
            created_id: None,
            close_in_ticks: None,
        }
    }

    pub fn unit(&self) -> &'static str {
        QUOTE_UNITS[self.unit_index]
    }

    pub fn currency(&self) -> &'static str {
        CURRENCIES[self.currency_index]
    }

    pub fn is_submitting(&self) -> bool {
        self.step == QuoteStep::Submitting
    }

    pub fn select_left(&mut self) {
        match self.field {
            QuoteField::Unit => {
                self.unit_index = self.unit_index.checked_sub(1).unwrap_or(QUOTE_UNITS.len() - 1)
            }
            QuoteField::Currency => {
                self.currency_index = self
                    .currency_index
                    .checked_sub(1)
                    .unwrap_or(CURRENCIES.len() - 1)
            }
            _ => {}
        }
    }

    pub fn select_right(&mut self) {
        match self.field {
            QuoteField::Unit => self.unit_index = (self.unit_index + 1) % QUOTE_UNITS.len(),
            QuoteField::Currency => {
                self.currency_index = (self.currency_index + 1) % CURRENCIES.len()
            }
            _ => {}
        }
    }

    /// Append a character to the focused text field
    pub fn push_char(&mut self, c: char) {
        if self.is_submitting() {
            return;
        }
        match self.field {
            QuoteField::Quantity => self.quantity.push(c),
            QuoteField::Specifications => self.specifications.push(c),
            QuoteField::Requirements => self.requirements.push(c),
            QuoteField::DeliveryLocation => self.delivery_location.push(c),
            QuoteField::DeliveryDate => self.delivery_date.push(c),
            QuoteField::Budget => self.budget.push(c),
            _ => {}
        }
    }

    pub fn pop_char(&mut self) {
        if self.is_submitting() {
            return;
        }
        match self.field {
            QuoteField::Quantity => {
                self.quantity.pop();
            }
            QuoteField::Specifications => {
                self.specifications.pop();
            }
            QuoteField::Requirements => {
                self.requirements.pop();
            }
            QuoteField::DeliveryLocation => {
                self.delivery_location.pop();
            }
            QuoteField::DeliveryDate => {
                self.delivery_date.pop();
            }
            QuoteField::Budget => {
                self.budget.pop();
            }
            _ => {}
        }
    }

    /// Validate form fields and build the submission payload
    ///
    /// Quantity must be a non-empty digit string; a value like `"0abc"`
    /// fails here and no remote call is made. Budget, when present, must
    /// parse as a number. Optional empty fields are omitted.
    pub fn validate(&self) -> Result<CreateRfq> {
        if self.quantity.is_empty() {
            return Err(Error::validation("quantity", "Quantity is required"));
        }
        if !quantity_pattern().is_match(&self.quantity) {
            return Err(Error::validation("quantity", "Quantity must be a number"));
        }
        let quantity: u64 = self
            .quantity
            .parse()
            .map_err(|_| Error::validation("quantity", "Quantity is out of range"))?;

        let unit = self.unit();
        if unit.is_empty() {
            return Err(Error::validation("unit", "Unit is required"));
        }

        let budget = if self.budget.trim().is_empty() {
            None
        } else {
            Some(
                self.budget
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| Error::validation("budget", "Budget must be a number"))?,
            )
        };

        let optional = |s: &str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        Ok(CreateRfq {
            product_id: Some(self.product_id.clone()),
            product_name: self.product_name.clone(),
            supplier_id: self.supplier_id.clone(),
            quantity,
            unit: unit.to_string(),
            specifications: optional(&self.specifications),
            requirements: optional(&self.requirements),
            delivery_location: optional(&self.delivery_location),
            preferred_delivery_date: optional(&self.delivery_date),
            budget,
            currency: self.currency().to_string(),
        })
    }

    /// Validate and move to `Submitting`; on validation failure stay on the
    /// form with an inline error and return nothing to dispatch
    pub fn begin_submit(&mut self) -> Option<CreateRfq> {
        if self.is_submitting() {
            return None;
        }
        match self.validate() {
            Ok(payload) => {
                self.error = None;
                self.step = QuoteStep::Submitting;
                Some(payload)
            }
            Err(err) => {
                self.error = Some(err.user_message());
                None
            }
        }
    }

    pub fn submit_succeeded(&mut self, created_id: String) {
        self.created_id = Some(created_id);
        self.step = QuoteStep::Done;
        self.close_in_ticks = Some(AUTO_CLOSE_TICKS);
    }

    /// Back to the form with an inline error; the user resubmits manually
    pub fn submit_failed(&mut self, message: String) {
        self.step = QuoteStep::Form;
        self.error = Some(message);
    }

    /// Advance the auto-close countdown; true when the wizard should close
    pub fn tick(&mut self) -> bool {
        if let Some(remaining) = self.close_in_ticks {
            if remaining <= 1 {
                self.close_in_ticks = None;
                return true;
            }
            self.close_in_ticks = Some(remaining - 1);
        }
        false
    }
}
