//! Subscription upgrade flow: summary -> payment -> success

use std::sync::OnceLock;

use regex::Regex;

use tradedesk_core::prelude::*;
use tradedesk_core::{pricing, BillingCycle, PlanTier};

use super::AUTO_CLOSE_TICKS;

fn expiry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").expect("static pattern"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpgradeStep {
    #[default]
    Summary,
    Payment,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentField {
    #[default]
    CardNumber,
    Expiry,
    Cvc,
    Pay,
}

impl PaymentField {
    pub fn next(self) -> Self {
        match self {
            Self::CardNumber => Self::Expiry,
            Self::Expiry => Self::Cvc,
            Self::Cvc => Self::Pay,
            Self::Pay => Self::CardNumber,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::CardNumber => Self::Pay,
            Self::Expiry => Self::CardNumber,
            Self::Cvc => Self::Expiry,
            Self::Pay => Self::Cvc,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CardNumber => "Card number",
            Self::Expiry => "Expiry",
            Self::Cvc => "CVC",
            Self::Pay => "Pay",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpgradeFlow {
    pub current: PlanTier,
    pub target: PlanTier,
    pub cycle: BillingCycle,

    pub step: UpgradeStep,
    pub field: PaymentField,

    pub card_number: String,
    pub expiry: String,
    pub cvc: String,

    pub processing: bool,
    pub error: Option<String>,
    close_in_ticks: Option<u8>,
}

impl UpgradeFlow {
    pub fn new(current: PlanTier, target: PlanTier, cycle: BillingCycle) -> Self {
        Self {
            current,
            target,
            cycle,
            step: UpgradeStep::Summary,
            field: PaymentField::CardNumber,
            card_number: String::new(),
            expiry: String::new(),
            cvc: String::new(),
            processing: false,
            error: None,
            close_in_ticks: None,
        }
    }

    /// Price charged for the chosen cycle
    pub fn price(&self) -> f64 {
        self.target.config().price(self.cycle)
    }

    /// Savings line shown on the summary when paying yearly
    pub fn yearly_savings(&self) -> f64 {
        pricing::yearly_savings(
            self.target.config().monthly_price,
            self.target.config().yearly_price,
        )
    }

    pub fn toggle_cycle(&mut self) {
        if self.step == UpgradeStep::Summary {
            self.cycle = self.cycle.toggle();
        }
    }

    /// Summary -> Payment on explicit user action
    pub fn proceed_to_payment(&mut self) {
        if self.step == UpgradeStep::Summary {
            self.step = UpgradeStep::Payment;
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.processing {
            return;
        }
        match self.field {
            PaymentField::CardNumber => {
                if self.card_number.len() < 19 {
                    self.card_number.push(c);
                }
            }
            PaymentField::Expiry => {
                if self.expiry.len() < 5 {
                    self.expiry.push(c);
                }
            }
            PaymentField::Cvc => {
                if self.cvc.len() < 4 {
                    self.cvc.push(c);
                }
            }
            PaymentField::Pay => {}
        }
    }

    pub fn pop_char(&mut self) {
        if self.processing {
            return;
        }
        match self.field {
            PaymentField::CardNumber => {
                self.card_number.pop();
            }
            PaymentField::Expiry => {
                self.expiry.pop();
            }
            PaymentField::Cvc => {
                self.cvc.pop();
            }
            PaymentField::Pay => {}
        }
    }

    fn validate_payment(&self) -> Result<()> {
        let digits: String = self
            .card_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        if digits.len() < 12 {
            return Err(Error::validation("cardNumber", "Enter a valid card number"));
        }
        if !expiry_pattern().is_match(self.expiry.trim()) {
            return Err(Error::validation("expiry", "Expiry must be MM/YY"));
        }
        let cvc = self.cvc.trim();
        if cvc.len() < 3 || !cvc.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::validation("cvc", "Enter the 3-4 digit code"));
        }
        Ok(())
    }

    /// Validate and start the single payment call
    ///
    /// Returns what to charge, or `None` when validation failed (inline
    /// error set) or a payment is already in flight.
    pub fn begin_payment(&mut self) -> Option<(PlanTier, BillingCycle)> {
        if self.step != UpgradeStep::Payment || self.processing {
            return None;
        }
        match self.validate_payment() {
            Ok(()) => {
                self.error = None;
                self.processing = true;
                Some((self.target, self.cycle))
            }
            Err(err) => {
                self.error = Some(err.user_message());
                None
            }
        }
    }

    pub fn payment_succeeded(&mut self) {
        self.processing = false;
        self.step = UpgradeStep::Success;
        self.close_in_ticks = Some(AUTO_CLOSE_TICKS);
    }

    /// Stay on the payment step; the user resubmits manually
    pub fn payment_failed(&mut self, message: String) {
        self.processing = false;
        self.error = Some(message);
    }

    /// Advance the auto-close countdown; true when the flow should signal
    /// completion to its parent
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

#[cfg(test)]
mod tests {
    use super::*;

    fn flow() -> UpgradeFlow {
        UpgradeFlow::new(PlanTier::Free, PlanTier::Gold, BillingCycle::Yearly)
    }

    fn fill_valid_payment(flow: &mut UpgradeFlow) {
        flow.card_number = "4111 1111 1111 1111".to_string();
        flow.expiry = "12/27".to_string();
        flow.cvc = "123".to_string();
    }

    #[test]
    fn test_payment_unreachable_before_explicit_action() {
        let mut f = flow();
        fill_valid_payment(&mut f);
        // Still on Summary: begin_payment does nothing
        assert_eq!(f.begin_payment(), None);
        assert_eq!(f.step, UpgradeStep::Summary);
    }

    #[test]
    fn test_success_gated_on_remote_outcome() {
        // Property 4: Success is only reachable after the payment call
        // resolves Ok
        let mut f = flow();
        f.proceed_to_payment();
        fill_valid_payment(&mut f);
        let charge = f.begin_payment().expect("charge");
        assert_eq!(charge, (PlanTier::Gold, BillingCycle::Yearly));
        assert_eq!(f.step, UpgradeStep::Payment);
        assert!(f.processing);

        f.payment_succeeded();
        assert_eq!(f.step, UpgradeStep::Success);
    }

    #[test]
    fn test_failed_payment_stays_on_step() {
        let mut f = flow();
        f.proceed_to_payment();
        fill_valid_payment(&mut f);
        f.begin_payment().unwrap();
        f.payment_failed("card declined".to_string());
        assert_eq!(f.step, UpgradeStep::Payment);
        assert_eq!(f.error.as_deref(), Some("card declined"));
        assert!(!f.processing);
        // No automatic rollback to Summary, manual resubmit allowed
        assert!(f.begin_payment().is_some());
    }

    #[test]
    fn test_invalid_expiry_rejected_client_side() {
        let mut f = flow();
        f.proceed_to_payment();
        fill_valid_payment(&mut f);
        f.expiry = "13/27".to_string();
        assert_eq!(f.begin_payment(), None);
        assert!(f.error.as_deref().unwrap().contains("MM/YY"));
    }

    #[test]
    fn test_short_card_number_rejected() {
        let mut f = flow();
        f.proceed_to_payment();
        fill_valid_payment(&mut f);
        f.card_number = "4111".to_string();
        assert_eq!(f.begin_payment(), None);
    }

    #[test]
    fn test_double_pay_blocked_while_processing() {
        let mut f = flow();
        f.proceed_to_payment();
        fill_valid_payment(&mut f);
        assert!(f.begin_payment().is_some());
        assert!(f.begin_payment().is_none());
    }

    #[test]
    fn test_cycle_toggle_changes_price() {
        let mut f = flow();
        let yearly = f.price();
        f.toggle_cycle();
        let monthly = f.price();
        assert_eq!(yearly, PlanTier::Gold.config().yearly_price);
        assert_eq!(monthly, PlanTier::Gold.config().monthly_price);
    }

    #[test]
    fn test_cycle_locked_after_summary() {
        let mut f = flow();
        f.proceed_to_payment();
        f.toggle_cycle();
        assert_eq!(f.cycle, BillingCycle::Yearly);
    }

    #[test]
    fn test_auto_close_countdown() {
        let mut f = flow();
        f.proceed_to_payment();
        fill_valid_payment(&mut f);
        f.begin_payment().unwrap();
        f.payment_succeeded();
        for _ in 0..(AUTO_CLOSE_TICKS - 1) {
            assert!(!f.tick());
        }
        assert!(f.tick());
    }

    #[test]
    fn test_savings_uses_shared_pricing_helper() {
        let f = flow();
        assert_eq!(
            f.yearly_savings(),
            tradedesk_core::pricing::yearly_savings(99.0, 990.0)
        );
    }
}
