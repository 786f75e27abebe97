//! Multi-step wizard state machines
//!
//! Each wizard is an ordered step enum plus accumulated form fields.
//! Transitions fire only on explicit user action or on completion of the
//! single remote submission; the one exception is a fixed 2-second
//! auto-advance after a successful terminal action. On rejection a wizard
//! stays on its current step with an inline error and never rolls back.

pub mod otp;
pub mod quote;
pub mod upgrade;

pub use otp::{OtpLogin, OtpStep};
pub use quote::{QuoteField, QuoteStep, QuoteWizard};
pub use upgrade::{PaymentField, UpgradeFlow, UpgradeStep};

/// Ticks (250ms each) before a completed wizard closes itself
pub const AUTO_CLOSE_TICKS: u8 = 8;
