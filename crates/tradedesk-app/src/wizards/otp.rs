//! Passcode sign-in wizard: method-select -> code-sent -> verified

use std::sync::OnceLock;

use regex::Regex;

use tradedesk_core::prelude::*;
use tradedesk_core::OtpMethod;

use super::AUTO_CLOSE_TICKS;

/// Ticks (250ms) before the code can be re-requested
pub const RESEND_TICKS: u16 = 240;

/// Required passcode length
pub const CODE_LEN: usize = 6;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static pattern"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OtpStep {
    #[default]
    MethodSelect,
    CodeSent,
    Verified,
}

#[derive(Debug, Clone, Default)]
pub struct OtpLogin {
    pub step: OtpStep,
    pub method: OtpMethod,
    /// Email address or phone number, depending on method
    pub address: String,
    pub code: String,
    pub sending: bool,
    pub verifying: bool,
    pub error: Option<String>,
    resend_in_ticks: u16,
    close_in_ticks: Option<u8>,
}

impl OtpLogin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switching delivery method resets the sent state
    pub fn toggle_method(&mut self) {
        if self.step == OtpStep::MethodSelect && !self.sending {
            self.method = self.method.toggle();
            self.code.clear();
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.sending || self.verifying {
            return;
        }
        match self.step {
            OtpStep::MethodSelect => self.address.push(c),
            OtpStep::CodeSent => {
                if self.code.len() < CODE_LEN && c.is_ascii_digit() {
                    self.code.push(c);
                }
            }
            OtpStep::Verified => {}
        }
    }

    pub fn pop_char(&mut self) {
        if self.sending || self.verifying {
            return;
        }
        match self.step {
            OtpStep::MethodSelect => {
                self.address.pop();
            }
            OtpStep::CodeSent => {
                self.code.pop();
            }
            OtpStep::Verified => {}
        }
    }

    fn validate_address(&self) -> Result<()> {
        let address = self.address.trim();
        match self.method {
            OtpMethod::Email => {
                if !email_pattern().is_match(address) {
                    return Err(Error::validation("email", "Enter a valid email address"));
                }
            }
            OtpMethod::Phone => {
                let digits = address.chars().filter(|c| c.is_ascii_digit()).count();
                if digits < 10 {
                    return Err(Error::validation(
                        "phone",
                        "Enter a valid phone number (10+ digits)",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Validate the address and start the send-code call
    pub fn request_code(&mut self) -> Option<(OtpMethod, String)> {
        if self.sending || self.verifying {
            return None;
        }
        if self.step == OtpStep::CodeSent && !self.can_resend() {
            return None;
        }
        match self.validate_address() {
            Ok(()) => {
                self.error = None;
                self.sending = true;
                Some((self.method, self.address.trim().to_string()))
            }
            Err(err) => {
                self.error = Some(err.user_message());
                None
            }
        }
    }

    /// The backend accepted the send; start the resend countdown
    pub fn code_sent(&mut self) {
        self.sending = false;
        self.step = OtpStep::CodeSent;
        self.resend_in_ticks = RESEND_TICKS;
        self.code.clear();
    }

    pub fn send_failed(&mut self, message: String) {
        self.sending = false;
        self.error = Some(message);
    }

    /// Validate the passcode and start the verify call
    pub fn begin_verify(&mut self) -> Option<(String, String)> {
        if self.step != OtpStep::CodeSent || self.verifying || self.sending {
            return None;
        }
        if self.code.len() != CODE_LEN {
            self.error = Some(format!("Code must be {CODE_LEN} digits"));
            return None;
        }
        self.error = None;
        self.verifying = true;
        Some((self.address.trim().to_string(), self.code.clone()))
    }

    pub fn verified(&mut self) {
        self.verifying = false;
        self.step = OtpStep::Verified;
        self.close_in_ticks = Some(AUTO_CLOSE_TICKS);
    }

    /// Stay on the code step with an inline error
    pub fn verify_failed(&mut self, message: String) {
        self.verifying = false;
        self.error = Some(message);
    }

    pub fn can_resend(&self) -> bool {
        self.resend_in_ticks == 0
    }

    /// Seconds left on the resend countdown, for display
    pub fn resend_secs(&self) -> u16 {
        self.resend_in_ticks.div_ceil(4)
    }

    /// Advance countdowns; true when the completed wizard should close
    pub fn tick(&mut self) -> bool {
        if self.step == OtpStep::CodeSent {
            self.resend_in_ticks = self.resend_in_ticks.saturating_sub(1);
        }
        if let Some(remaining) = self.close_in_ticks {
            if remaining <= 1 {
                self.close_in_ticks = None;
                return true;
            }
            self.close_in_ticks = Some(remaining - 1);
        }
        false
    }

    pub fn is_busy(&self) -> bool {
        self.sending || self.verifying
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_email(address: &str) -> OtpLogin {
        let mut login = OtpLogin::new();
        login.address = address.to_string();
        login
    }

    #[test]
    fn test_invalid_email_rejected_before_send() {
        let mut login = with_email("not-an-email");
        assert_eq!(login.request_code(), None);
        assert!(login.error.is_some());
        assert_eq!(login.step, OtpStep::MethodSelect);
    }

    #[test]
    fn test_valid_email_requests_code() {
        let mut login = with_email("buyer@example.com");
        let request = login.request_code().expect("request");
        assert_eq!(request, (OtpMethod::Email, "buyer@example.com".to_string()));
        assert!(login.sending);

        login.code_sent();
        assert_eq!(login.step, OtpStep::CodeSent);
        assert!(!login.can_resend());
    }

    #[test]
    fn test_phone_needs_ten_digits() {
        let mut login = OtpLogin::new();
        login.toggle_method();
        assert_eq!(login.method, OtpMethod::Phone);

        login.address = "+49 123".to_string();
        assert_eq!(login.request_code(), None);

        login.address = "+49 170 1234567".to_string();
        assert!(login.request_code().is_some());
    }

    #[test]
    fn test_code_input_digits_only_capped_at_len() {
        let mut login = with_email("buyer@example.com");
        login.request_code();
        login.code_sent();

        for c in "12a34567".chars() {
            login.push_char(c);
        }
        assert_eq!(login.code, "123456");
    }

    #[test]
    fn test_short_code_rejected_without_remote_call() {
        let mut login = with_email("buyer@example.com");
        login.request_code();
        login.code_sent();
        login.code = "123".to_string();
        assert_eq!(login.begin_verify(), None);
        assert!(login.error.as_deref().unwrap().contains("6 digits"));
    }

    #[test]
    fn test_verified_gated_on_remote_outcome() {
        // Property 4 for the login wizard
        let mut login = with_email("buyer@example.com");
        login.request_code();
        login.code_sent();
        login.code = "123456".to_string();

        let request = login.begin_verify().expect("verify request");
        assert_eq!(request.1, "123456");
        assert_eq!(login.step, OtpStep::CodeSent);

        login.verified();
        assert_eq!(login.step, OtpStep::Verified);
    }

    #[test]
    fn test_failed_verify_stays_on_code_step() {
        let mut login = with_email("buyer@example.com");
        login.request_code();
        login.code_sent();
        login.code = "123456".to_string();
        login.begin_verify();
        login.verify_failed("wrong code".to_string());
        assert_eq!(login.step, OtpStep::CodeSent);
        assert_eq!(login.error.as_deref(), Some("wrong code"));
        assert!(!login.verifying);
    }

    #[test]
    fn test_resend_blocked_until_countdown_elapses() {
        let mut login = with_email("buyer@example.com");
        login.request_code();
        login.code_sent();
        assert_eq!(login.request_code(), None);

        for _ in 0..RESEND_TICKS {
            login.tick();
        }
        assert!(login.can_resend());
        assert!(login.request_code().is_some());
    }

    #[test]
    fn test_resend_secs_rounds_up() {
        let mut login = with_email("buyer@example.com");
        login.request_code();
        login.code_sent();
        assert_eq!(login.resend_secs(), 60);
        login.tick();
        assert_eq!(login.resend_secs(), 60);
    }

    #[test]
    fn test_method_toggle_locked_after_send() {
        let mut login = with_email("buyer@example.com");
        login.request_code();
        login.code_sent();
        login.toggle_method();
        assert_eq!(login.method, OtpMethod::Email);
    }
}
