//! Sign-in records

use serde::{Deserialize, Serialize};

/// Where the one-time passcode is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpMethod {
    #[default]
    Email,
    Phone,
}

impl OtpMethod {
    pub fn label(&self) -> &'static str {
        match self {
            OtpMethod::Email => "Email",
            OtpMethod::Phone => "Phone number",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            OtpMethod::Email => OtpMethod::Phone,
            OtpMethod::Phone => OtpMethod::Email,
        }
    }
}
