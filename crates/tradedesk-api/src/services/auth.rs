//! Passcode sign-in endpoints
//!
//! Token storage beyond the in-memory pair on the client is out of scope;
//! a successful verify installs the pair and later requests carry it.

use std::sync::Arc;

use serde::Deserialize;

use tradedesk_core::prelude::*;
use tradedesk_core::OtpMethod;

use crate::client::{ApiClient, TokenPair};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    token: String,
    refresh_token: String,
}

#[derive(Debug, Clone)]
pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Ask the backend to deliver a one-time passcode
    pub async fn request_otp(&self, method: OtpMethod, address: &str) -> Result<()> {
        let body = serde_json::json!({
            "method": method,
            "address": address,
        });
        let _: serde_json::Value = self.client.post("auth/otp/request", &body).await?;
        Ok(())
    }

    /// Exchange a delivered passcode for a token pair
    pub async fn verify_otp(&self, address: &str, code: &str) -> Result<()> {
        let body = serde_json::json!({
            "address": address,
            "otp": code,
        });
        let response: TokenResponse = self.client.post("auth/otp/verify", &body).await?;
        self.client
            .set_tokens(TokenPair {
                access: response.token,
                refresh: response.refresh_token,
            })
            .await;
        Ok(())
    }

    /// Drop the in-memory token pair
    pub async fn sign_out(&self) {
        self.client.clear_tokens().await;
    }
}
