//! HTTP JSON client for the marketplace backend
//!
//! One `ApiClient` is shared by every service. It owns the base URL, the
//! in-memory bearer token pair, and the 401 refresh-then-retry rule. Bodies
//! are JSON both ways; query parameters are serialized by reqwest.

use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;
use url::Url;

use tradedesk_core::prelude::*;

/// Default request timeout when the settings file does not override it
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Access/refresh token pair held in memory for the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshResponse {
    token: String,
    refresh_token: String,
}

/// Error body shape the backend uses for rejected requests
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Shared HTTP client for all marketplace services
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    tokens: RwLock<Option<TokenPair>>,
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `https://host/backend/api/v1`)
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        // A base without a trailing slash would drop its last path segment
        // on join
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url =
            Url::parse(&normalized).map_err(|_| Error::invalid_base_url(base_url))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::invalid_base_url(base_url.as_str()));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            tokens: RwLock::new(None),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn set_tokens(&self, pair: TokenPair) {
        *self.tokens.write().await = Some(pair);
    }

    pub async fn clear_tokens(&self) {
        *self.tokens.write().await = None;
    }

    pub async fn is_authenticated(&self) -> bool {
        self.tokens.read().await.is_some()
    }

    /// GET `path` with query parameters, deserializing the JSON response
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let value = self.request(Method::GET, path, query, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// POST `path` with a JSON body, deserializing the JSON response
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        let value = self.request(Method::POST, path, &[], Some(body)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// POST `path` with no body, discarding the response
    pub async fn post_empty(&self, path: &str) -> Result<()> {
        self.request(Method::POST, path, &[], None).await?;
        Ok(())
    }

    /// PUT `path` with a JSON body, discarding the response
    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let body = serde_json::to_value(body)?;
        self.request(Method::PUT, path, &[], Some(body)).await?;
        Ok(())
    }

    /// PATCH `path` with an optional JSON body, discarding the response
    pub async fn patch<B: Serialize>(&self, path: &str, body: Option<&B>) -> Result<()> {
        let body = body.map(serde_json::to_value).transpose()?;
        self.request(Method::PATCH, path, &[], body).await?;
        Ok(())
    }

    /// DELETE `path`, discarding the response
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.request(Method::DELETE, path, &[], None).await?;
        Ok(())
    }

    /// Relative `path` resolved against the base URL
    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|_| Error::invalid_base_url(path))
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value> {
        match self
            .send_once(method.clone(), path, query, body.clone())
            .await
        {
            Err(Error::Api { status: 401, .. }) if path != "auth/refresh" => {
                self.refresh_tokens().await?;
                self.send_once(method, path, query, body).await
            }
            other => other,
        }
    }

    async fn send_once(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value> {
        let url = self.endpoint(path)?;
        let mut builder = self.http.request(method, url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(token) = self.tokens.read().await.as_ref().map(|t| t.access.clone()) {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(Error::api(status.as_u16(), message));
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Exchange the refresh token for a new pair; clears tokens on failure
    async fn refresh_tokens(&self) -> Result<()> {
        let refresh = match self.tokens.read().await.as_ref() {
            Some(pair) => pair.refresh.clone(),
            None => return Err(Error::SessionExpired),
        };

        debug!("access token rejected, refreshing");
        let body = serde_json::json!({ "refreshToken": refresh });
        let outcome = self
            .send_once(Method::POST, "auth/refresh", &[], Some(body))
            .await;

        match outcome {
            Ok(value) => {
                let parsed: RefreshResponse = serde_json::from_value(value)?;
                self.set_tokens(TokenPair {
                    access: parsed.token,
                    refresh: parsed.refresh_token,
                })
                .await;
                Ok(())
            }
            Err(err) => {
                warn!("token refresh failed: {err}");
                self.clear_tokens().await;
                Err(Error::SessionExpired)
            }
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}
