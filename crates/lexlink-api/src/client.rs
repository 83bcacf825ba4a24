// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP transport for the backend's request/response API.
//!
//! Provides [`ApiClient`], which handles request construction, bearer
//! authentication, transient-error retry, and mapping of the backend's
//! `{"error": "..."}` bodies into [`LexlinkError`].

use std::time::Duration;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use lexlink_config::model::ApiConfig;
use lexlink_core::LexlinkError;

/// HTTP client for backend API communication.
///
/// Manages connection pooling, the stored bearer credential, and retry
/// logic for transient errors (429, 500, 503). Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    max_retries: u32,
    token: Option<SecretString>,
}

/// The backend's error body shape.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    error: String,
}

impl ApiClient {
    /// Creates a client from the `[api]` config section.
    pub fn new(config: &ApiConfig) -> Result<Self, LexlinkError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LexlinkError::Api {
                message: format!("failed to build HTTP client: {e}"),
                status: None,
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
            token: None,
        })
    }

    /// Attaches the bearer credential used for authorized calls.
    pub fn set_token(&mut self, token: SecretString) {
        self.token = Some(token);
    }

    /// Drops the stored credential (logout, or after `AuthExpired`).
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(&self, rb: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => rb.bearer_auth(token.expose_secret()),
            None => rb,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, LexlinkError> {
        let req = self.authorized(self.http.get(self.url(path)));
        let response = self.send_with_retry(req).await?;
        Self::decode(response).await
    }

    pub(crate) async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, LexlinkError> {
        let req = self.authorized(self.http.get(self.url(path)).query(query));
        let response = self.send_with_retry(req).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, LexlinkError> {
        let req = self.authorized(self.http.post(self.url(path)).json(body));
        let response = self.send_with_retry(req).await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, LexlinkError> {
        let req = self.authorized(self.http.put(self.url(path)).json(body));
        let response = self.send_with_retry(req).await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, LexlinkError> {
        let req = self.authorized(self.http.delete(self.url(path)));
        let response = self.send_with_retry(req).await?;
        Self::decode(response).await
    }

    /// Sends a request, retrying once per `max_retries` after a 1-second
    /// delay on transient statuses.
    async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, LexlinkError> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying request after transient error");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }

            let rb = req.try_clone().ok_or_else(|| {
                LexlinkError::Internal("request body cannot be cloned for retry".into())
            })?;

            let response = rb.send().await.map_err(|e| LexlinkError::Api {
                message: format!("HTTP request failed: {e}"),
                status: None,
                source: Some(Box::new(e)),
            })?;

            let status = response.status();
            debug!(status = %status, attempt, "response received");

            if status.is_success() {
                return Ok(response);
            }

            if is_transient_error(status) && attempt < self.max_retries {
                let body = response.text().await.unwrap_or_default();
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(LexlinkError::Api {
                    message: format!("API returned {status}: {body}"),
                    status: Some(status.as_u16()),
                    source: None,
                });
                continue;
            }

            return Err(Self::map_failure(status, response).await);
        }

        Err(last_error.unwrap_or_else(|| LexlinkError::Api {
            message: "request failed after retries".into(),
            status: None,
            source: None,
        }))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, LexlinkError> {
        let body = response.text().await.map_err(|e| LexlinkError::Api {
            message: format!("failed to read response body: {e}"),
            status: None,
            source: Some(Box::new(e)),
        })?;
        serde_json::from_str(&body).map_err(|e| LexlinkError::Api {
            message: format!("failed to parse API response: {e}"),
            status: None,
            source: Some(Box::new(e)),
        })
    }

    /// Maps a non-success response into the client error taxonomy.
    async fn map_failure(status: StatusCode, response: reqwest::Response) -> LexlinkError {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| format!("API returned {status}: {body}"));

        match status.as_u16() {
            401 | 403 => LexlinkError::AuthExpired,
            404 => LexlinkError::NotFound { resource: message },
            409 => LexlinkError::SlotConflict { message },
            400 => LexlinkError::Validation(message),
            _ => LexlinkError::Api {
                message,
                status: Some(status.as_u16()),
                source: None,
            },
        }
    }
}

/// True for HTTP status codes that indicate transient errors worth retrying.
fn is_transient_error(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503)
}
