//! Homework status API client.
//!
//! One authenticated `GET` per poll cycle against the review service's
//! status endpoint. The response body is handed back as raw JSON; shape
//! checks live in [`crate::domain::check_response`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::PollError;
use crate::port::StatusSource;

/// HTTP client for the homework status endpoint.
pub struct PracticumClient {
    http: HttpClient,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Create a client for `endpoint` authenticating with `token`.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Full status URL, query string excluded
    /// * `token` - OAuth token sent as `Authorization: OAuth <token>`
    /// * `timeout` - Optional whole-request timeout; `None` keeps the
    ///   reqwest default (no timeout)
    #[must_use]
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().unwrap_or_else(|err| {
            warn!(error = %err, "Failed to build HTTP client, using defaults");
            HttpClient::new()
        });

        Self {
            http,
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api().endpoint.clone(),
            config.credentials.practicum_token(),
            config.api().request_timeout(),
        )
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError> {
        debug!(endpoint = %self.endpoint, from_date, "Requesting homework statuses");

        let response = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(PollError::Network)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Status API returned unexpected status");
            return Err(PollError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(PollError::Network)?;
        let value = serde_json::from_slice(&body).map_err(PollError::InvalidJson)?;
        debug!(bytes = body.len(), "Received homework statuses");

        Ok(value)
    }
}
