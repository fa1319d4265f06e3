//! HTTP client for the timer log endpoint.
//!
//! Wraps `POST /api/timers` and `GET /api/timers` using [`reqwest`].

use serde::{Deserialize, Serialize};

/// Body of `POST /api/timers`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimerLogRequest {
    pub configured_minutes: u32,
    /// RFC 3339 timestamp of the moment Start was pressed.
    pub executed_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A timer log row as returned by the endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimerLogView {
    pub id: i64,
    pub configured_minutes: f64,
    pub executed_at: String,
    #[serde(default)]
    pub label: String,
    pub created_at: String,
}

/// Errors from the timer log HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx status code.
    #[error("Timer log API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// HTTP client for one timer log server.
#[derive(Debug, Clone)]
pub struct TimerLogClient {
    client: reqwest::Client,
    base_url: String,
}

impl TimerLogClient {
    /// * `base_url` - Server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Record one timer start and return the stored row.
    pub async fn create(&self, request: &CreateTimerLogRequest) -> Result<TimerLogView, ClientError> {
        let response = self
            .client
            .post(self.timers_url())
            .json(request)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the most recent timer logs, newest first.
    pub async fn list(&self) -> Result<Vec<TimerLogView>, ClientError> {
        let response = self.client.get(self.timers_url()).send().await?;

        Self::parse_response(response).await
    }

    fn timers_url(&self) -> String {
        format!("{}/api/timers", self.base_url)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}
