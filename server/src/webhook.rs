//! Server-side webhook transport and the startup reachability check.
//!
//! The widget's [`ConnectivityProber`] is reused unchanged; only the HTTP
//! stack differs (`reqwest` here, `fetch` in the browser).

use std::time::Duration;

use async_trait::async_trait;
use chat_client::net::probe::ConnectivityProber;
use chat_client::net::transport::{TransportError, TransportResponse, WebhookTransport};
use chat_client::state::connection::Connectivity;
use serde_json::Value;

use crate::config::{ServerConfig, WebhookTimeouts};
use crate::error::ServerError;

/// `reqwest`-backed [`WebhookTransport`].
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns [`ServerError::HttpClient`] if the client cannot be built.
    pub fn new(timeouts: WebhookTimeouts) -> Result<Self, ServerError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| ServerError::HttpClient(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait(?Send)]
impl WebhookTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse, TransportError> {
        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Ok(TransportResponse { status, body })
    }
}

/// Probe the configured webhook once. `Ok(None)` when no URL is configured.
///
/// # Errors
///
/// Returns [`ServerError::HttpClient`] if the HTTP client cannot be built.
pub async fn startup_check(config: &ServerConfig) -> Result<Option<Connectivity>, ServerError> {
    let Some(url) = config.webhook_url.as_deref() else {
        return Ok(None);
    };
    let prober = ConnectivityProber::new(ReqwestTransport::new(config.timeouts)?, url);
    Ok(Some(prober.probe().await))
}

#[cfg(test)]
#[path = "webhook_test.rs"]
mod tests;
