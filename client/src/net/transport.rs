//! HTTP seam between the widget and the webhook.
//!
//! Client-side (hydrate): [`BrowserTransport`] posts through `gloo-net`.
//! Server-side (SSR): the browser transport reports itself unavailable; the
//! host server supplies its own `reqwest` implementation.
//!
//! ERROR HANDLING
//! ==============
//! A transport only fails when no HTTP response was obtained. Status codes
//! are returned as data so callers can apply their own classification.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::rc::Rc;

use serde_json::Value;

/// Status line and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    /// Response body; empty when it could not be read.
    pub body: String,
}

impl TransportResponse {
    /// True for statuses in the `200..=299` range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure to obtain any HTTP response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Connection refused, DNS failure, CORS rejection, timeout, etc.
    #[error("{0}")]
    Network(String),

    /// The request body could not be encoded.
    #[error("could not encode request: {0}")]
    Encode(String),

    /// No HTTP stack in this build (SSR render of a browser-only path).
    #[error("webhook transport not available on server")]
    Unavailable,
}

/// POSTs a JSON document to a URL and returns the raw response.
#[async_trait::async_trait(?Send)]
pub trait WebhookTransport {
    /// Send `body` with `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no response was received.
    async fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse, TransportError>;
}

#[async_trait::async_trait(?Send)]
impl<T: WebhookTransport + ?Sized> WebhookTransport for Rc<T> {
    async fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse, TransportError> {
        (**self).post_json(url, body).await
    }
}

/// `fetch`-backed transport used by the hydrated widget.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl WebhookTransport for BrowserTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(body)
                .map_err(|e| TransportError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Ok(TransportResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(TransportError::Unavailable)
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
