//! Connectivity prober: a coarse reachability check against the webhook.
//!
//! Any HTTP answer below 500 counts as reachable, including 4xx: the probe
//! body is not a real chat message, so a workflow rejecting it still proves
//! the endpoint is up.

#[cfg(test)]
#[path = "probe_test.rs"]
mod probe_test;

use super::transport::WebhookTransport;
use super::types::ProbePayload;
use crate::state::connection::Connectivity;

/// Classify an HTTP status code.
pub fn classify_status(status: u16) -> Connectivity {
    if status < 500 { Connectivity::Connected } else { Connectivity::Disconnected }
}

/// Prober bound to a single webhook URL.
pub struct ConnectivityProber<T> {
    transport: T,
    url: String,
}

impl<T: WebhookTransport> ConnectivityProber<T> {
    pub fn new(transport: T, url: impl Into<String>) -> Self {
        Self { transport, url: url.into() }
    }

    /// Send the diagnostic payload and classify the outcome. Never fails.
    pub async fn probe(&self) -> Connectivity {
        let body = match serde_json::to_value(ProbePayload::default()) {
            Ok(body) => body,
            Err(_) => return Connectivity::Disconnected,
        };
        match self.transport.post_json(&self.url, &body).await {
            Ok(resp) => classify_status(resp.status),
            Err(_) => Connectivity::Disconnected,
        }
    }
}
