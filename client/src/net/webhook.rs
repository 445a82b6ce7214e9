//! Webhook client: one POST per user message, JSON reply back.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and unparseable bodies all collapse
//! into [`WebhookError`]; its `Display` text is the single string the chat
//! window shows beneath the input.

#[cfg(test)]
#[path = "webhook_test.rs"]
mod webhook_test;

use super::transport::{TransportError, WebhookTransport};
use super::types::{OutgoingMessage, WebhookReply};
use crate::util::time;

/// Failure of one send round trip.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WebhookError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("invalid webhook reply: {0}")]
    Parse(String),
}

/// Client bound to a single webhook URL.
///
/// Holds no per-request state: busy and error flags belong to the caller's
/// conversation store, so concurrent calls cannot clobber each other.
pub struct WebhookClient<T> {
    transport: T,
    url: String,
}

impl<T: WebhookTransport> WebhookClient<T> {
    pub fn new(transport: T, url: impl Into<String>) -> Self {
        Self { transport, url: url.into() }
    }

    /// POST `text` as a user message and parse the reply.
    ///
    /// The caller is responsible for passing already-trimmed, non-empty text.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError`] on transport failure, a non-2xx status, or a
    /// body that is not valid JSON or is `null`.
    pub async fn send(&self, text: &str) -> Result<WebhookReply, WebhookError> {
        let timestamp = time::to_iso8601(time::now()).map_err(|e| TransportError::Encode(e.to_string()))?;
        let body = serde_json::to_value(OutgoingMessage::user(text, timestamp))
            .map_err(|e| TransportError::Encode(e.to_string()))?;

        let resp = self.transport.post_json(&self.url, &body).await?;
        if !resp.is_success() {
            return Err(WebhookError::Status(resp.status));
        }

        let value: serde_json::Value =
            serde_json::from_str(&resp.body).map_err(|e| WebhookError::Parse(e.to_string()))?;
        if value.is_null() {
            return Err(WebhookError::Parse("reply is null".to_owned()));
        }
        Ok(WebhookReply::from_value(&value))
    }
}
