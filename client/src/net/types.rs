//! Wire DTOs exchanged with the webhook.
//!
//! DESIGN
//! ======
//! Replies are free-form JSON owned by the remote workflow. A reply that is
//! not an object carries no fields. Within an object, empty strings, `0`,
//! `false` and `null` count as absent; other strings, numbers and `true` are
//! shown as text.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Fixed `sender` value for outbound chat messages.
pub const USER_SENDER: &str = "user";

/// Fixed `message` value of the connectivity probe payload.
pub const PROBE_MESSAGE: &str = "Connection test";

/// Body of one outbound chat message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub message: String,
    /// ISO-8601 instant the request was built.
    pub timestamp: String,
    pub sender: String,
}

impl OutgoingMessage {
    /// Build a user-originated message body.
    pub fn user(message: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self { message: message.into(), timestamp: timestamp.into(), sender: USER_SENDER.to_owned() }
    }
}

/// Body of the connectivity probe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbePayload {
    pub test: bool,
    pub message: String,
}

impl Default for ProbePayload {
    fn default() -> Self {
        Self { test: true, message: PROBE_MESSAGE.to_owned() }
    }
}

/// Parsed webhook reply. Unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WebhookReply {
    /// Extract the reply fields from an arbitrary JSON document.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let field = |name: &str| value.get(name).and_then(scalar_text);
        Self { message: field("message"), response: field("response"), error: field("error") }
    }

    /// Text to show for this reply: `message`, then `response`, then `fallback`.
    pub fn text_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message
            .as_deref()
            .or(self.response.as_deref())
            .unwrap_or(fallback)
    }
}

/// Display text for a scalar reply field, `None` when it is blank or falsy.
fn scalar_text(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f.abs() > 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_owned()),
        _ => None,
    }
}
