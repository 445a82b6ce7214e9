//! Build-time widget configuration.
//!
//! The webhook URL is baked into the WASM bundle when the crate is compiled:
//! set `CHAT_WEBHOOK_URL` in the build environment to point the widget at a
//! different endpoint. There is no runtime override.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Endpoint used when `CHAT_WEBHOOK_URL` is unset at build time.
pub const DEFAULT_WEBHOOK_URL: &str = "http://localhost:5678/webhook/chat";

/// Delay between scheduled connectivity probes.
pub const PROBE_INTERVAL: Duration = Duration::from_secs(30);

/// Delay between a message being delivered and being marked read.
pub const READ_RECEIPT_DELAY: Duration = Duration::from_secs(1);

/// Webhook URL compiled into this build.
pub fn webhook_url() -> &'static str {
    resolve_webhook_url(option_env!("CHAT_WEBHOOK_URL"))
}

fn resolve_webhook_url(raw: Option<&'static str>) -> &'static str {
    raw.map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_WEBHOOK_URL)
}

/// Widget settings provided to components through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub webhook_url: String,
    pub probe_interval: Duration,
    pub read_receipt_delay: Duration,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            webhook_url: webhook_url().to_owned(),
            probe_interval: PROBE_INTERVAL,
            read_receipt_delay: READ_RECEIPT_DELAY,
        }
    }
}
