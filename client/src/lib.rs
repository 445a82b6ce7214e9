//! # chat-client
//!
//! Leptos + WASM chat widget that relays typed messages to a single external
//! webhook and renders the replies as a conversation thread.
//!
//! This crate contains the conversation and connectivity state, the webhook
//! wire types and HTTP transport seam, the send lifecycle and probe schedule,
//! and the components that render them. The `server` crate hosts it with SSR.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
