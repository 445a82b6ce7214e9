//! Networking modules for the external webhook.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `transport` is the HTTP seam (browser
//! `gloo-net` in hydrate builds, swappable in tests and on the host server),
//! and `webhook` / `probe` implement the two exchanges the widget performs.

pub mod probe;
pub mod transport;
pub mod types;
pub mod webhook;
