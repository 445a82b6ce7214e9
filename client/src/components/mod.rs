//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the widget chrome and thread while reading/writing
//! shared state from Leptos context providers.

pub mod chat_window;
pub mod connection_banner;
pub mod message_bubble;
pub mod typing_indicator;
