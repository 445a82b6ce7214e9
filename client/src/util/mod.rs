//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Identifier and clock helpers are kept free of component logic so state
//! transitions can be tested without a browser.

pub mod ids;
pub mod time;
