//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `connection`) so components depend on
//! small focused models. Both are plain structs wrapped in `RwSignal` and
//! provided via context; `store` abstracts that wrapper for the lifecycle
//! code so it can run against a `RefCell` in tests.

pub mod chat;
pub mod connection;
pub mod store;
