//! Observability
//!
//! Structured workflow events correlated by invocation id.

pub mod events;
