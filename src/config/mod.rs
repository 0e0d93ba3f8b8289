//! Configuration
//!
//! Shared types, error taxonomy, and user settings.

pub mod settings;
pub mod types;
