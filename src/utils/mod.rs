//! Utilities
//!
//! Output sinks and child output streaming.

pub mod output;
