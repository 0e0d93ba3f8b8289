//! Compile-and-run workflow
//!
//! The orchestrator sequences save, compiler resolution, flag assembly,
//! compilation and the optional run for one of six actions.

pub mod action;
pub mod document;
pub mod orchestrator;

pub use action::Action;
pub use document::{Document, SourceFile};
pub use orchestrator::{Launcher, Orchestrator, Outcome, WorkflowState};
