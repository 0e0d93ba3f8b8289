//! ccrun: compile a single C or C++ source file and run the result
//!
//! # Architecture
//!
//! ## Configuration ([`config`])
//! - [`config::types`]: Compile targets, platforms, and the error taxonomy
//! - [`config::settings`]: JSON settings, defaults, and write-back of a corrected compiler path
//!
//! ## Toolchain ([`toolchain`])
//! - [`toolchain::registry`]: Language identifiers and extension detection
//! - [`toolchain::resolver`]: Compiler resolution and reachability checks
//!
//! ## Execution ([`exec`])
//! - [`exec::executor`]: Compiler invocation and the [`exec::ProcessHost`] seam
//! - [`exec::run_spec`]: Descriptor of a compiled program ready to run
//! - [`exec::terminal`]: Windows, Linux and macOS external terminal launchers
//!
//! ## Verdict ([`verdict`])
//! - [`verdict::compile`]: Success/failure classification of a compiler run
//!
//! ## Workflow ([`workflow`])
//! - [`workflow::orchestrator`]: The compile-and-run state machine
//! - [`workflow::action`]: The six entry actions
//! - [`workflow::document`]: The source file being acted on
//!
//! ## Prompts ([`prompt`]), Output ([`utils::output`]), Observability ([`observability`])
//!
//! # Behaviour
//!
//! 1. **Settings are a value** - resolved once per invocation and passed in
//! 2. **Cancellation is explicit** - prompts return value-or-cancelled, never a sentinel
//! 3. **Failures end only the invocation** - workflow failures are [`workflow::Outcome`]s
//! 4. **Compilation is delegated** - the external compiler decides, ccrun only classifies

// Configuration
pub mod config;

// Compiler lookup
pub mod toolchain;

// Process execution
pub mod exec;

// Compile verdicts
pub mod verdict;

// Compile-and-run workflow
pub mod workflow;

// User prompts
pub mod prompt;

// Output sinks
pub mod utils;

// Structured events
pub mod observability;

// CLI entrypoint
pub mod cli;

pub use config::types::*;
