//! Process execution
//!
//! Compiler spawning, the run descriptor, and the terminals a compiled
//! program can be handed to.

pub mod executor;
pub mod run_spec;
pub mod terminal;

pub use executor::{CompileStatus, CompilerInvocation, ProcessHost, SystemExecutor};
pub use run_spec::RunSpec;
pub use terminal::ExternalTerminal;
