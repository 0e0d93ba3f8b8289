//! Compile verdicts
//!
//! Classification of a finished compiler process.

pub mod compile;

pub use compile::{classify, CompileVerdict, FailureCause};
