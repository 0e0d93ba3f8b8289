//! Toolchain lookup.
//!
//! Maps documents to a language kind and resolves the compiler configured
//! for it. Compilation itself is delegated to the external compiler.

pub mod registry;
pub mod resolver;

pub use registry::{language_for_id, language_id_for_path};
pub use resolver::{is_reachable, CompilerResolver};
