//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `parse`: Parse a path and print its normalized encoding
//! - `inspect`: Describe a path's kind, depth, segments and ids
//! - `ancestors`: List the views from a path toward its root
//! - `apply`: Resolve a relative path against a canonical base
//! - `validate`: Check a list of paths, one per line
//! - `completions`: Generate shell completion scripts

pub mod ancestors;
pub mod apply;
pub mod completions;
pub mod inspect;
pub mod parse;
pub mod validate;

pub use ancestors::AncestorsCommand;
pub use apply::ApplyCommand;
pub use completions::CompletionsCommand;
pub use inspect::InspectCommand;
pub use parse::ParseCommand;
pub use validate::ValidateCommand;
