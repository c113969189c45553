//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve an alias name or path template
//! - `list`: Resolve every alias and print the table
//! - `raw`: Show raw alias templates
//! - `names`: List alias names
//! - `defaults`: Show the built-in alias table
//! - `validate`: Validate an alias configuration file
//! - `explain`: Show the reference tree of an alias
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod defaults;
pub mod explain;
pub mod list;
pub mod names;
pub mod raw;
pub mod resolve;
pub mod validate;

pub use completions::CompletionsCommand;
pub use defaults::DefaultsCommand;
pub use explain::ExplainCommand;
pub use list::{ListCommand, TableFormat};
pub use names::NamesCommand;
pub use raw::RawCommand;
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;
