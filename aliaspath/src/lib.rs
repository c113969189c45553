#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # aliaspath
//!
//! A library for resolving named, possibly self-referential path aliases
//! into absolute canonical paths.
//!
//! An alias table maps names to templates such as `%web%/files`. The
//! [`PathResolver`] substitutes `%name%` references recursively, anchors
//! relative results to a fixed root, canonicalizes the outcome, and reports
//! cycles instead of recursing forever.
//!
//! ## Core Types
//!
//! - [`PathResolver`]: Alias table and resolution
//! - [`AliasConfig`] and [`ConfigBuilder`]: YAML configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use aliaspath::PathResolver;
//!
//! let resolver = PathResolver::with_defaults("/srv/app").unwrap();
//! assert_eq!(resolver.resolve("files").unwrap(), "/srv/app/public/files");
//! assert_eq!(resolver.resolve("bolt_assets").unwrap(), "/srv/app/public/bolt-public");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{AliasConfig, ConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{PathResolver, ROOT_ALIAS};
