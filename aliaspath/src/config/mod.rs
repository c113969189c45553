//! Configuration system for aliaspath.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (`aliaspath.yaml`, `aliaspath.local.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of alias names and references
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`ALIASPATH_ROOT`)
//! 3. Private project config (`aliaspath.local.yaml`)
//! 4. Project config (`aliaspath.yaml`)
//! 5. Built-in defaults (no root, default alias table)
//!
//! An explicit file given with `ConfigBuilder::with_config_file` replaces
//! discovery of levels 3 and 4.
//!
//! # Examples
//!
//! ```no_run
//! use aliaspath::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let resolver = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build_resolver()
//!     .unwrap();
//!
//! println!("{}", resolver.resolve("files").unwrap());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE, LOCAL_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::AliasConfig;
pub use validator::ConfigValidator;
