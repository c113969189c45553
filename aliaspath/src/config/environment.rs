//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `ALIASPATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::AliasConfig;
use crate::error::{Error, Result};
use std::env;

/// Environment variable overriding the resolver root.
pub const ROOT_ENV: &str = "ALIASPATH_ROOT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use aliaspath::config::{AliasConfig, EnvironmentConfig};
///
/// let mut config = AliasConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an empty or non-UTF-8 value.
    pub fn apply_overrides(config: &mut AliasConfig) -> Result<()> {
        match env::var(ROOT_ENV) {
            Ok(root) if root.trim().is_empty() => Err(Error::Validation {
                field: ROOT_ENV.into(),
                message: "Must not be empty".into(),
            }),
            Ok(root) => {
                log::debug!("{ROOT_ENV} overrides root with {root}");
                config.root = Some(root);
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(env::VarError::NotUnicode(_)) => Err(Error::Validation {
                field: ROOT_ENV.into(),
                message: "Must be valid UTF-8".into(),
            }),
        }
    }
}
