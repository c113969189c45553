//! Configuration validation.

use crate::config::schema::AliasConfig;
use crate::error::{Error, Result};
use crate::path::{template, PathResolver, ROOT_ALIAS};
use std::collections::BTreeSet;

/// Validates alias configuration.
///
/// # Examples
///
/// ```
/// use aliaspath::config::{AliasConfig, ConfigValidator};
///
/// let config = AliasConfig::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// Checks alias names, rejects a `root` entry in `paths`, and verifies
    /// that every template only references known aliases without referencing
    /// itself. Cycles longer than one alias are left to resolution.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: [`Error::SelfReference`] for a
    /// template naming its own alias, [`Error::Validation`] otherwise.
    pub fn validate(config: &AliasConfig) -> Result<()> {
        if let Some(ref root) = config.root {
            if root.trim().is_empty() {
                return Err(Error::Validation {
                    field: "root".into(),
                    message: "Cannot be empty".into(),
                });
            }
        }

        let known: BTreeSet<String> = if config.paths.is_empty() {
            PathResolver::default_paths().into_keys().collect()
        } else {
            config.paths.keys().cloned().collect()
        };

        for (name, raw) in &config.paths {
            Self::validate_alias_name(name)?;

            if template::contains_token(raw, name) {
                return Err(Error::SelfReference {
                    name: name.clone(),
                    template: raw.clone(),
                });
            }

            for reference in template::references(raw) {
                if reference != ROOT_ALIAS && !known.contains(&reference) {
                    return Err(Error::Validation {
                        field: format!("paths.{name}"),
                        message: format!("References undefined alias %{reference}%"),
                    });
                }
            }
        }

        Ok(())
    }

    /// Validate an alias name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, reserved, or contains `%`, a
    /// path separator or whitespace.
    pub fn validate_alias_name(name: &str) -> Result<()> {
        let field = format!("paths.{name}");

        if name.is_empty() {
            return Err(Error::Validation {
                field: "paths".into(),
                message: "Alias names cannot be empty".into(),
            });
        }

        if name == ROOT_ALIAS {
            return Err(Error::Validation {
                field,
                message: format!("'{ROOT_ALIAS}' is reserved; set the top-level root instead"),
            });
        }

        if let Some(bad) = name
            .chars()
            .find(|c| *c == '%' || *c == '/' || *c == '\\' || c.is_whitespace())
        {
            return Err(Error::Validation {
                field,
                message: format!("Alias names cannot contain {bad:?}"),
            });
        }

        Ok(())
    }
}
