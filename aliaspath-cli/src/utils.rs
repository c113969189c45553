//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: building the
//! resolver from configuration and rendering alias tables.

use crate::error::CliError;
use aliaspath::config::{AliasConfig, ConfigBuilder};
use aliaspath::output::OutputFormat;
use aliaspath::PathResolver;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the resolver root.
    pub root: Option<PathBuf>,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Convert a path to UTF-8, reporting it as an invalid argument otherwise.
pub fn path_to_str(path: &Path) -> Result<&str, CliError> {
    path.to_str()
        .ok_or_else(|| CliError::InvalidArguments(format!("{} is not valid UTF-8", path.display())))
}

/// Build the resolver for the current invocation.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. `--root` (highest priority)
/// 2. Environment variables
/// 3. `--config`, or discovered `aliaspath.local.yaml` / `aliaspath.yaml`
/// 4. Built-in defaults rooted at the current directory (lowest priority)
pub fn load_resolver(global: &GlobalOptions) -> Result<PathResolver, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref file) = global.config {
        if !file.exists() {
            return Err(CliError::InvalidArguments(format!(
                "Configuration file not found: {}",
                file.display()
            )));
        }
        log::debug!("using configuration file {}", file.display());
        builder = builder.with_config_file(file);
    }

    if let Some(ref root) = global.root {
        log::debug!("root overridden with {}", root.display());
        builder = builder.with_config(AliasConfig {
            root: Some(path_to_str(root)?.to_string()),
            ..Default::default()
        });
    }

    builder.build_resolver().map_err(|e| {
        if e.is_resolution_error() || e.is_definition_error() {
            CliError::from(e)
        } else {
            CliError::Config(e.to_string())
        }
    })
}

/// Render an alias table in the given format.
pub fn format_table(
    format: &OutputFormat,
    prefix: &str,
    table: &BTreeMap<String, String>,
) -> Result<String, CliError> {
    format
        .create_formatter(prefix)
        .format(table)
        .map_err(CliError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(root: Option<&str>, config: Option<PathBuf>) -> GlobalOptions {
        GlobalOptions {
            verbose: false,
            quiet: false,
            root: root.map(PathBuf::from),
            config,
        }
    }

    #[test]
    fn test_load_resolver_root_override() {
        let resolver = load_resolver(&options(Some("/srv/app"), None)).unwrap();
        assert_eq!(resolver.root(), "/srv/app");
    }

    #[test]
    fn test_load_resolver_missing_config() {
        let err = load_resolver(&options(
            Some("/srv/app"),
            Some(PathBuf::from("/nonexistent/aliaspath.yaml")),
        ))
        .unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_format_table_human() {
        let mut table = BTreeMap::new();
        table.insert("web".to_string(), "/srv/app/public".to_string());
        let output = format_table(&OutputFormat::Human, "", &table).unwrap();
        assert_eq!(output, "web  /srv/app/public");
    }
}
