//! Output formatting for resolved alias tables.
//!
//! This module provides various output formats for displaying alias to path
//! mappings, including shell-specific export statements, JSON, YAML, dotenv
//! format, and human-readable output.

mod formatters;
mod shell;

use std::collections::BTreeMap;

use crate::Result;

pub use formatters::{
    DotenvFormatter, ExportFormatter, HumanFormatter, JsonFormatter, YamlFormatter,
};
pub use shell::ShellType;

/// Trait for formatting alias tables into different output formats.
pub trait OutputFormatter {
    /// Format the given alias table into a string.
    ///
    /// # Arguments
    ///
    /// * `paths` - Map from alias names to paths or templates
    ///
    /// # Errors
    ///
    /// Returns an error if the formatting fails (e.g., invalid environment variable names).
    fn format(&self, paths: &BTreeMap<String, String>) -> Result<String>;
}

/// Available output formats for alias tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Shell-specific export statements.
    Export(ShellType),
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
    /// Dotenv (.env file) format.
    Dotenv,
    /// Human-readable format.
    Human,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Prepended to environment variable names by the export
    ///   and dotenv formats; ignored by the others.
    ///
    /// # Examples
    ///
    /// ```
    /// use aliaspath::output::OutputFormat;
    /// use std::collections::BTreeMap;
    ///
    /// let mut paths = BTreeMap::new();
    /// paths.insert("web".to_string(), "/srv/app/public".to_string());
    ///
    /// let output = OutputFormat::Dotenv.create_formatter("APP_").format(&paths).unwrap();
    /// assert_eq!(output, "APP_WEB=/srv/app/public");
    /// ```
    #[must_use]
    pub fn create_formatter(&self, prefix: &str) -> Box<dyn OutputFormatter> {
        match self {
            Self::Export(shell) => Box::new(ExportFormatter::new(*shell, prefix)),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
            Self::Dotenv => Box::new(DotenvFormatter::new(prefix)),
            Self::Human => Box::new(HumanFormatter),
        }
    }
}
