//! List command implementation.
//!
//! This module implements the `list` command, which resolves every alias
//! and prints the table in various formats (human, JSON, YAML, dotenv,
//! shell exports).

use crate::error::CliError;
use crate::utils::{format_table, load_resolver, GlobalOptions};
use aliaspath::output::{OutputFormat, ShellType};
use clap::{Args, ValueEnum};

/// Resolve every alias and print the resulting table.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "human",
        env = "ALIASPATH_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: TableFormat,

    /// Shell for `--format export` (detected when omitted)
    #[arg(long, value_name = "SHELL")]
    pub shell: Option<String>,

    /// Prefix for variable names in `dotenv` and `export` output
    #[arg(long, value_name = "PREFIX", default_value = "")]
    pub prefix: String,
}

/// Output format for alias tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TableFormat {
    /// Aligned `name  path` lines
    Human,
    /// JSON object
    Json,
    /// YAML mapping
    Yaml,
    /// `NAME=path` lines
    Dotenv,
    /// Shell export statements
    Export,
}

impl TableFormat {
    /// Map to the library output format, picking a shell for exports.
    pub fn to_output_format(self, shell: Option<&str>) -> Result<OutputFormat, CliError> {
        Ok(match self {
            Self::Human => OutputFormat::Human,
            Self::Json => OutputFormat::Json,
            Self::Yaml => OutputFormat::Yaml,
            Self::Dotenv => OutputFormat::Dotenv,
            Self::Export => {
                let shell = match shell {
                    Some(name) => ShellType::from_string(name)
                        .map_err(|e| CliError::InvalidArguments(e.to_string()))?,
                    None => ShellType::detect(),
                };
                OutputFormat::Export(shell)
            }
        })
    }
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.shell.is_some() && self.format != TableFormat::Export {
            return Err(CliError::InvalidArguments(
                "--shell requires --format export".to_string(),
            ));
        }

        let format = self.format.to_output_format(self.shell.as_deref())?;
        let resolver = load_resolver(global)?;
        let table = resolver.resolve_all()?;

        let output = format_table(&format, &self.prefix, &table)?;
        println!("{output}");
        Ok(())
    }
}
