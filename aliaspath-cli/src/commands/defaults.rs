//! Defaults command implementation.

use crate::commands::TableFormat;
use crate::error::CliError;
use crate::utils::{format_table, GlobalOptions};
use aliaspath::PathResolver;
use clap::Args;

/// Show the built-in alias table used when no aliases are configured.
#[derive(Args)]
pub struct DefaultsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: TableFormat,
}

impl DefaultsCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let table = PathResolver::default_paths();
        let output = format_table(&self.format.to_output_format(None)?, "", &table)?;
        println!("{output}");
        Ok(())
    }
}
