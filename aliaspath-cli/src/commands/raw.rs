//! Raw command implementation.
//!
//! Shows alias templates exactly as defined, without resolving them.

use crate::commands::TableFormat;
use crate::error::CliError;
use crate::utils::{format_table, load_resolver, GlobalOptions};
use clap::Args;

/// Show the raw template of one alias, or of every alias.
#[derive(Args)]
pub struct RawCommand {
    /// Alias to show; all aliases when omitted
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Output format for the full table
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: TableFormat,
}

impl RawCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = load_resolver(global)?;

        if let Some(ref name) = self.name {
            let raw = resolver
                .raw(name)
                .ok_or_else(|| CliError::SemanticFailure(format!("Alias '{name}' is not defined")))?;
            println!("{raw}");
            return Ok(());
        }

        let output = format_table(&self.format.to_output_format(None)?, "", &resolver.raw_all())?;
        println!("{output}");
        Ok(())
    }
}
