//! Resolve command implementation.

use crate::error::CliError;
use crate::utils::{load_resolver, GlobalOptions};
use clap::Args;

/// Resolve an alias name or path template to a canonical path.
#[derive(Args)]
pub struct ResolveCommand {
    /// Alias name (e.g. `files`) or template (e.g. `%web%/index.php`)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Do not anchor relative results to the root
    #[arg(long)]
    pub relative: bool,

    /// Extra segment appended before canonicalization
    #[arg(long, value_name = "SEGMENT", default_value = "")]
    pub additional: String,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = load_resolver(global)?;
        let resolved = resolver.resolve_with(&self.path, !self.relative, &self.additional)?;
        println!("{resolved}");
        Ok(())
    }
}
