//! Names command implementation.

use crate::error::CliError;
use crate::utils::{load_resolver, GlobalOptions};
use clap::Args;

/// List the names of all defined aliases, one per line.
#[derive(Args)]
pub struct NamesCommand {}

impl NamesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = load_resolver(global)?;
        for name in resolver.names() {
            println!("{name}");
        }
        Ok(())
    }
}
