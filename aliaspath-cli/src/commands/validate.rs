//! Command to validate an aliaspath configuration file.

use crate::error::CliError;
use crate::utils::{path_to_str, GlobalOptions};
use aliaspath::config::{ConfigLoader, ConfigValidator};
use aliaspath::path::normalize;
use clap::Args;
use std::env;
use std::path::{Path, PathBuf};

/// Validate an aliaspath configuration file.
///
/// Checks the schema, alias names and references, then resolves every
/// alias so that cycles are reported too.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Check file exists
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        // 2. Parse the file. Loading it by absolute path anchors a relative
        //    root at the file's directory exactly once.
        let cwd = env::current_dir()?;
        let file = normalize::make_absolute(path_to_str(&self.config_path)?, path_to_str(&cwd)?);
        let source = match ConfigLoader::load_source(Path::new(&file), 1) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        // 3. Check names and references
        if let Err(e) = ConfigValidator::validate(&source.config) {
            eprintln!("Validation error: {e}");
            return Err(CliError::SemanticFailure(
                "Configuration validation failed".to_string(),
            ));
        }

        // 4. Resolve everything, rooted at the file's directory unless it
        //    names its own root
        let dir = normalize::make_absolute("..", &file);

        let outcome = source
            .config
            .build_resolver(Path::new(&dir), &dir)
            .and_then(|resolver| resolver.resolve_all().map(|table| (resolver, table)));

        match outcome {
            Ok((resolver, table)) => {
                println!("Configuration is valid ({} aliases)", table.len().saturating_sub(1));
                println!("Root: {}", resolver.root());
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}
