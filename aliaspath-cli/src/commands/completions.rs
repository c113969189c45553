//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "aliaspath";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            self.print_instructions();
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }

    /// Installation hints, on stderr so the script itself stays clean.
    fn print_instructions(&self) {
        eprintln!("# Generating {} completion script", self.shell);
        match self.shell {
            Shell::Bash => {
                eprintln!("#   aliaspath completions bash > ~/.local/share/bash-completion/completions/aliaspath");
                eprintln!("# Or add to ~/.bashrc:");
                eprintln!("#   eval \"$(aliaspath completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   aliaspath completions zsh > ~/.zsh/completions/_aliaspath");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
            }
            Shell::Fish => {
                eprintln!("#   aliaspath completions fish > ~/.config/fish/completions/aliaspath.fish");
            }
            Shell::PowerShell => {
                eprintln!("#   aliaspath completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }
    }
}
