//! Main entry point for the aliaspath CLI.
//!
//! This is the command-line interface for the aliaspath resolver.
//! It provides commands for inspecting an alias table:
//! - `resolve`: Resolve an alias or template to a path
//! - `list`: Resolve every alias
//! - `raw` / `names`: Show the table without resolving it
//! - `explain`: Show which aliases an alias is built from

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library log records to stderr
    let logger = aliaspath::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: failed to install logger: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        root: cli.root,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Raw(cmd) => cmd.execute(&global),
        cli::Command::Names(cmd) => cmd.execute(&global),
        cli::Command::Defaults(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Explain(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
