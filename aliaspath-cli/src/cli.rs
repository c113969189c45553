//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, DefaultsCommand, ExplainCommand, ListCommand, NamesCommand, RawCommand,
    ResolveCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving path aliases.
#[derive(Parser)]
#[command(name = "aliaspath")]
#[command(version, about = "Resolve %alias% path templates", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Root directory relative paths are anchored to
    #[arg(long, value_name = "PATH", global = true, env = "ALIASPATH_ROOT")]
    pub root: Option<PathBuf>,

    /// Load aliases from this file instead of discovering aliaspath.yaml
    #[arg(long, value_name = "FILE", global = true, env = "ALIASPATH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve an alias name or path template
    Resolve(ResolveCommand),

    /// Resolve and list every alias
    List(ListCommand),

    /// Show raw alias templates
    Raw(RawCommand),

    /// List alias names
    Names(NamesCommand),

    /// Show the built-in alias table
    Defaults(DefaultsCommand),

    /// Validate an alias configuration file
    Validate(ValidateCommand),

    /// Show how an alias is assembled from other aliases
    Explain(ExplainCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
