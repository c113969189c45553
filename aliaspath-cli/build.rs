//! Build script for aliaspath-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is described here by hand.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("aliaspath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve %alias% path templates")
        .long_about(
            "Resolve named path aliases such as %web%/files into absolute canonical paths",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .help("Root directory relative paths are anchored to")
                .value_name("PATH")
                .global(true)
                .env("ALIASPATH_ROOT"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load aliases from this file instead of discovering aliaspath.yaml")
                .value_name("FILE")
                .global(true)
                .env("ALIASPATH_CONFIG"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve an alias name or path template")
                .long_about("Substitute %alias% references, anchor to the root and canonicalize"),
            Command::new("list")
                .about("Resolve and list every alias")
                .long_about("Print every alias with its resolved path in various formats"),
            Command::new("raw")
                .about("Show raw alias templates")
                .long_about("Print alias templates as defined, without resolving them"),
            Command::new("names").about("List alias names"),
            Command::new("defaults")
                .about("Show the built-in alias table")
                .long_about("Print the aliases used when no alias table is configured"),
            Command::new("validate")
                .about("Validate an alias configuration file")
                .long_about("Check names and references, then resolve every alias"),
            Command::new("explain")
                .about("Show how an alias is assembled from other aliases")
                .long_about("Print the tree of aliases referenced by an alias"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("aliaspath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
