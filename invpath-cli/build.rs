//! Build script for invpath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("invpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse, inspect and resolve inventory paths")
        .long_about(
            "Command-line tool for typed inventory paths such as /t;acme/e;prod/f;agent/r;host",
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
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("PATH")
                .global(true)
                .env("INVPATH_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("parse")
                .about("Parse a path and print its normalized encoding")
                .long_about("Decode a canonical or relative path and print it re-encoded"),
            Command::new("inspect")
                .about("Describe a path: kind, depth, segments and ids")
                .long_about("Print a report of a path as text, JSON or YAML"),
            Command::new("ancestors")
                .about("List the views from a path toward its root")
                .long_about("Print each shorter view of a path, ascending or descending"),
            Command::new("apply")
                .about("Resolve a relative path against a canonical base")
                .long_about("Apply a relative path to --base or the configured base path"),
            Command::new("validate")
                .about("Validate paths, one per line")
                .long_about("Check every path in a file or on standard input"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR not set"))?;
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    // Generate main invpath.1 man page
    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("invpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
