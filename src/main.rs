//! # Library Catalog CLI
//!
//! This is the binary entry point for the `library-catalog` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Initializing logging.
//! - Executing the appropriate command based on the parsed arguments.
//!
//! The catalog itself lives in the `library_catalog` library crate; the
//! binary is a thin wrapper that loads a seed file and wires the library to
//! stdin and stdout.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
