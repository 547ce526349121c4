//! # Completions Command Implementation
//!
//! This module implements the `completions` subcommand, which writes a shell
//! completion script for `library-catalog` to stdout using `clap_complete`.
//!
//! ```bash
//! library-catalog completions bash > ~/.local/share/bash-completion/completions/library-catalog
//! library-catalog completions zsh > ~/.zfunc/_library-catalog
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for (bash, zsh, fish, powershell, elvish)
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}
