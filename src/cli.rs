//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;
use library_catalog::defaults::SEED_ENV_VAR;

/// Library Catalog - Manage books, members and loans in memory
#[derive(Parser, Debug)]
#[command(name = "library-catalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (defaults to the interactive menu)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed file with the initial books and members.
    ///
    /// Defaults to `library.yaml` in the current directory, which may be
    /// absent. A file named here must exist.
    #[arg(long, global = true, value_name = "FILE", env = SEED_ENV_VAR)]
    seed: Option<PathBuf>,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive menu
    Menu,
    /// Print the books and members from the seed file
    List(commands::list::ListArgs),
    /// Check a seed file without starting the menu
    Validate,
    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let seed = self.seed.as_deref();
        match self.command.unwrap_or(Commands::Menu) {
            Commands::Menu => commands::menu::execute(seed, &self.color),
            Commands::List(args) => commands::list::execute(args, seed, &self.color),
            Commands::Validate => commands::validate::execute(seed, &self.color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Send `log` records to stderr; `RUST_LOG` takes precedence over the flag.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A second initialization (e.g. in tests) is harmless
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
