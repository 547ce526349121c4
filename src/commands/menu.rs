//! # Menu Command Implementation
//!
//! This module implements the `menu` subcommand, the default when no
//! subcommand is given. It loads the seed file and runs the interactive
//! console loop on stdin and stdout until the user quits or input ends.

use anyhow::Result;
use std::io;
use std::path::Path;

use library_catalog::menu::Menu;
use library_catalog::output::{emoji, OutputConfig};

/// Execute the `menu` command.
pub fn execute(seed: Option<&Path>, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let library = super::load_library(seed)?;

    println!(
        "{} Library Catalog ({} books, {} members)",
        emoji(&out, "📚", "[LIB]"),
        library.catalog().len(),
        library.registry().len()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(library, stdin.lock(), stdout.lock(), out);
    menu.run()?;

    log::debug!("Menu session ended");
    Ok(())
}
