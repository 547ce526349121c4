//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `library-catalog` command-line tool, one file per command.
//!
//! Each command module exposes an `execute` function, plus an `Args` struct
//! derived with `clap` when the command takes its own options. The helpers
//! below are shared by every command that needs the seeded library.

pub mod completions;
pub mod list;
pub mod menu;
pub mod validate;

use anyhow::Result;
use std::path::{Path, PathBuf};

use library_catalog::defaults::default_seed_path;
use library_catalog::library::Library;
use library_catalog::seed::{self, Seed};

/// Resolve the seed path and whether it must exist.
///
/// An explicitly given path is required; the default one is optional.
pub fn seed_location(seed: Option<&Path>) -> (PathBuf, bool) {
    match seed {
        Some(path) => (path.to_path_buf(), true),
        None => (default_seed_path(), false),
    }
}

/// Load the seed file, or an empty seed when the default file is absent
pub fn load_seed(seed: Option<&Path>) -> Result<Seed> {
    let (path, required) = seed_location(seed);
    if required && !path.exists() {
        return Err(seed_not_found(&path));
    }
    seed::load(&path, required)
        .map_err(|e| anyhow::anyhow!("Failed to load seed file {}: {}", path.display(), e))
}

/// Build the library described by the seed file
pub fn load_library(seed: Option<&Path>) -> Result<Library> {
    let seed = load_seed(seed)?;
    Library::from_seed(seed).map_err(|e| anyhow::anyhow!("Failed to build library: {}", e))
}

/// Error for a seed file that was named but does not exist.
pub fn seed_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Seed file not found: {path}\n\n\
         hint: Create a library.yaml file with `books:` and `members:` lists\n\
         hint: Use --seed to point at a different file\n\
         hint: Unset the LIBRARY_SEED environment variable to start empty",
        path = path.display()
    )
}
