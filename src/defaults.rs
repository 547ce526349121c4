//! Default values for library-catalog.
//!
//! This module provides centralized default values used by the library and
//! the CLI, ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Number of slots a new collection starts with.
pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

/// File name of the seed file looked up in the current directory.
pub const DEFAULT_SEED_FILENAME: &str = "library.yaml";

/// Environment variable that overrides the seed file path.
pub const SEED_ENV_VAR: &str = "LIBRARY_SEED";

/// Returns the default seed file path, relative to the current directory.
///
/// This can be overridden by the `--seed` CLI flag or the `LIBRARY_SEED`
/// environment variable.
pub fn default_seed_path() -> PathBuf {
    PathBuf::from(DEFAULT_SEED_FILENAME)
}
