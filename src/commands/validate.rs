//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which parses a seed file
//! and builds the library from it without starting the menu. Unlike the other
//! commands it requires the seed file to exist, even at its default path.

use anyhow::Result;
use std::path::Path;

use library_catalog::library::Library;
use library_catalog::output::{emoji, OutputConfig};
use library_catalog::seed;

/// Execute the `validate` command.
///
/// # Arguments
/// * `seed_path` - The value of the global --seed flag, if any
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(seed_path: Option<&Path>, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let (path, _) = super::seed_location(seed_path);
    println!(
        "{} Validating seed file: {}",
        emoji(&out, "🔍", "[SCAN]"),
        path.display()
    );

    if !path.exists() {
        return Err(super::seed_not_found(&path));
    }

    let parsed = match seed::from_file(&path) {
        Ok(parsed) => parsed,
        Err(e) => {
            println!(
                "{} Seed file parsing failed: {}",
                emoji(&out, "❌", "[ERR]"),
                e
            );
            return Err(anyhow::anyhow!("Seed file parsing failed: {}", e));
        }
    };

    let library = match Library::from_seed(parsed) {
        Ok(library) => library,
        Err(e) => {
            println!(
                "{} Seed file does not fit in memory: {}",
                emoji(&out, "❌", "[ERR]"),
                e
            );
            return Err(anyhow::anyhow!(
                "Seed file does not fit in memory: {}\n\
                 hint: Lower or remove the `capacity:` key in {}",
                e,
                path.display()
            ));
        }
    };

    println!(
        "{} Seed file parsed successfully",
        emoji(&out, "✅", "[OK]")
    );
    println!("\n{} Seed Summary:", emoji(&out, "📊", "[INFO]"));
    println!("   Books: {}", library.catalog().len());
    println!("   Members: {}", library.registry().len());

    Ok(())
}
