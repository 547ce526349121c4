//! # List Command Implementation
//!
//! This module implements the `list` subcommand, which prints the books and
//! members described by the seed file. It is a read-only operation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::Path;

use library_catalog::output::{emoji, render_books, render_members, OutputConfig};
use library_catalog::record::{Book, Member};

/// Print the books and members from the seed file
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Show only the number of books and members
    #[arg(long, conflicts_with = "json")]
    pub count: bool,
}

#[derive(Serialize)]
struct Listing<'a> {
    books: Vec<&'a Book>,
    members: Vec<&'a Member>,
}

/// Execute the `list` command.
pub fn execute(args: ListArgs, seed: Option<&Path>, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let library = super::load_library(seed)?;
    let catalog = library.catalog();
    let registry = library.registry();

    if args.json {
        let listing = Listing {
            books: catalog.books().collect(),
            members: registry.members().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    if args.count {
        println!("{} books, {} members", catalog.len(), registry.len());
        return Ok(());
    }

    println!("{} Books:", emoji(&out, "📖", "[BOOKS]"));
    if catalog.is_empty() {
        println!("No books.");
    } else {
        print!("{}", render_books(&out, catalog.books()));
    }

    println!();
    println!("{} Members:", emoji(&out, "👥", "[MEMBERS]"));
    if registry.is_empty() {
        println!("No members.");
    } else {
        print!("{}", render_members(&out, registry.members()));
    }

    Ok(())
}
