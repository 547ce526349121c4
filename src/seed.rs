//! # Seed File Parsing
//!
//! A seed file describes the books and members a library starts with. It is
//! read once at startup; nothing is ever written back.
//!
//! ```yaml
//! capacity: 8
//! books:
//!   - title: Dune
//!     author: Herbert
//!     year: 1965
//!   - { title: "1984", author: Orwell }
//! members:
//!   - { name: Alice, member_id: M1 }
//! ```
//!
//! Every key is optional. Unknown keys are rejected so that typos do not
//! silently drop data. Titles, authors and member ids must not be empty.

use crate::error::{Error, Result};
use crate::record::{Book, Member};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Initial state of a library
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Seed {
    /// Initial capacity of the book and member collections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
    /// Books in catalog order
    #[serde(default)]
    pub books: Vec<Book>,
    /// Members in registration order
    #[serde(default)]
    pub members: Vec<Member>,
}

/// Parses a YAML string into a `Seed`.
///
/// An empty document yields an empty seed.
pub fn parse(yaml_content: &str) -> Result<Seed> {
    if yaml_content.trim().is_empty() {
        return Ok(Seed::default());
    }

    let seed: Seed = serde_yaml::from_str(yaml_content).map_err(|e| {
        let message = e.to_string();
        if message.contains("unknown field") {
            Error::SeedParse {
                message,
                hint: Some(
                    "Books take title, author and an optional year; members take name and member_id"
                        .to_string(),
                ),
            }
        } else {
            Error::Yaml(e)
        }
    })?;

    validate(&seed)?;
    Ok(seed)
}

/// Check the field-level rules serde cannot express
fn validate(seed: &Seed) -> Result<()> {
    for (index, book) in seed.books.iter().enumerate() {
        if book.title.is_empty() || book.author.is_empty() {
            return Err(Error::SeedParse {
                message: format!("book #{} has an empty title or author", index + 1),
                hint: Some("Every book needs a non-empty title and author".to_string()),
            });
        }
    }

    for (index, member) in seed.members.iter().enumerate() {
        if member.member_id.is_empty() {
            return Err(Error::SeedParse {
                message: format!("member #{} has an empty member_id", index + 1),
                hint: Some("Member ids identify loans and cannot be blank".to_string()),
            });
        }
    }

    Ok(())
}

/// Read and parse a seed file
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Seed> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

/// Load a seed file, treating a missing optional file as an empty seed.
///
/// When `required` is set, a missing file is an error.
pub fn load<P: AsRef<Path>>(path: P, required: bool) -> Result<Seed> {
    let path = path.as_ref();
    if !required && !path.exists() {
        log::debug!("No seed file at {}, starting empty", path.display());
        return Ok(Seed::default());
    }
    from_file(path)
}
