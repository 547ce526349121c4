//! # Error Handling
//!
//! This module defines the error type shared by every part of the
//! `library-catalog` library. It uses `thiserror` to derive a single `Error`
//! enum with descriptive messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of everything that can go wrong inside the library.
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Not finding a book, a member, or a loan is never an error. Lookups return
//! `Option` and removals return `bool`, because absence is a normal steady
//! state for a catalog. The variants below cover the failures that remain:
//!
//! - Allocation failure while growing a collection.
//! - Seed file problems (invalid content, I/O, YAML).
//! - JSON serialization of listings.

use thiserror::Error;

/// Main error type for library-catalog operations
#[derive(Error, Debug)]
pub enum Error {
    /// Backing storage for a collection could not be grown.
    ///
    /// Raised both for real allocator failures and when the collection's
    /// configured capacity ceiling would be exceeded.
    #[error("Allocation failed while growing to {requested} slots: {message}")]
    Allocation { requested: usize, message: String },

    /// The seed file was readable but its content is not a valid library.
    #[error("Seed file error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    SeedParse {
        message: String,
        /// Optional hint for how to fix the seed file
        hint: Option<String>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
