//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_seed(seeds::CLASSICS);
//!     fixture.command().arg("list").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::seeds;
    pub use super::TestFixture;
}

/// Common seed file snippets for testing.
#[allow(dead_code)]
pub mod seeds {
    /// Two books and one member.
    pub const CLASSICS: &str = r#"
books:
  - { title: Dune, author: Herbert, year: 1965 }
  - { title: "1984", author: Orwell }
members:
  - { name: Alice, member_id: M1 }
"#;

    /// Books only.
    pub const BOOKS_ONLY: &str = r#"
books:
  - { title: Emma, author: Austen }
"#;

    /// A seed with a field books do not have.
    pub const UNKNOWN_FIELD: &str = r#"
books:
  - { title: Dune, author: Herbert, copies: 2 }
"#;

    /// A capacity no allocator can satisfy.
    pub const HUGE_CAPACITY: &str = "capacity: 18446744073709551615\n";

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "books: [unclosed";
}

/// A temporary directory that can hold a `library.yaml` seed file.
///
/// Commands created through the fixture run inside the directory with colors
/// off and without an inherited `LIBRARY_SEED`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `library.yaml` with the given content.
    pub fn with_seed(self, content: &str) -> Self {
        self.with_file("library.yaml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the default seed file.
    #[allow(dead_code)]
    pub fn seed_path(&self) -> PathBuf {
        self.temp_dir.path().join("library.yaml")
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("library-catalog");
        cmd.current_dir(self.path())
            .env_remove("LIBRARY_SEED")
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
