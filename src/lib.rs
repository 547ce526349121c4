//! # Library Catalog
//!
//! An in-memory model of a lending library: a catalog of books, a registry of
//! members, and a ledger of which member holds which books. It backs the
//! `library-catalog` command-line tool but has no I/O of its own beyond
//! reading an optional seed file.
//!
//! ## Quick Example
//!
//! ```
//! use library_catalog::library::Library;
//! use library_catalog::record::{Book, Member};
//!
//! let mut library = Library::with_records(
//!     vec![Book::new("Dune", "Herbert"), Book::new("1984", "Orwell")],
//!     vec![Member::new("Alice", "M1")],
//! )
//! .unwrap();
//!
//! let alice = Member::new("Alice", "M1");
//! library.borrow_book(&alice, Book::new("1984", "Orwell"));
//! assert_eq!(library.view_borrowed(&alice).len(), 1);
//!
//! library.remove_member_and_books(&alice);
//! assert!(library.registry().find_member("M1").is_none());
//! assert!(library.view_borrowed(&alice).is_empty());
//! ```
//!
//! ## Core Concepts
//!
//! - **Records (`record`)**: `Book` and `Member`. A member's identity is its
//!   `member_id` alone.
//! - **Owned Collection (`collection`)**: A growable array that owns its
//!   elements, doubles its capacity on overflow, removes without reordering,
//!   and hands a rejected element back when growth fails.
//! - **Catalog and Registry (`catalog`, `registry`)**: Thin wrappers over the
//!   collection that match books by title (and author, for removal) and
//!   members by id.
//! - **Ledger (`ledger`)**: Loans per member, in borrow order.
//! - **Facade (`library`)**: Owns all of the above and removes a member's
//!   loans together with the member.
//!
//! The `seed`, `menu` and `output` modules are the glue used by the CLI:
//! loading initial data, the interactive console loop, and rendering.

pub mod catalog;
pub mod collection;
pub mod defaults;
pub mod error;
pub mod ledger;
pub mod library;
pub mod menu;
pub mod output;
pub mod record;
pub mod registry;
pub mod seed;

#[cfg(test)]
mod collection_proptest;
