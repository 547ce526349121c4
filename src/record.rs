//! Book and member records

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A record whose mutable fields can be overwritten in place.
///
/// Collections use this to update a stored element without moving it or
/// replacing its slot.
pub trait Record {
    /// Copy every mutable field of `other` into `self`.
    fn assign_from(&mut self, other: &Self);
}

/// A single borrowable book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Publication year, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl Book {
    /// Create a book without a publication year
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: None,
        }
    }

    /// Create a book with a publication year
    pub fn with_year(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            year: Some(year),
            ..Self::new(title, author)
        }
    }

    /// Whether this book has exactly the given title and author.
    pub fn matches(&self, title: &str, author: &str) -> bool {
        self.title == title && self.author == author
    }

    /// Whether `other` has the same title and author, ignoring the year.
    pub fn same_work(&self, other: &Book) -> bool {
        self.matches(&other.title, &other.author)
    }
}

impl Record for Book {
    fn assign_from(&mut self, other: &Self) {
        self.title.clone_from(&other.title);
        self.author.clone_from(&other.author);
        self.year = other.year;
    }
}

/// A registered library member.
///
/// Equality and hashing look at `member_id` only. Two members with the same
/// id and different names are the same member as far as the ledger is
/// concerned.
///
/// `member_id` stays publicly mutable. Changing it on a member that already
/// has loans leaves those loans filed under the old id, where they can only
/// be reached with a member value carrying that old id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Member {
    pub name: String,
    pub member_id: String,
}

impl Member {
    pub fn new(name: impl Into<String>, member_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            member_id: member_id.into(),
        }
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.member_id == other.member_id
    }
}

impl Eq for Member {}

impl Hash for Member {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.member_id.hash(state);
    }
}

impl Record for Member {
    fn assign_from(&mut self, other: &Self) {
        self.name.clone_from(&other.name);
        self.member_id.clone_from(&other.member_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(member: &Member) -> u64 {
        let mut hasher = DefaultHasher::new();
        member.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_book_matches_title_and_author() {
        let book = Book::new("Dune", "Herbert");
        assert!(book.matches("Dune", "Herbert"));
        assert!(!book.matches("Dune", "Anderson"));
        assert!(!book.matches("dune", "Herbert"));
    }

    #[test]
    fn test_book_same_work_ignores_year() {
        let a = Book::with_year("Dune", "Herbert", 1965);
        let b = Book::new("Dune", "Herbert");
        assert!(a.same_work(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_member_identity_is_member_id() {
        let a = Member::new("Alice", "M1");
        let b = Member::new("Alicia", "M1");
        let c = Member::new("Alice", "M2");

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c);
    }

    #[test]
    fn test_assign_from_overwrites_all_fields() {
        let mut book = Book::new("Dune", "Herbert");
        book.assign_from(&Book::with_year("Dune Messiah", "Frank Herbert", 1969));
        assert_eq!(book, Book::with_year("Dune Messiah", "Frank Herbert", 1969));

        let mut member = Member::new("Alice", "M1");
        member.assign_from(&Member::new("Bob", "M9"));
        assert_eq!(member.name, "Bob");
        assert_eq!(member.member_id, "M9");
    }
}
