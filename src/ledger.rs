//! Which member currently holds which books

use crate::record::{Book, Member};
use log::debug;
use std::collections::HashMap;

/// Loans grouped by member.
///
/// The ledger is a plain relation store. It does not know about the catalog
/// or the registry, so it neither checks that a book exists nor that it is
/// free. Each member's loans are kept in borrow order and may contain the
/// same book more than once.
///
/// Members are keyed by `member_id` (see [`Member`]'s equality). An entry
/// created by a borrow stays in place, possibly empty, until
/// [`BorrowLedger::clear_entry`] removes it.
#[derive(Debug, Clone, Default)]
pub struct BorrowLedger {
    loans: HashMap<Member, Vec<Book>>,
}

impl BorrowLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `member` borrowed `book`, creating their entry if needed
    pub fn borrow(&mut self, member: &Member, book: Book) {
        debug!(
            "Member {} borrows '{}' by {}",
            member.member_id, book.title, book.author
        );
        self.loans.entry(member.clone()).or_default().push(book);
    }

    /// Remove the first loan of `member` with the same title and author as
    /// `book`.
    ///
    /// Returns whether a loan was removed. The entry itself is kept even if
    /// it becomes empty.
    pub fn return_book(&mut self, member: &Member, book: &Book) -> bool {
        let Some(books) = self.loans.get_mut(member) else {
            return false;
        };
        match books.iter().position(|b| b.same_work(book)) {
            Some(index) => {
                books.remove(index);
                debug!(
                    "Member {} returned '{}' by {}",
                    member.member_id, book.title, book.author
                );
                true
            }
            None => false,
        }
    }

    /// A copy of the books `member` currently holds, in borrow order.
    ///
    /// Returns an empty list for members without an entry.
    pub fn view_borrowed(&self, member: &Member) -> Vec<Book> {
        self.loans.get(member).cloned().unwrap_or_default()
    }

    /// Same as [`BorrowLedger::view_borrowed`]
    pub fn get_rented_books(&self, member: &Member) -> Vec<Book> {
        self.view_borrowed(member)
    }

    /// Delete the entry for `member`, returning the books it held
    pub fn clear_entry(&mut self, member: &Member) -> Option<Vec<Book>> {
        let removed = self.loans.remove(member);
        if removed.is_some() {
            debug!("Cleared ledger entry for member {}", member.member_id);
        }
        removed
    }

    /// Whether `member` has an entry, even an empty one
    pub fn has_entry(&self, member: &Member) -> bool {
        self.loans.contains_key(member)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }
}
