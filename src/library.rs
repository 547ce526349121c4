//! The library facade
//!
//! [`Library`] owns the book catalog, the member registry and the borrow
//! ledger, and keeps the one rule that spans them: removing a member also
//! drops their ledger entry. Nothing else is cross-checked. Borrowing does
//! not look the book up in the catalog, and removing a book leaves any loans
//! of it in place.

use crate::catalog::BookCatalog;
use crate::collection::{InsertError, OwnedCollection};
use crate::error::Result;
use crate::ledger::BorrowLedger;
use crate::record::{Book, Member};
use crate::registry::MemberRegistry;
use crate::seed::Seed;
use log::{info, warn};

/// Books, members and loans of one library
#[derive(Debug, Clone, Default)]
pub struct Library {
    catalog: BookCatalog,
    registry: MemberRegistry,
    ledger: BorrowLedger,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty library whose collections start with `capacity` slots.
    ///
    /// Fails with [`Error::Allocation`](crate::error::Error::Allocation) when
    /// the slots cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            catalog: BookCatalog::from_collection(OwnedCollection::try_with_capacity(capacity)?),
            registry: MemberRegistry::from_collection(OwnedCollection::try_with_capacity(
                capacity,
            )?),
            ledger: BorrowLedger::new(),
        })
    }

    /// Create a library holding `books` and `members`, with no loans
    pub fn with_records(books: Vec<Book>, members: Vec<Member>) -> Result<Self> {
        let mut library = Self::new();
        library.load(books, members)?;
        Ok(library)
    }

    /// Create a library from a parsed seed file
    pub fn from_seed(seed: Seed) -> Result<Self> {
        let mut library = match seed.capacity {
            Some(capacity) => Self::with_capacity(capacity)?,
            None => Self::new(),
        };
        library.load(seed.books, seed.members)?;
        Ok(library)
    }

    fn load(&mut self, books: Vec<Book>, members: Vec<Member>) -> Result<()> {
        for book in books {
            self.catalog.add_book(book).map_err(|e| e.into_parts().1)?;
        }
        for member in members {
            self.registry
                .register_member(member)
                .map_err(|e| e.into_parts().1)?;
        }
        Ok(())
    }

    pub fn catalog(&self) -> &BookCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut BookCatalog {
        &mut self.catalog
    }

    pub fn registry(&self) -> &MemberRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut MemberRegistry {
        &mut self.registry
    }

    pub fn ledger(&self) -> &BorrowLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut BorrowLedger {
        &mut self.ledger
    }

    /// Add a book to the catalog
    pub fn add_book(&mut self, book: Book) -> std::result::Result<&mut Book, InsertError<Book>> {
        self.catalog.add_book(book)
    }

    /// Register a new member
    pub fn register_member(
        &mut self,
        member: Member,
    ) -> std::result::Result<&mut Member, InsertError<Member>> {
        self.registry.register_member(member)
    }

    /// Record a loan of `book` to `member`.
    ///
    /// Neither the member nor the book has to be known to the library.
    pub fn borrow_book(&mut self, member: &Member, book: Book) {
        if self.registry.find_member(&member.member_id).is_none() {
            warn!(
                "Recording a loan for member {} who is not registered",
                member.member_id
            );
        }
        self.ledger.borrow(member, book);
    }

    /// Record that `member` returned `book`
    pub fn return_book(&mut self, member: &Member, book: &Book) -> bool {
        self.ledger.return_book(member, book)
    }

    /// Books `member` currently holds, in borrow order
    pub fn view_borrowed(&self, member: &Member) -> Vec<Book> {
        self.ledger.view_borrowed(member)
    }

    /// Unregister `member` and forget their loans.
    ///
    /// The ledger entry is dropped even when the member was not registered,
    /// so calling this twice is harmless. Returns whether a registered
    /// member was removed.
    pub fn remove_member_and_books(&mut self, member: &Member) -> bool {
        let removed = self.registry.remove_member(&member.member_id);
        let cleared = self.ledger.clear_entry(member);
        info!(
            "Removed member {} (registered: {}, loans cleared: {})",
            member.member_id,
            removed,
            cleared.map_or(0, |books| books.len())
        );
        removed
    }
}
