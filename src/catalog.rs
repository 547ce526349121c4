//! The book catalog

use crate::collection::{InsertError, OwnedCollection};
use crate::record::Book;

/// Ordered catalog of books.
///
/// Duplicates are allowed; every operation acts on the first match in
/// insertion order. Removal matches on title and author, while lookup and
/// update match on the title alone.
#[derive(Debug, Clone, Default)]
pub struct BookCatalog {
    books: OwnedCollection<Book>,
}

impl BookCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog on top of an existing collection
    pub fn from_collection(books: OwnedCollection<Book>) -> Self {
        Self { books }
    }

    /// Append a book to the end of the catalog
    pub fn add_book(&mut self, book: Book) -> Result<&mut Book, InsertError<Book>> {
        self.books.add(book)
    }

    /// Remove the first book with the same title and author as `book`
    pub fn remove_book(&mut self, book: &Book) -> bool {
        self.books.remove(|b| b.same_work(book))
    }

    /// Remove the first book with the given title, whatever its author
    pub fn remove_by_title(&mut self, title: &str) -> bool {
        self.books.remove(|b| b.title == title)
    }

    /// Overwrite the first book titled `original_title` with `updated`.
    ///
    /// The author is not part of the match, so the first book with that
    /// title is changed even if a later one was meant.
    pub fn update_book(&mut self, original_title: &str, updated: &Book) -> bool {
        self.books.update(|b| b.title == original_title, updated)
    }

    /// First book with the given title
    pub fn find_book(&self, title: &str) -> Option<&Book> {
        self.books.find(|b| b.title == title)
    }

    /// First book with the given title, for in-place edits
    pub fn find_book_mut(&mut self, title: &str) -> Option<&mut Book> {
        self.books.find_mut(|b| b.title == title)
    }

    /// Exchange the books at two positions; out-of-range positions are ignored
    pub fn swap_books(&mut self, i: usize, j: usize) {
        self.books.swap(i, j);
    }

    /// All books in insertion order
    pub fn books(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_of(books: &[(&str, &str)]) -> BookCatalog {
        let mut catalog = BookCatalog::new();
        for (title, author) in books {
            catalog.add_book(Book::new(*title, *author)).unwrap();
        }
        catalog
    }

    fn pairs(catalog: &BookCatalog) -> Vec<(String, String)> {
        catalog
            .books()
            .map(|b| (b.title.clone(), b.author.clone()))
            .collect()
    }

    #[test]
    fn test_add_and_find() {
        let mut catalog = catalog_of(&[("Dune", "Herbert"), ("1984", "Orwell")]);
        catalog.add_book(Book::new("Foundation", "Asimov")).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.find_book("Foundation").unwrap().author, "Asimov");
        assert!(catalog.find_book("Emma").is_none());
    }

    #[test]
    fn test_remove_requires_title_and_author() {
        let mut catalog = catalog_of(&[("Dune", "Herbert"), ("1984", "Orwell")]);

        assert!(!catalog.remove_book(&Book::new("Dune", "Asimov")));
        assert_eq!(catalog.len(), 2);

        assert!(catalog.remove_book(&Book::new("Dune", "Herbert")));
        assert_eq!(
            pairs(&catalog),
            vec![("1984".to_string(), "Orwell".to_string())]
        );
    }

    #[test]
    fn test_remove_by_title_ignores_author() {
        let mut catalog = catalog_of(&[("Dune", "Herbert"), ("1984", "Orwell")]);
        assert!(catalog.remove_by_title("Dune"));
        assert!(!catalog.remove_by_title("Dune"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_update_matches_title_only() {
        // Two books share a title; update hits the first one regardless of
        // which author the caller had in mind.
        let mut catalog = catalog_of(&[("Collected Poems", "Plath"), ("Collected Poems", "Auden")]);

        let updated = Book::new("Collected Poems", "W. H. Auden");
        assert!(catalog.update_book("Collected Poems", &updated));

        assert_eq!(
            pairs(&catalog),
            vec![
                ("Collected Poems".to_string(), "W. H. Auden".to_string()),
                ("Collected Poems".to_string(), "Auden".to_string()),
            ]
        );
    }

    #[test]
    fn test_update_missing_title_is_noop() {
        let mut catalog = catalog_of(&[("Dune", "Herbert")]);
        assert!(!catalog.update_book("Emma", &Book::new("Emma", "Austen")));
        assert_eq!(pairs(&catalog), vec![("Dune".to_string(), "Herbert".to_string())]);
    }

    #[test]
    fn test_find_book_mut_edits_in_place() {
        let mut catalog = catalog_of(&[("Dune", "Herbert")]);
        catalog.find_book_mut("Dune").unwrap().year = Some(1965);
        assert_eq!(catalog.find_book("Dune").unwrap().year, Some(1965));
    }

    #[test]
    fn test_swap_books() {
        let mut catalog = catalog_of(&[("Dune", "Herbert"), ("1984", "Orwell")]);
        catalog.swap_books(0, 1);
        assert_eq!(catalog.books().next().unwrap().title, "1984");

        catalog.swap_books(0, 5);
        assert_eq!(catalog.books().next().unwrap().title, "1984");
    }

    #[test]
    fn test_add_failure_hands_book_back() {
        let collection = OwnedCollection::with_capacity(1).with_capacity_limit(1);
        let mut catalog = BookCatalog::from_collection(collection);
        catalog.add_book(Book::new("Dune", "Herbert")).unwrap();

        let err = catalog.add_book(Book::new("1984", "Orwell")).unwrap_err();
        assert_eq!(err.into_inner(), Book::new("1984", "Orwell"));
        assert_eq!(catalog.len(), 1);
    }
}
