//! The catalog store: an immutable, validated book dataset.
//!
//! This module defines [`Catalog`], the read-only owner of the book list and
//! the author/genre display-name tables. Construction validates the startup
//! invariants (unique, non-empty book ids; non-empty titles); everything
//! after construction is a side-effect-free lookup.
//!
//! Absence is never an error here. An unknown author, genre, or book id
//! yields `None`, and callers are expected to omit the affected display
//! field rather than abort (see the presenters in [`crate::view::present`]).

use crate::domain::error::{Result, ShelfError};
use crate::domain::Book;
use std::collections::{BTreeMap, HashMap};

/// The immutable source list of books, authors, and genres.
///
/// Owns the canonical book ordering ("catalog order") that filtering and
/// paging preserve. Author and genre tables use `BTreeMap` so listings
/// iterate in a stable order.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Books in canonical catalog order.
    books: Vec<Book>,

    /// Author id → display name.
    authors: BTreeMap<String, String>,

    /// Genre id → display name.
    genres: BTreeMap<String, String>,

    /// Book id → index into `books`, built once at construction.
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from raw arrays, validating the startup invariants.
    ///
    /// An empty book list is valid input: the browser renders the empty
    /// state for it. Only malformed records are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Catalog`] if:
    /// - any book id is empty or duplicated
    /// - any book title is empty
    ///
    /// These are fatal: the core refuses to initialize rather than operate
    /// on a dataset where id lookups would be ambiguous.
    ///
    /// # Examples
    ///
    /// ```
    /// let catalog = tomeshelf::catalog::builtin();
    /// assert!(!catalog.all_books().is_empty());
    /// ```
    pub fn new(
        books: Vec<Book>,
        authors: BTreeMap<String, String>,
        genres: BTreeMap<String, String>,
    ) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(books.len());
        for (index, book) in books.iter().enumerate() {
            if book.id.is_empty() {
                return Err(ShelfError::Catalog(format!(
                    "book at position {index} has an empty id"
                )));
            }
            if book.title.is_empty() {
                return Err(ShelfError::Catalog(format!(
                    "book '{}' has an empty title",
                    book.id
                )));
            }
            if by_id.insert(book.id.clone(), index).is_some() {
                return Err(ShelfError::Catalog(format!(
                    "duplicate book id '{}'",
                    book.id
                )));
            }
        }

        tracing::debug!(
            book_count = books.len(),
            author_count = authors.len(),
            genre_count = genres.len(),
            "catalog constructed"
        );

        Ok(Self {
            books,
            authors,
            genres,
            by_id,
        })
    }

    /// Looks up an author's display name by id.
    ///
    /// Returns `None` for unknown ids; callers omit the author line rather
    /// than render a placeholder.
    #[must_use]
    pub fn lookup_author(&self, id: &str) -> Option<&str> {
        self.authors.get(id).map(String::as_str)
    }

    /// Looks up a genre's display name by id.
    #[must_use]
    pub fn lookup_genre(&self, id: &str) -> Option<&str> {
        self.genres.get(id).map(String::as_str)
    }

    /// Looks up a book by id.
    ///
    /// Unambiguous by construction: duplicate ids are rejected at load.
    #[must_use]
    pub fn lookup_book(&self, id: &str) -> Option<&Book> {
        self.by_id.get(id).map(|&index| &self.books[index])
    }

    /// Returns all books in canonical catalog order.
    ///
    /// This ordering defines the order every result set preserves.
    #[must_use]
    pub fn all_books(&self) -> &[Book] {
        &self.books
    }

    /// Iterates `(id, name)` author entries in stable (sorted-id) order.
    ///
    /// Used by the presentation layer to build the author pick list.
    pub fn authors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.authors.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    /// Iterates `(id, name)` genre entries in stable (sorted-id) order.
    pub fn genres(&self) -> impl Iterator<Item = (&str, &str)> {
        self.genres.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    /// Returns the number of books in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns `true` if the catalog holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
