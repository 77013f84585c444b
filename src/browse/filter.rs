//! Filter criteria and the order-preserving filter engine.
//!
//! This module implements the search semantics of the browser: a candidate
//! book is included only when the title, author, and genre rules all hold.
//! Filtering is a pure function over the catalog; the same criteria always
//! yield the same ordered output, and the catalog is never mutated.
//!
//! # Matching Rules
//!
//! 1. **Title**: a trimmed-empty query matches everything; otherwise the
//!    book title must contain the query as a case-insensitive substring.
//! 2. **Author**: [`FieldFilter::Any`] matches everything; otherwise the
//!    book's author id must match exactly.
//! 3. **Genre**: [`FieldFilter::Any`] matches everything; otherwise the
//!    book's genre set must contain the id (first match short-circuits).
//!
//! Zero matches yields an empty vector, not an error; the presentation
//! layer shows an empty-state message instead of a grid.

use crate::catalog::Catalog;
use crate::domain::Book;

/// The form value representing "no restriction" for author/genre fields.
pub const ANY: &str = "any";

/// A single dropdown-style filter field: either unrestricted or an exact id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldFilter {
    /// Matches every book (the form's `"any"` option).
    #[default]
    Any,

    /// Matches books referencing exactly this id.
    Id(String),
}

impl FieldFilter {
    /// Builds a filter from a raw form value, treating [`ANY`] as the
    /// wildcard.
    ///
    /// # Examples
    ///
    /// ```
    /// use tomeshelf::browse::FieldFilter;
    ///
    /// assert_eq!(FieldFilter::from_form("any"), FieldFilter::Any);
    /// assert_eq!(
    ///     FieldFilter::from_form("f-herbert"),
    ///     FieldFilter::Id("f-herbert".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn from_form(value: &str) -> Self {
        if value == ANY {
            Self::Any
        } else {
            Self::Id(value.to_string())
        }
    }

    fn matches_exact(&self, id: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Id(wanted) => wanted == id,
        }
    }

    fn matches_member(&self, book: &Book) -> bool {
        match self {
            Self::Any => true,
            Self::Id(wanted) => book.has_genre(wanted),
        }
    }
}

/// One search submission's worth of criteria.
///
/// Transient: constructed per submission and consumed by [`apply`]. The
/// default value matches the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Case-insensitive title substring; trimmed-empty means "no title
    /// restriction".
    pub title_query: String,

    /// Author restriction.
    pub author: FieldFilter,

    /// Genre restriction.
    pub genre: FieldFilter,
}

impl FilterCriteria {
    /// Tests a single book against all three rules.
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        let query = self.title_query.trim();
        let title_ok =
            query.is_empty() || book.title.to_lowercase().contains(&query.to_lowercase());

        title_ok && self.author.matches_exact(&book.author) && self.genre.matches_member(book)
    }
}

/// Applies the criteria to the catalog, preserving catalog order.
///
/// Pure projection: the result is always an order-preserving subset of
/// `catalog.all_books()`, replaced wholesale by the caller on each search.
///
/// # Examples
///
/// ```
/// use tomeshelf::browse::{filter, FilterCriteria};
///
/// let catalog = tomeshelf::catalog::builtin();
/// let all = filter::apply(&FilterCriteria::default(), &catalog);
/// assert_eq!(all.len(), catalog.len());
/// ```
#[must_use]
pub fn apply(criteria: &FilterCriteria, catalog: &Catalog) -> Vec<Book> {
    let _span = tracing::debug_span!(
        "apply_filter",
        total_books = catalog.len(),
        query_len = criteria.title_query.len(),
        author = ?criteria.author,
        genre = ?criteria.genre
    )
    .entered();

    let matches: Vec<Book> = catalog
        .all_books()
        .iter()
        .filter(|book| criteria.matches(book))
        .cloned()
        .collect();

    tracing::debug!(match_count = matches.len(), "filter applied");

    matches
}
