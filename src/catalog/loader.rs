//! JSON catalog loading.
//!
//! This module reads the catalog file format: a single JSON object with a
//! `books` array and `authors`/`genres` id-to-name maps. A missing array or
//! map is a startup-level fault, surfaced as [`ShelfError::Catalog`] so the
//! caller fails once rather than operating on a partial dataset.
//!
//! # File Format
//!
//! ```json
//! {
//!   "books": [
//!     {
//!       "id": "6b6d86d9-...",
//!       "title": "Dune",
//!       "author": "f-herbert",
//!       "genres": ["sciencefiction", "adventure"],
//!       "description": "...",
//!       "image": "https://covers.example.org/dune.jpg",
//!       "published": "1965-08-01T00:00:00Z"
//!     }
//!   ],
//!   "authors": { "f-herbert": "Frank Herbert" },
//!   "genres": { "sciencefiction": "Science Fiction" }
//! }
//! ```

use crate::catalog::Catalog;
use crate::domain::error::{Result, ShelfError};
use crate::domain::Book;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Raw catalog file contents before validation.
///
/// Serde enforces the presence of all three top-level members; `Catalog::new`
/// then enforces the id invariants.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    books: Vec<Book>,
    authors: BTreeMap<String, String>,
    genres: BTreeMap<String, String>,
}

/// Parses a catalog from a JSON string.
///
/// # Errors
///
/// Returns [`ShelfError::Catalog`] if the JSON is malformed, a required
/// member is missing, or the validated invariants fail (duplicate or empty
/// ids, empty titles). An empty `books` array is well-formed and yields an
/// empty catalog.
///
/// # Examples
///
/// ```
/// let json = r#"{
///   "books": [{
///     "id": "b1", "title": "Dune", "author": "f-herbert",
///     "genres": ["sciencefiction"], "description": "",
///     "image": "", "published": "1965-08-01T00:00:00Z"
///   }],
///   "authors": { "f-herbert": "Frank Herbert" },
///   "genres": { "sciencefiction": "Science Fiction" }
/// }"#;
/// let catalog = tomeshelf::catalog::from_json(json).unwrap();
/// assert_eq!(catalog.len(), 1);
/// ```
pub fn from_json(json: &str) -> Result<Catalog> {
    let raw: RawCatalog = serde_json::from_str(json)
        .map_err(|e| ShelfError::Catalog(format!("failed to parse catalog JSON: {e}")))?;

    tracing::debug!(
        books = raw.books.len(),
        authors = raw.authors.len(),
        genres = raw.genres.len(),
        "parsed catalog JSON"
    );

    Catalog::new(raw.books, raw.authors, raw.genres)
}

/// Loads a catalog from a JSON file on disk.
///
/// # Errors
///
/// Returns [`ShelfError::Io`] if the file cannot be read, or any error
/// [`from_json`] produces for its contents.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    tracing::debug!(path = ?path, "loading catalog file");

    let contents = std::fs::read_to_string(path)?;
    from_json(&contents)
}

/// Returns the embedded sample catalog.
///
/// Used when no catalog file is configured so the browser runs out of the
/// box.
///
/// # Panics
///
/// Panics if the embedded dataset fails validation, which would mean the
/// shipped asset itself is broken.
#[must_use]
pub fn builtin() -> Catalog {
    from_json(include_str!("../../data/catalog.json"))
        .expect("embedded sample catalog should always parse")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"{
        "books": [{
            "id": "b1", "title": "Dune", "author": "f-herbert",
            "genres": ["sciencefiction"], "description": "d",
            "image": "i", "published": "1965-08-01T00:00:00Z"
        }],
        "authors": { "f-herbert": "Frank Herbert" },
        "genres": { "sciencefiction": "Science Fiction" }
    }"#;

    #[test]
    fn parses_minimal_catalog() {
        let catalog = from_json(MINIMAL).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup_author("f-herbert"), Some("Frank Herbert"));
    }

    #[test]
    fn empty_books_array_yields_an_empty_catalog() {
        let json = r#"{ "books": [], "authors": {}, "genres": {} }"#;
        let catalog = from_json(json).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn missing_books_array_is_fatal() {
        let json = r#"{ "authors": {}, "genres": {} }"#;
        let err = from_json(json).unwrap_err();
        assert!(matches!(err, ShelfError::Catalog(_)));
    }

    #[test]
    fn missing_genres_map_is_fatal() {
        let json = r#"{ "books": [], "authors": {} }"#;
        assert!(from_json(json).is_err());
    }

    #[test]
    fn load_file_round_trips_through_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let catalog = load_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn load_file_reports_missing_file_as_io_error() {
        let err = load_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, ShelfError::Io(_)));
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = builtin();
        assert!(catalog.len() >= 10);
        assert!(catalog.all_books().iter().any(|b| b.title == "Dune Messiah"));
    }
}
