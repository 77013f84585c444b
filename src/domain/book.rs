//! Book domain model.
//!
//! This module defines the core [`Book`] record. Books are immutable after
//! catalog load: every field is plain data, author and genre fields hold id
//! references resolved through the catalog's lookup tables, and nothing in
//! the crate mutates a book once the catalog owns it.

use chrono::{DateTime, Datelike, Local, Utc};
use serde::{Deserialize, Serialize};

/// A single book record in the catalog.
///
/// # Fields
///
/// - `id`: Unique identifier within the catalog
/// - `title`: Display title
/// - `author`: Id reference into the catalog's author table
/// - `genres`: Id references into the catalog's genre table (unordered set
///   semantics; membership is what matters)
/// - `description`: Long-form description shown in the detail view
/// - `image`: Cover image URI
/// - `published`: Publication timestamp (UTC)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genres: Vec<String>,
    pub description: String,
    pub image: String,
    pub published: DateTime<Utc>,
}

impl Book {
    /// Returns the calendar year of publication in the viewer's local time
    /// zone.
    ///
    /// The detail view formats this next to the author name, matching how a
    /// date renders for the person looking at it rather than in UTC.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use tomeshelf::domain::Book;
    ///
    /// let book = Book {
    ///     id: "b1".to_string(),
    ///     title: "Dune".to_string(),
    ///     author: "f-herbert".to_string(),
    ///     genres: vec!["sciencefiction".to_string()],
    ///     description: String::new(),
    ///     image: String::new(),
    ///     published: Utc.with_ymd_and_hms(1965, 8, 1, 12, 0, 0).unwrap(),
    /// };
    /// assert_eq!(book.published_year(), 1965);
    /// ```
    #[must_use]
    pub fn published_year(&self) -> i32 {
        self.published.with_timezone(&Local).year()
    }

    /// Tests whether this book belongs to the given genre.
    ///
    /// Membership over the genre set; order of the stored references is
    /// irrelevant.
    #[must_use]
    pub fn has_genre(&self, genre_id: &str) -> bool {
        self.genres.iter().any(|g| g == genre_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Book {
        Book {
            id: "b1".to_string(),
            title: "Kindred".to_string(),
            author: "o-butler".to_string(),
            genres: vec!["sciencefiction".to_string(), "historical".to_string()],
            description: "Time travel to antebellum Maryland.".to_string(),
            image: "https://covers.example.org/kindred.jpg".to_string(),
            // Mid-year noon UTC so the local-time year matches in every zone.
            published: Utc.with_ymd_and_hms(1979, 6, 15, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn published_year_uses_calendar_year() {
        assert_eq!(sample().published_year(), 1979);
    }

    #[test]
    fn has_genre_checks_membership_not_order() {
        let book = sample();
        assert!(book.has_genre("historical"));
        assert!(book.has_genre("sciencefiction"));
        assert!(!book.has_genre("romance"));
    }
}
