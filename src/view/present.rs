//! Pure presenters projecting books into display payloads.
//!
//! The pair of functions here is the whole of the preview/detail logic:
//! [`summarize`] builds the card shown in the grid, [`expand`] builds the
//! detail overlay payload. Both are deterministic projections with no
//! mutable state; selection is just a lookup followed by `expand`.
//!
//! Unknown references degrade rather than fail: a book whose author id has
//! no entry renders without an author line (summary) or with a year-only
//! label (detail).

use crate::catalog::Catalog;
use crate::domain::Book;
use crate::view::viewmodel::{DetailView, PreviewCard};

/// Converts a book into a display-ready preview card.
///
/// The author label resolves through the catalog's author table and is
/// absent for unknown ids.
///
/// # Examples
///
/// ```
/// let catalog = tomeshelf::catalog::builtin();
/// let book = &catalog.all_books()[0];
/// let card = tomeshelf::view::summarize(book, &catalog);
/// assert_eq!(card.title, book.title);
/// assert_eq!(card.alt_text, book.title);
/// ```
#[must_use]
pub fn summarize(book: &Book, catalog: &Catalog) -> PreviewCard {
    PreviewCard {
        id: book.id.clone(),
        title: book.title.clone(),
        author_label: catalog
            .lookup_author(&book.author)
            .map(|name| format!("Author: {name}")),
        cover_uri: book.image.clone(),
        alt_text: book.title.clone(),
    }
}

/// Converts a book into the expanded detail payload.
///
/// The author/year label formats as `"Author: <name> (<year>)"`, with the
/// year taken from the publication timestamp in the viewer's local time
/// zone. An unknown author id degrades the label to `"(<year>)"` — the name
/// is omitted, the year kept.
#[must_use]
pub fn expand(book: &Book, catalog: &Catalog) -> DetailView {
    let year = book.published_year();
    let author_year_label = match catalog.lookup_author(&book.author) {
        Some(name) => format!("Author: {name} ({year})"),
        None => format!("({year})"),
    };

    DetailView {
        title: book.title.clone(),
        author_year_label,
        description: book.description.clone(),
        cover_uri: book.image.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    fn catalog_with_one_known_author() -> Catalog {
        let books = vec![
            Book {
                id: "b1".to_string(),
                title: "Dune".to_string(),
                author: "f-herbert".to_string(),
                genres: vec!["sciencefiction".to_string()],
                description: "Desert planet.".to_string(),
                image: "https://covers.example.org/dune.jpg".to_string(),
                published: Utc.with_ymd_and_hms(1965, 8, 1, 12, 0, 0).unwrap(),
            },
            Book {
                id: "b2".to_string(),
                title: "Orphaned".to_string(),
                author: "ghost".to_string(),
                genres: vec![],
                description: "No author on record.".to_string(),
                image: "https://covers.example.org/orphaned.jpg".to_string(),
                published: Utc.with_ymd_and_hms(1990, 6, 15, 12, 0, 0).unwrap(),
            },
        ];
        let mut authors = BTreeMap::new();
        authors.insert("f-herbert".to_string(), "Frank Herbert".to_string());
        Catalog::new(books, authors, BTreeMap::new()).unwrap()
    }

    #[test]
    fn summarize_formats_the_author_label() {
        let catalog = catalog_with_one_known_author();
        let card = summarize(catalog.lookup_book("b1").unwrap(), &catalog);

        assert_eq!(card.title, "Dune");
        assert_eq!(card.author_label.as_deref(), Some("Author: Frank Herbert"));
        assert_eq!(card.cover_uri, "https://covers.example.org/dune.jpg");
        assert_eq!(card.alt_text, "Dune");
    }

    #[test]
    fn summarize_omits_the_author_label_for_unknown_ids() {
        let catalog = catalog_with_one_known_author();
        let card = summarize(catalog.lookup_book("b2").unwrap(), &catalog);
        assert_eq!(card.author_label, None);
    }

    #[test]
    fn expand_formats_author_name_and_year() {
        let catalog = catalog_with_one_known_author();
        let detail = expand(catalog.lookup_book("b1").unwrap(), &catalog);

        assert_eq!(detail.author_year_label, "Author: Frank Herbert (1965)");
        assert_eq!(detail.description, "Desert planet.");
    }

    #[test]
    fn expand_keeps_the_year_when_the_author_is_unknown() {
        let catalog = catalog_with_one_known_author();
        let detail = expand(catalog.lookup_book("b2").unwrap(), &catalog);
        assert_eq!(detail.author_year_label, "(1990)");
    }

    #[test]
    fn presenters_are_deterministic() {
        let catalog = catalog_with_one_known_author();
        let book = catalog.lookup_book("b1").unwrap();
        assert_eq!(summarize(book, &catalog), summarize(book, &catalog));
        assert_eq!(expand(book, &catalog), expand(book, &catalog));
    }
}
