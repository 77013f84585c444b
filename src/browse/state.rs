//! Session state management and page view computation.
//!
//! This module defines [`SessionState`], the explicit state object that
//! replaces ambient globals: the current result set, the page cursor, the
//! selection, the open overlay, and the active theme all live here and are
//! mutated only through the command handler. Handlers receive the state,
//! mutate it, and return effects; nothing else in the crate holds mutable
//! browsing state.
//!
//! # State Components
//!
//! - **Catalog**: the immutable source dataset
//! - **Matches**: the result set for the active filter, in catalog order
//! - **Page cursor**: count of pages rendered for the current matches
//! - **Selection**: the id of the book open in the detail view, if any
//! - **Overlay**: which dialog is open
//! - **Theme**: the active theme name

use crate::browse::overlay::Overlay;
use crate::browse::{filter, pager, FilterCriteria};
use crate::catalog::Catalog;
use crate::domain::Book;
use crate::view::present;
use crate::view::theme::ThemeName;
use crate::view::viewmodel::PageView;

/// The browsing session's complete mutable state.
///
/// Created once at startup and threaded through
/// [`handle_command`](crate::browse::handle_command) for every user action.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Immutable source dataset.
    pub catalog: Catalog,

    /// Result set for the active filter criteria.
    ///
    /// Defaults to the full catalog; replaced wholesale on each search,
    /// never mutated in place. Always an order-preserving subset of the
    /// catalog.
    pub matches: Vec<Book>,

    /// Count of pages already rendered for the current matches. Always at
    /// least 1; reset to 1 whenever `matches` is replaced.
    pub page: usize,

    /// Fixed number of books per page.
    pub page_size: usize,

    /// Id of the book currently open in the detail view.
    pub selected: Option<String>,

    /// Which dialog is open.
    pub overlay: Overlay,

    /// The active theme name.
    pub theme: ThemeName,
}

impl SessionState {
    /// Creates a session showing the first page of the full catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use tomeshelf::browse::SessionState;
    /// use tomeshelf::view::theme::ThemeName;
    ///
    /// let catalog = tomeshelf::catalog::builtin();
    /// let state = SessionState::new(catalog, 36, ThemeName::Day);
    /// assert_eq!(state.page, 1);
    /// assert_eq!(state.matches.len(), state.catalog.len());
    /// ```
    #[must_use]
    pub fn new(catalog: Catalog, page_size: usize, theme: ThemeName) -> Self {
        let matches = catalog.all_books().to_vec();
        let (_, page) = pager::first_page(&matches, page_size);

        Self {
            catalog,
            matches,
            page,
            page_size,
            selected: None,
            overlay: Overlay::None,
            theme,
        }
    }

    /// Replaces the result set with the books matching `criteria` and
    /// resets the page cursor to the first page.
    pub fn apply_filter(&mut self, criteria: &FilterCriteria) {
        self.matches = filter::apply(criteria, &self.catalog);
        let (_, page) = pager::first_page(&self.matches, self.page_size);
        self.page = page;
    }

    /// Advances the page cursor by one page.
    ///
    /// Returns the newly revealed window. Advancing past the end is legal:
    /// the window is empty and the cursor stays put.
    pub fn show_more(&mut self) -> &[Book] {
        let (window, page) = pager::next_page(&self.matches, self.page, self.page_size);
        self.page = page;
        window
    }

    /// Returns the rendered prefix of the result set: everything the pages
    /// 1..=cursor cover.
    #[must_use]
    pub fn rendered(&self) -> &[Book] {
        let end = self
            .page
            .saturating_mul(self.page_size)
            .min(self.matches.len());
        &self.matches[..end]
    }

    /// Returns how many matches remain beyond the rendered pages.
    #[must_use]
    pub fn remaining(&self) -> usize {
        pager::remaining(self.matches.len(), self.page, self.page_size)
    }

    /// Returns `true` when another non-empty page exists.
    #[must_use]
    pub fn has_more(&self) -> bool {
        pager::has_more(self.matches.len(), self.page, self.page_size)
    }

    /// Returns the book currently open in the detail view, if any.
    #[must_use]
    pub fn selected_book(&self) -> Option<&Book> {
        self.selected
            .as_deref()
            .and_then(|id| self.catalog.lookup_book(id))
    }

    /// Computes the display-ready page view for the current state.
    ///
    /// Summarizes every rendered book and attaches the remaining-count and
    /// control flags. The empty-state flag is set exactly when the result
    /// set is empty (zero matches), not merely when a page is empty.
    #[must_use]
    pub fn page_view(&self) -> PageView {
        let cards = self
            .rendered()
            .iter()
            .map(|book| present::summarize(book, &self.catalog))
            .collect();

        PageView {
            cards,
            remaining: self.remaining(),
            has_more: self.has_more(),
            show_empty: self.matches.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::FieldFilter;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    fn numbered_catalog(count: usize) -> Catalog {
        let books = (0..count)
            .map(|n| Book {
                id: format!("b{n}"),
                title: format!("Book {n}"),
                author: "a1".to_string(),
                genres: vec!["g1".to_string()],
                description: String::new(),
                image: String::new(),
                published: Utc.with_ymd_and_hms(2000, 6, 15, 12, 0, 0).unwrap(),
            })
            .collect();
        let mut authors = BTreeMap::new();
        authors.insert("a1".to_string(), "Author One".to_string());
        let mut genres = BTreeMap::new();
        genres.insert("g1".to_string(), "Genre One".to_string());
        Catalog::new(books, authors, genres).unwrap()
    }

    #[test]
    fn new_session_defaults_to_the_full_catalog() {
        let state = SessionState::new(numbered_catalog(5), 36, ThemeName::Day);
        assert_eq!(state.matches.len(), 5);
        assert_eq!(state.page, 1);
        assert_eq!(state.overlay, Overlay::None);
        assert!(state.selected.is_none());
    }

    #[test]
    fn hundred_book_session_pages_through_like_the_original() {
        let mut state = SessionState::new(numbered_catalog(100), 36, ThemeName::Day);

        assert_eq!(state.rendered().len(), 36);
        assert_eq!(state.remaining(), 64);
        assert!(state.has_more());

        assert_eq!(state.show_more().len(), 36);
        assert_eq!(state.rendered().len(), 72);
        assert_eq!(state.remaining(), 28);
        assert!(state.has_more());

        assert_eq!(state.show_more().len(), 28);
        assert_eq!(state.rendered().len(), 100);
        assert_eq!(state.remaining(), 0);
        assert!(!state.has_more());
    }

    #[test]
    fn apply_filter_resets_the_page_cursor() {
        let mut state = SessionState::new(numbered_catalog(100), 36, ThemeName::Day);
        state.show_more();
        assert_eq!(state.page, 2);

        state.apply_filter(&FilterCriteria {
            title_query: "Book 1".to_string(),
            ..FilterCriteria::default()
        });
        assert_eq!(state.page, 1);
        // "Book 1", "Book 10".."Book 19", "Book 100" does not exist.
        assert_eq!(state.matches.len(), 11);
    }

    #[test]
    fn rendered_never_exceeds_the_match_count() {
        let mut state = SessionState::new(numbered_catalog(10), 36, ThemeName::Day);
        state.show_more();
        state.show_more();
        assert_eq!(state.rendered().len(), 10);
    }

    #[test]
    fn page_view_flags_empty_result_sets() {
        let mut state = SessionState::new(numbered_catalog(10), 36, ThemeName::Day);
        state.apply_filter(&FilterCriteria {
            author: FieldFilter::Id("nobody".to_string()),
            ..FilterCriteria::default()
        });

        let view = state.page_view();
        assert!(view.show_empty);
        assert!(view.cards.is_empty());
        assert_eq!(view.remaining, 0);
        assert!(!view.has_more);
    }

    #[test]
    fn empty_catalog_session_starts_on_the_empty_state() {
        let mut state = SessionState::new(numbered_catalog(0), 36, ThemeName::Day);

        let view = state.page_view();
        assert!(view.show_empty);
        assert!(view.cards.is_empty());
        assert_eq!(view.remaining, 0);
        assert!(!view.has_more);

        // Paging an empty result set is a legal no-op.
        assert!(state.show_more().is_empty());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn page_view_cards_follow_catalog_order() {
        let state = SessionState::new(numbered_catalog(3), 36, ThemeName::Day);
        let view = state.page_view();
        let ids: Vec<&str> = view.cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b0", "b1", "b2"]);
        assert!(!view.show_empty);
    }
}
