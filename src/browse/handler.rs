//! Command handling and state transition logic.
//!
//! This module implements the synchronous command dispatch at the heart of
//! the browser: every user action arrives as a [`Command`], mutates the
//! [`SessionState`], and yields a sequence of [`Effect`]s for the
//! presentation layer to execute. Commands are processed one at a time on
//! the caller's thread; there is no queueing, no I/O, and no way for a
//! command to observe another command mid-flight.
//!
//! # Command Categories
//!
//! - **Search**: `OpenSearch`, `CancelSearch`, `SubmitSearch`
//! - **Paging**: `ShowMore`
//! - **Selection**: `SelectBook`, `CloseDetail`
//! - **Settings**: `OpenSettings`, `CancelSettings`, `SubmitTheme`
//!
//! # Example
//!
//! ```
//! use tomeshelf::browse::{handle_command, Command, Effect, FilterCriteria, SessionState};
//! use tomeshelf::view::theme::ThemeName;
//!
//! let catalog = tomeshelf::catalog::builtin();
//! let mut state = SessionState::new(catalog, 36, ThemeName::Day);
//!
//! let effects = handle_command(&mut state, &Command::ShowMore);
//! assert!(matches!(effects[0], Effect::RenderPage(_)));
//! ```

use crate::browse::overlay::Overlay;
use crate::browse::{Effect, FilterCriteria, SessionState};
use crate::view::present;
use crate::view::theme::{Theme, ThemeName};

/// A discrete user action against the session.
///
/// Each variant corresponds to one inbound trigger from the presentation
/// layer: a form submission, a control click, or an item selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the search form.
    OpenSearch,

    /// Close the search form without filtering.
    CancelSearch,

    /// Filter the catalog with the given criteria.
    ///
    /// Closes the search form unconditionally, replaces the result set,
    /// and resets the page cursor.
    SubmitSearch(FilterCriteria),

    /// Advance to the next page of the current result set.
    ShowMore,

    /// Open the detail view for the book with this id.
    SelectBook {
        /// Id of the clicked preview card.
        id: String,
    },

    /// Close the detail view.
    CloseDetail,

    /// Open the settings form.
    OpenSettings,

    /// Close the settings form without changing the theme.
    CancelSettings,

    /// Apply the chosen theme and close the settings form.
    SubmitTheme {
        /// The chosen theme name.
        theme: ThemeName,
    },
}

/// Processes a command, mutates the session state, and returns the effects
/// to execute.
///
/// Infallible by design: every failure mode in the browsing core is a
/// degradation (unknown id → no-op, zero matches → empty-state page,
/// exhausted pager → unchanged page), so commands never error.
///
/// # Examples
///
/// ```
/// use tomeshelf::browse::{handle_command, Command, SessionState};
/// use tomeshelf::view::theme::ThemeName;
///
/// let catalog = tomeshelf::catalog::builtin();
/// let mut state = SessionState::new(catalog, 36, ThemeName::Day);
/// let effects = handle_command(&mut state, &Command::OpenSearch);
/// assert!(effects.is_empty());
/// ```
pub fn handle_command(state: &mut SessionState, command: &Command) -> Vec<Effect> {
    let _span = tracing::debug_span!("handle_command", command = ?command).entered();

    match command {
        Command::OpenSearch => {
            state.overlay = Overlay::Search;
            vec![]
        }
        Command::CancelSearch => {
            state.overlay = Overlay::None;
            vec![]
        }
        Command::SubmitSearch(criteria) => {
            // The overlay closes before filtering, zero-match runs included.
            state.overlay = Overlay::None;
            state.apply_filter(criteria);

            tracing::debug!(
                match_count = state.matches.len(),
                "search submitted"
            );

            vec![Effect::RenderPage(state.page_view())]
        }
        Command::ShowMore => {
            let revealed = state.show_more().len();

            tracing::debug!(
                revealed = revealed,
                page = state.page,
                remaining = state.remaining(),
                "page advanced"
            );

            vec![Effect::RenderPage(state.page_view())]
        }
        Command::SelectBook { id } => {
            let Some(book) = state.catalog.lookup_book(id) else {
                tracing::debug!(book_id = %id, "no book found for selection");
                return vec![];
            };

            let detail = present::expand(book, &state.catalog);
            state.selected = Some(id.clone());
            state.overlay = Overlay::Detail;

            tracing::debug!(book_id = %id, title = %detail.title, "book selected");

            vec![Effect::ShowDetail(detail)]
        }
        Command::CloseDetail => {
            state.overlay = Overlay::None;
            state.selected = None;
            vec![]
        }
        Command::OpenSettings => {
            state.overlay = Overlay::Settings;
            vec![]
        }
        Command::CancelSettings => {
            state.overlay = Overlay::None;
            vec![]
        }
        Command::SubmitTheme { theme } => {
            state.overlay = Overlay::None;
            state.theme = *theme;

            tracing::debug!(theme = %theme, "theme selected");

            vec![Effect::ApplyTheme(Theme::from_name(*theme).colors)]
        }
    }
}
