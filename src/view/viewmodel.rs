//! View model types representing display-ready state.
//!
//! These records are computed from domain data and contain no business
//! logic; the renderer consumes them without consulting the catalog or the
//! session state. All of them are plain data, cheap to clone, and carried
//! inside [`Effect`](crate::browse::Effect) values.

/// Display-ready summary of one book, rendered as a preview card.
///
/// Produced by [`summarize`](crate::view::present::summarize). The author
/// label is absent (not a placeholder string) when the author id has no
/// entry in the catalog's author table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCard {
    /// Book id, used to select the card.
    pub id: String,

    /// Display title.
    pub title: String,

    /// `"Author: <name>"`, or `None` for an unknown author id.
    pub author_label: Option<String>,

    /// Cover image URI.
    pub cover_uri: String,

    /// Alternative text for the cover (the title).
    pub alt_text: String,
}

/// Expanded display payload for the detail overlay.
///
/// Produced by [`expand`](crate::view::present::expand).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Display title.
    pub title: String,

    /// `"Author: <name> (<year>)"`, degraded to `"(<year>)"` when the
    /// author id is unknown.
    pub author_year_label: String,

    /// Long-form description.
    pub description: String,

    /// Cover image URI.
    pub cover_uri: String,
}

/// One rendered page of the grid plus its control state.
///
/// Carries everything shown so far for the current result set; the grid is
/// rebuilt from this wholesale on every filter change or page advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Preview cards for all rendered pages, in result-set order.
    pub cards: Vec<PreviewCard>,

    /// Count of results not yet rendered.
    pub remaining: usize,

    /// Whether the "show more" control should be enabled.
    pub has_more: bool,

    /// Whether to show the empty-state message instead of the grid.
    pub show_empty: bool,
}

/// Empty state message shown when a search matches nothing.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            message: "No results found.".to_string(),
            subtitle: "Your filters might be too narrow.".to_string(),
        }
    }
}
