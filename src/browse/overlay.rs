//! Overlay state for the browser's dialogs.
//!
//! The original interface has three mutually exclusive dialogs: the search
//! form, the settings form, and the book detail view. This module models
//! their open/closed flags as a single enum, so at most one overlay is open
//! at a time and "all closed" is the default.

/// Which dialog, if any, is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    /// No dialog open; the grid of previews is the active surface.
    #[default]
    None,

    /// The search form is open.
    Search,

    /// The settings (theme) form is open.
    Settings,

    /// The detail view for the selected book is open.
    Detail,
}
