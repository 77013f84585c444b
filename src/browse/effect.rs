//! Display effects emitted by the command handler.
//!
//! This module defines the [`Effect`] type, the outbound half of the
//! in-process contract with the presentation layer. Effects are produced by
//! [`handle_command`](crate::browse::handle_command) and executed by the
//! caller in order; they are the only channel through which the core asks
//! for anything to be drawn.

use crate::view::theme::ThemeColors;
use crate::view::viewmodel::{DetailView, PageView};

/// Commands for the presentation layer.
///
/// Each effect carries display-ready data; the presentation layer applies
/// them without consulting session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the grid with the given page of preview cards.
    ///
    /// The page carries everything rendered so far for the current result
    /// set (the grid is rebuilt wholesale, not patched), plus the
    /// remaining-count and has-more flag for the "show more" control and
    /// the empty-state flag for zero-match results.
    RenderPage(PageView),

    /// Open the detail overlay with the expanded record.
    ShowDetail(DetailView),

    /// Apply the given `{dark, light}` color tokens as the active theme.
    ApplyTheme(ThemeColors),
}
