//! Empty state component renderer.

use crate::view::theme::Theme;
use crate::view::viewmodel::EmptyState;

/// Renders the empty state message shown when a search matches nothing.
///
/// Two lines: the primary message in the theme's dark token and the
/// subtitle dimmed beneath it. The grid is suppressed entirely; this is the
/// only output for a zero-match page.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme) {
    println!(
        "{}{}{}",
        Theme::fg(&theme.colors.dark),
        empty.message,
        Theme::reset()
    );
    println!("{}{}{}", Theme::dim(), empty.subtitle, Theme::reset());
}
