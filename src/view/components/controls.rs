//! Show-more control renderer.

use crate::view::theme::Theme;

/// Renders the "show more" control line.
///
/// The label always carries the remaining count, `Show more (0)` included;
/// when nothing remains the control renders dimmed with a disabled hint,
/// mirroring a disabled button.
///
/// # Examples
///
/// ```text
/// [ Show more (64) ]
/// [ Show more (0) ] (disabled)
/// ```
pub fn render_show_more(remaining: usize, has_more: bool, theme: &Theme) {
    if has_more {
        println!(
            "{}[ Show more ({remaining}) ]{}",
            Theme::fg(&theme.colors.dark),
            Theme::reset()
        );
    } else {
        println!(
            "{}[ Show more ({remaining}) ] (disabled){}",
            Theme::dim(),
            Theme::reset()
        );
    }
}
