//! Preview card component renderer.

use crate::view::theme::Theme;
use crate::view::viewmodel::PreviewCard;

/// Renders one preview card.
///
/// Three lines: bold title in the theme's dark token, the author line when
/// present, and the cover URI dimmed. A card with an unknown author simply
/// has no author line.
///
/// # Layout
///
/// ```text
/// Dune Messiah
///   Author: Frank Herbert
///   https://covers.example.org/dune-messiah.jpg
/// ```
pub fn render_card(card: &PreviewCard, theme: &Theme) {
    println!(
        "{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.dark),
        card.title,
        Theme::reset()
    );

    if let Some(author) = &card.author_label {
        println!(
            "  {}{}{}",
            Theme::fg(&theme.colors.dark),
            author,
            Theme::reset()
        );
    }

    println!("  {}{}{}", Theme::dim(), card.cover_uri, Theme::reset());
}
