//! Detail overlay component renderer.

use crate::view::theme::Theme;
use crate::view::viewmodel::DetailView;

/// Renders the detail overlay for a selected book.
///
/// A bordered block with the title, the author/year line, the description,
/// and the cover URI. The author/year line may be the degraded year-only
/// form when the author id had no entry.
///
/// # Layout
///
/// ```text
/// ────────────────────────────────────────
/// Dune
/// Author: Frank Herbert (1965)
///
/// On the desert planet Arrakis ...
///
/// https://covers.example.org/dune.jpg
/// ────────────────────────────────────────
/// ```
pub fn render_detail(detail: &DetailView, theme: &Theme) {
    let border = format!(
        "{}{}{}",
        Theme::dim(),
        "\u{2500}".repeat(40),
        Theme::reset()
    );

    println!("{border}");
    println!(
        "{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.dark),
        detail.title,
        Theme::reset()
    );
    println!(
        "{}{}{}",
        Theme::fg(&theme.colors.dark),
        detail.author_year_label,
        Theme::reset()
    );
    println!();
    println!("{}", detail.description);
    println!();
    println!("{}{}{}", Theme::dim(), detail.cover_uri, Theme::reset());
    println!("{border}");
}
