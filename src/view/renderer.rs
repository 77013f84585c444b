//! Top-level rendering coordinator.
//!
//! This module executes [`Effect`](crate::browse::Effect)s against stdout,
//! delegating to the component renderers. It owns the only piece of
//! presentation-side state: the currently applied theme, updated whenever
//! an `ApplyTheme` effect arrives so later pages pick up the new tokens.
//!
//! # Example
//!
//! ```
//! use tomeshelf::browse::{handle_command, Command, SessionState};
//! use tomeshelf::view::renderer::Renderer;
//! use tomeshelf::view::theme::ThemeName;
//!
//! let catalog = tomeshelf::catalog::builtin();
//! let mut state = SessionState::new(catalog, 36, ThemeName::Day);
//! let mut renderer = Renderer::new(ThemeName::Day);
//!
//! for effect in handle_command(&mut state, &Command::ShowMore) {
//!     renderer.execute(&effect);
//! }
//! ```

use crate::browse::Effect;
use crate::view::components;
use crate::view::theme::{Theme, ThemeColors, ThemeName};
use crate::view::viewmodel::{EmptyState, PageView};

/// Executes display effects against stdout.
#[derive(Debug, Clone)]
pub struct Renderer {
    /// The currently applied theme.
    theme: Theme,
}

impl Renderer {
    /// Creates a renderer with the given initial theme.
    #[must_use]
    pub fn new(initial: ThemeName) -> Self {
        Self {
            theme: Theme::from_name(initial),
        }
    }

    /// Returns the currently applied color tokens.
    ///
    /// Always reflects the most recently applied theme.
    #[must_use]
    pub fn active_colors(&self) -> &ThemeColors {
        &self.theme.colors
    }

    /// Executes one effect.
    pub fn execute(&mut self, effect: &Effect) {
        match effect {
            Effect::RenderPage(page) => self.render_page(page),
            Effect::ShowDetail(detail) => components::render_detail(detail, &self.theme),
            Effect::ApplyTheme(colors) => {
                self.theme.colors = colors.clone();
                tracing::debug!(dark = %colors.dark, light = %colors.light, "theme applied");
            }
        }
    }

    /// Renders a full page: the grid of cards and the show-more control, or
    /// the empty state when the result set is empty.
    fn render_page(&self, page: &PageView) {
        if page.show_empty {
            components::render_empty_state(&EmptyState::default(), &self.theme);
            return;
        }

        for card in &page.cards {
            components::render_card(card, &self.theme);
        }

        println!();
        components::render_show_more(page.remaining, page.has_more, &self.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_theme_updates_the_active_tokens() {
        let mut renderer = Renderer::new(ThemeName::Day);
        let day = renderer.active_colors().clone();

        let night = Theme::from_name(ThemeName::Night).colors;
        renderer.execute(&Effect::ApplyTheme(night));

        // Reading back the active tokens confirms the swap took effect.
        assert_eq!(renderer.active_colors().dark, day.light);
        assert_eq!(renderer.active_colors().light, day.dark);
    }
}
