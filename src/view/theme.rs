//! Theme resolution and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the browser: a closed set
//! of two themes (`day` and `night`), each mapping to a `{dark, light}` pair
//! of RGB triplet tokens. Built-in themes are embedded TOML files; a custom
//! token pair can also be loaded from a user TOML file.
//!
//! The initial theme resolves from the ambient dark-mode preference once at
//! startup; an explicit selection during the session wins until the process
//! exits. Nothing is persisted.
//!
//! # TOML Format
//!
//! ```toml
//! name = "day"
//!
//! [colors]
//! dark = "10, 10, 20"
//! light = "255, 255, 255"
//! ```
//!
//! # Example
//!
//! ```
//! use tomeshelf::view::theme::{Theme, ThemeName};
//!
//! let night = Theme::from_name(ThemeName::Night);
//! let day = Theme::from_name(ThemeName::Day);
//! assert_eq!(night.colors.dark, day.colors.light);
//! ```

use crate::domain::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// The closed set of theme names.
///
/// An unrecognized name cannot be represented, so the controller never sees
/// one; parsing user input goes through [`ThemeName::from_str`], which
/// rejects anything outside the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    /// Light scheme: dark text on a light surface.
    #[default]
    Day,

    /// Dark scheme: the day tokens swapped.
    Night,
}

impl ThemeName {
    /// Returns the lowercase name used in theme files and settings forms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "day" => Ok(Self::Day),
            "night" => Ok(Self::Night),
            other => Err(ShelfError::Theme(format!("unknown theme '{other}'"))),
        }
    }
}

/// Resolves the initial theme from the ambient dark-mode preference.
///
/// `dark → night`, else `day`. Called once at startup; each process launch
/// re-resolves because nothing is persisted.
#[must_use]
pub const fn resolve_initial(prefers_dark: bool) -> ThemeName {
    if prefers_dark {
        ThemeName::Night
    } else {
        ThemeName::Day
    }
}

/// Reads the ambient dark-mode preference from the environment.
///
/// Terminals expose no `prefers-color-scheme`; the closest native signal is
/// the `COLORFGBG` convention, whose last segment is the background color
/// code. Codes 0–6 and 8 are dark backgrounds. An unset or unparsable
/// variable reads as "no dark preference".
#[must_use]
pub fn ambient_prefers_dark() -> bool {
    std::env::var("COLORFGBG").is_ok_and(|value| {
        value
            .rsplit(';')
            .next()
            .and_then(|bg| bg.trim().parse::<u8>().ok())
            .is_some_and(|bg| bg <= 6 || bg == 8)
    })
}

/// The two active color tokens of a theme.
///
/// Tokens are RGB triplet strings (e.g. `"10, 10, 20"`), matching how the
/// presentation layer consumes them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// The "dark" token: text color in day, surface color in night.
    pub dark: String,

    /// The "light" token: surface color in day, text color in night.
    pub light: String,
}

/// A named theme: metadata plus its color token pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Theme name.
    pub name: String,

    /// The `{dark, light}` token pair.
    pub colors: ThemeColors,
}

impl Theme {
    /// Loads a built-in theme.
    ///
    /// Infallible: the name set is closed and both theme files are embedded
    /// in the binary.
    ///
    /// # Panics
    ///
    /// Panics if an embedded theme file fails to parse, which would mean
    /// the shipped asset itself is broken.
    #[must_use]
    pub fn from_name(name: ThemeName) -> Self {
        let toml_str = match name {
            ThemeName::Day => include_str!("../../themes/day.toml"),
            ThemeName::Night => include_str!("../../themes/night.toml"),
        };

        toml::from_str(toml_str).expect("built-in theme should always parse")
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Theme`] if the file cannot be read or the TOML
    /// cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ShelfError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| ShelfError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Parses an RGB triplet token into its components.
    ///
    /// Returns `(255, 255, 255)` (white) on malformed tokens so rendering
    /// degrades to visible output instead of failing.
    fn token_to_rgb(token: &str) -> (u8, u8, u8) {
        let mut parts = token.split(',').map(|part| part.trim().parse::<u8>());
        match (parts.next(), parts.next(), parts.next()) {
            (Some(Ok(r)), Some(Ok(g)), Some(Ok(b))) => (r, g, b),
            _ => (255, 255, 255),
        }
    }

    /// Generates an ANSI 24-bit foreground color escape sequence for a
    /// token.
    #[must_use]
    pub fn fg(token: &str) -> String {
        let (r, g, b) = Self::token_to_rgb(token);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence for a
    /// token.
    #[must_use]
    pub fn bg(token: &str) -> String {
        let (r, g, b) = Self::token_to_rgb(token);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the day theme.
    fn default() -> Self {
        Self::from_name(ThemeName::Day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn night_tokens_are_the_day_tokens_swapped() {
        let day = Theme::from_name(ThemeName::Day);
        let night = Theme::from_name(ThemeName::Night);

        assert_eq!(night.colors.dark, day.colors.light);
        assert_eq!(night.colors.light, day.colors.dark);
    }

    #[test]
    fn initial_theme_follows_the_ambient_signal() {
        assert_eq!(resolve_initial(true), ThemeName::Night);
        assert_eq!(resolve_initial(false), ThemeName::Day);
    }

    #[test]
    fn theme_names_parse_from_the_closed_set_only() {
        assert_eq!("day".parse::<ThemeName>().unwrap(), ThemeName::Day);
        assert_eq!("night".parse::<ThemeName>().unwrap(), ThemeName::Night);
        assert!("dusk".parse::<ThemeName>().is_err());
    }

    #[test]
    fn from_file_loads_a_custom_token_pair() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "name = \"custom\"\n\n[colors]\ndark = \"1, 2, 3\"\nlight = \"4, 5, 6\"\n"
        )
        .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
        assert_eq!(theme.colors.dark, "1, 2, 3");
    }

    #[test]
    fn from_file_reports_malformed_toml_as_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not toml at all [").unwrap();
        assert!(matches!(
            Theme::from_file(file.path()),
            Err(ShelfError::Theme(_))
        ));
    }

    #[test]
    fn tokens_render_as_24_bit_escape_sequences() {
        assert_eq!(Theme::fg("10, 10, 20"), "\u{001b}[38;2;10;10;20m");
        assert_eq!(Theme::bg("255, 255, 255"), "\u{001b}[48;2;255;255;255m");
    }

    #[test]
    fn malformed_tokens_fall_back_to_white() {
        assert_eq!(Theme::fg("not a color"), "\u{001b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("300, 0, 0"), "\u{001b}[38;2;255;255;255m");
    }
}
