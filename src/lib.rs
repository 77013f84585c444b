//! tomeshelf: a terminal book catalog browser.
//!
//! tomeshelf renders a paginated grid of book preview cards from a static
//! in-memory dataset, filters it by title, author, and genre, shows a
//! detail view for a selected book, and toggles a day/night color theme.
//! There is no server, no persistence, and no concurrency: every operation
//! is a synchronous command against an explicit session state.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime Shim (main.rs)                             │  ← command loop
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Browsing Layer (browse/)                           │  ← session state
//! │  - Command dispatch                                 │  ← filter engine
//! │  - Filtering and paging                             │  ← pager
//! │  - Effect emission                                  │
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────┐       ┌───────────────────┐
//! │ Presentation      │       │ Catalog Layer     │
//! │ (view/)           │       │ (catalog/)        │
//! │ - Presenters      │       │ - Store + lookups │
//! │ - Themes          │       │ - JSON loading    │
//! │ - ANSI rendering  │       │ - Validation      │
//! └───────────────────┘       └───────────────────┘
//!         │                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Book record                                      │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`browse`]: Session state, commands, filter engine, pager, effects
//! - [`catalog`]: The immutable book dataset and its JSON loader
//! - [`domain`]: Core domain types (Book, errors)
//! - [`view`]: Presenters, view models, themes, ANSI rendering
//! - [`observability`]: Tracing subscriber setup
//!
//! # Data Flow
//!
//! Catalog → filter engine (on search submit) → pager (initial load and
//! "show more") → preview presenter per visible item → renderer. Selecting
//! a card routes through the detail presenter; the theme controller runs at
//! startup and on settings submission.
//!
//! # Example
//!
//! ```
//! use tomeshelf::browse::{handle_command, Command, FilterCriteria, SessionState};
//! use tomeshelf::view::theme::ThemeName;
//!
//! let catalog = tomeshelf::catalog::builtin();
//! let mut state = SessionState::new(catalog, 36, ThemeName::Day);
//!
//! let criteria = FilterCriteria {
//!     title_query: "dune".to_string(),
//!     ..FilterCriteria::default()
//! };
//! let effects = handle_command(&mut state, &Command::SubmitSearch(criteria));
//! assert_eq!(effects.len(), 1);
//! ```

pub mod browse;
pub mod catalog;
pub mod domain;
pub mod observability;
pub mod view;

pub use browse::{handle_command, Command, Effect, FilterCriteria, SessionState, BOOKS_PER_PAGE};
pub use catalog::Catalog;
pub use domain::{Book, Result, ShelfError};
pub use view::{Theme, ThemeName};

use std::collections::BTreeMap;

/// Runtime configuration parsed from the environment.
///
/// All values are optional with sensible defaults; the browser runs with no
/// configuration at all using the embedded sample catalog.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to a catalog JSON file.
    ///
    /// When unset the embedded sample catalog is used.
    pub catalog_path: Option<String>,

    /// Books rendered per page. Default: 36.
    pub page_size: usize,

    /// Explicit theme name (`day` or `night`).
    ///
    /// When set it overrides the ambient dark-mode detection. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`view::theme`] for the
    /// format.
    pub theme_file: Option<String>,

    /// Tracing level. Options: `trace`, `debug`, `info`, `warn`, `error`.
    /// Default: `"info"`.
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            page_size: BOOKS_PER_PAGE,
            theme_name: None,
            theme_file: None,
            log_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from an environment-variable map.
    ///
    /// # Parsing Rules
    ///
    /// - `TOMESHELF_CATALOG`: path string → `catalog_path`
    /// - `TOMESHELF_PAGE_SIZE`: string → `usize` (falls back to 36 on
    ///   parse error or zero)
    /// - `TOMESHELF_THEME`: string → `theme_name`
    /// - `TOMESHELF_THEME_FILE`: string → `theme_file`
    /// - `TOMESHELF_LOG`: string → `log_level`
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use tomeshelf::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("TOMESHELF_PAGE_SIZE".to_string(), "12".to_string());
    /// map.insert("TOMESHELF_THEME".to_string(), "night".to_string());
    ///
    /// let config = Config::from_env_map(&map);
    /// assert_eq!(config.page_size, 12);
    /// assert_eq!(config.theme_name.as_deref(), Some("night"));
    /// ```
    #[must_use]
    pub fn from_env_map(vars: &BTreeMap<String, String>) -> Self {
        let page_size = vars
            .get("TOMESHELF_PAGE_SIZE")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(BOOKS_PER_PAGE);

        Self {
            catalog_path: vars.get("TOMESHELF_CATALOG").cloned(),
            page_size,
            theme_name: vars.get("TOMESHELF_THEME").cloned(),
            theme_file: vars.get("TOMESHELF_THEME_FILE").cloned(),
            log_level: vars.get("TOMESHELF_LOG").cloned(),
        }
    }

    /// Parses configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        let vars: BTreeMap<String, String> = std::env::vars().collect();
        Self::from_env_map(&vars)
    }
}

/// Initializes a browsing session from configuration.
///
/// Loads the catalog (configured file or embedded sample) and resolves the
/// initial theme: an explicit configured name wins, otherwise the ambient
/// dark-mode signal decides (`dark → night`, else `day`).
///
/// # Errors
///
/// Returns [`ShelfError::Catalog`] or [`ShelfError::Io`] if the configured
/// catalog file is missing or malformed (fatal: the core refuses to
/// initialize on a dataset that cannot establish its invariants), or
/// [`ShelfError::Theme`] for an unrecognized configured theme name.
///
/// # Examples
///
/// ```
/// use tomeshelf::{initialize, Config};
///
/// let state = initialize(&Config::default()).unwrap();
/// assert!(!state.catalog.is_empty());
/// ```
pub fn initialize(config: &Config) -> Result<SessionState> {
    tracing::debug!("initializing tomeshelf session");

    let catalog = match &config.catalog_path {
        Some(path) => catalog::load_file(path)?,
        None => catalog::builtin(),
    };

    let theme = match &config.theme_name {
        Some(name) => name.parse::<ThemeName>()?,
        None => view::theme::resolve_initial(view::theme::ambient_prefers_dark()),
    };

    tracing::debug!(
        book_count = catalog.len(),
        page_size = config.page_size,
        theme = %theme,
        "session initialized"
    );

    Ok(SessionState::new(catalog, config.page_size, theme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_a_full_grid_page() {
        let config = Config::default();
        assert_eq!(config.page_size, 36);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn config_rejects_a_zero_page_size() {
        let mut vars = BTreeMap::new();
        vars.insert("TOMESHELF_PAGE_SIZE".to_string(), "0".to_string());
        assert_eq!(Config::from_env_map(&vars).page_size, 36);
    }

    #[test]
    fn config_ignores_non_numeric_page_sizes() {
        let mut vars = BTreeMap::new();
        vars.insert("TOMESHELF_PAGE_SIZE".to_string(), "lots".to_string());
        assert_eq!(Config::from_env_map(&vars).page_size, 36);
    }

    #[test]
    fn initialize_uses_the_embedded_catalog_by_default() {
        let state = initialize(&Config::default()).unwrap();
        assert!(state.catalog.len() >= 10);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn initialize_honors_an_explicit_theme_name() {
        let config = Config {
            theme_name: Some("night".to_string()),
            ..Config::default()
        };
        let state = initialize(&config).unwrap();
        assert_eq!(state.theme, ThemeName::Night);
    }

    #[test]
    fn initialize_rejects_an_unknown_theme_name() {
        let config = Config {
            theme_name: Some("dusk".to_string()),
            ..Config::default()
        };
        assert!(matches!(initialize(&config), Err(ShelfError::Theme(_))));
    }

    #[test]
    fn initialize_fails_fast_on_a_missing_catalog_file() {
        let config = Config {
            catalog_path: Some("/nonexistent/catalog.json".to_string()),
            ..Config::default()
        };
        assert!(initialize(&config).is_err());
    }
}
