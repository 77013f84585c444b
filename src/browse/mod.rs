//! Browsing layer coordinating session state, commands, and effects.
//!
//! This module is the application core: it owns the session's mutable state
//! and implements the synchronous command dispatch that every user action
//! flows through.
//!
//! # Architecture
//!
//! The layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Action → Command → handle_command → State Mutations → Effects → Presentation
//! ```
//!
//! All operations are synchronous and run on the caller's thread; each
//! command is fully processed before the next begins, so the session state
//! needs no locking discipline.
//!
//! # Modules
//!
//! - [`filter`]: Filter criteria and the order-preserving filter engine
//! - [`pager`]: Fixed-size result windows and remaining-count arithmetic
//! - [`overlay`]: Open/closed dialog state
//! - [`effect`]: Display commands emitted by the handler
//! - [`handler`]: Command processing and state transition coordinator
//! - [`state`]: The session state container and page view computation
//!
//! # Example
//!
//! ```
//! use tomeshelf::browse::{handle_command, Command, FilterCriteria, SessionState};
//! use tomeshelf::view::theme::ThemeName;
//!
//! let catalog = tomeshelf::catalog::builtin();
//! let mut state = SessionState::new(catalog, 36, ThemeName::Day);
//! let effects = handle_command(&mut state, &Command::SubmitSearch(FilterCriteria::default()));
//! assert_eq!(effects.len(), 1);
//! ```

pub mod effect;
pub mod filter;
pub mod handler;
pub mod overlay;
pub mod pager;
pub mod state;

pub use effect::Effect;
pub use filter::{FieldFilter, FilterCriteria};
pub use handler::{handle_command, Command};
pub use overlay::Overlay;
pub use state::SessionState;

/// Default number of books rendered per page.
pub const BOOKS_PER_PAGE: usize = 36;
