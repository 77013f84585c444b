//! Composable terminal renderers for the browser surfaces.
//!
//! Each component renders one part of the interface from its view model and
//! the active theme. Output is sequential, line-oriented ANSI text: the
//! shim is a scrolling command loop, not a full-screen pane, so components
//! print rows in order instead of positioning a cursor.
//!
//! # Components
//!
//! - [`card`]: One preview card (title, author line, cover URI)
//! - [`controls`]: The "show more" control with its remaining count
//! - [`detail`]: The detail overlay for a selected book
//! - [`empty`]: The empty-state message for zero-match searches

pub mod card;
pub mod controls;
pub mod detail;
pub mod empty;

pub use card::render_card;
pub use controls::render_show_more;
pub use detail::render_detail;
pub use empty::render_empty_state;
