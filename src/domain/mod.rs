//! Domain layer for the tomeshelf catalog browser.
//!
//! This module contains the core domain types shared by every other layer:
//! the immutable [`Book`] record and the crate-wide error type. It has no
//! knowledge of rendering, configuration, or the command loop.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`book`]: The book record and its display helpers
//!
//! # Examples
//!
//! ```
//! use tomeshelf::domain::{Book, Result};
//!
//! fn first_title(books: &[Book]) -> Option<&str> {
//!     books.first().map(|b| b.title.as_str())
//! }
//! ```

pub mod book;
pub mod error;

pub use book::Book;
pub use error::{Result, ShelfError};
