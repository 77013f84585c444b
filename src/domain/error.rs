//! Error types for the tomeshelf catalog browser.
//!
//! This module defines the centralized error type [`ShelfError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! The error surface is deliberately narrow: the browsing core is read-only
//! and side-effect free, so most degradations (unknown author id, empty
//! result set, pager overrun) are modeled as absence or empty values rather
//! than errors. Only startup-level faults reach this type.

use thiserror::Error;

/// The main error type for tomeshelf operations.
///
/// Consolidates the failure conditions that can abort initialization or
/// asset loading. Rendering-time degradations never produce this type; they
/// surface as `Option::None` or empty collections per the component
/// contracts.
///
/// # Examples
///
/// ```
/// use tomeshelf::domain::ShelfError;
///
/// fn reject_duplicate_id(id: &str) -> Result<(), ShelfError> {
///     Err(ShelfError::Catalog(format!("duplicate book id '{id}'")))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ShelfError {
    /// The catalog input is malformed.
    ///
    /// Raised when a required array or map is missing, a book id is
    /// duplicated or empty, or the JSON cannot be parsed. Fatal: the core
    /// refuses to initialize rather than operate on a partial catalog.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    ///
    /// Occurs when a custom theme file cannot be read or parsed, or when a
    /// configured theme name is not in the built-in set.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for tomeshelf operations.
///
/// # Examples
///
/// ```
/// use tomeshelf::domain::Result;
///
/// fn load_something() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ShelfError>;
