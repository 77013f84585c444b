//! Catalog layer: the immutable book dataset and its loaders.
//!
//! This module owns the source-of-truth data the rest of the crate browses.
//! The [`Catalog`] holds the ordered book list plus the author and genre
//! lookup tables; the [`loader`] submodule reads the JSON catalog format and
//! provides the embedded sample dataset.
//!
//! # Organization
//!
//! - [`store`]: The [`Catalog`] store with id lookups and validation
//! - [`loader`]: JSON deserialization and the built-in sample catalog

pub mod loader;
pub mod store;

pub use loader::{builtin, from_json, load_file};
pub use store::Catalog;
