//! Presentation layer: view models, presenters, themes, and rendering.
//!
//! This module turns domain records into display-ready payloads and renders
//! them to the terminal with ANSI styling. The split mirrors the rest of the
//! crate: [`present`] is pure projection, [`theme`] resolves color tokens,
//! and [`renderer`]/[`components`] do the actual printing.
//!
//! ```text
//! Book ─ summarize ─▶ PreviewCard ─┐
//! Book ─ expand ────▶ DetailView  ─┼─▶ renderer ─▶ ANSI output
//! ThemeName ────────▶ ThemeColors ─┘
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready record types
//! - [`present`]: The `summarize`/`expand` projection pair
//! - [`theme`]: Day/night themes, ambient resolution, ANSI helpers
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Card, controls, detail, and empty-state renderers

pub mod components;
pub mod present;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use present::{expand, summarize};
pub use theme::{Theme, ThemeName};
pub use viewmodel::{DetailView, EmptyState, PageView, PreviewCard};
