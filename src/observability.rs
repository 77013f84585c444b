//! Tracing initialization.
//!
//! This module wires the `tracing` macros used throughout the crate to a
//! `tracing-subscriber` pipeline: an `EnvFilter` for level control and a
//! compact fmt layer on stderr, keeping stdout free for the rendered
//! catalog.
//!
//! # Level Resolution
//!
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `log_level` from the crate [`Config`]
//! 3. Default: `"info"`

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber.
///
/// Idempotent: only the first call takes effect, later calls are silently
/// ignored. Never fails; observability is optional.
///
/// # Examples
///
/// ```
/// use tomeshelf::{observability, Config};
///
/// let config = Config {
///     log_level: Some("debug".to_string()),
///     ..Config::default()
/// };
/// observability::init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .log_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
