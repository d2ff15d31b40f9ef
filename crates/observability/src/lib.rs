//! Shared tracing/logging setup for shopfront binaries and tests.
//!
//! The library crates only *emit* via `tracing`; installing a subscriber is
//! the embedding application's call, and these helpers are the one obvious
//! way to do it.

use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Human-readable log lines, filtered via `RUST_LOG` (default `info`).
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .compact()
        .try_init();
}

/// JSON log lines for machine consumption, same filtering rules as [`init`].
pub fn init_json() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .json()
        .with_target(false)
        .try_init();
}
