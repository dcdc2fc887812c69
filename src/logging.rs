//! Logger set-up for the `ledge` binary and tests.
//!
//! The library only emits records through the `log` facade; this module
//! installs `env_logger` as the backend. `RUST_LOG` always takes precedence
//! over the level chosen here.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Picks the default filter for a run.
///
/// Per-frame actor traces are only useful when stepping a handful of
/// frames, so `verbose` raises the crate to `trace` while other crates stay
/// at `debug`.
#[must_use]
pub fn default_filter(verbose: bool) -> String {
    if verbose {
        format!("{},ledge={}", LevelFilter::Debug, LevelFilter::Trace)
    } else {
        LevelFilter::Info.to_string()
    }
}

/// Initializes the global logger.
///
/// Calling this more than once is harmless: later calls leave the first
/// logger in place.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None);

    // `try_init` only fails if a logger was already set.
    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}
