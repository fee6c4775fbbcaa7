//! Tracing setup.
//!
//! The viewer draws on the whole terminal, so log lines must not go to
//! stdout or stderr. When a log file is configured every event is appended
//! there; otherwise no subscriber is installed and events are dropped.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Builds the level filter: `RUST_LOG` wins over the `-v` count.
pub fn filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter()))
}

/// Installs the global subscriber.
///
/// Returns `Ok(false)` when logging is disabled.
///
/// # Errors
///
/// Fails if the log file cannot be opened or a global subscriber is already
/// set.
pub fn init(config: &Config) -> io::Result<bool> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(io::Error::other)?;

    Ok(true)
}
