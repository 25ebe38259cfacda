//! Logging setup for the CLI

use anyhow::{Context, Result};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Build the event filter: `RUST_LOG` wins, otherwise `default_level`.
pub fn build_filter(default_level: &str) -> Result<EnvFilter> {
    let level: LevelFilter = default_level
        .parse()
        .with_context(|| format!("Invalid log level: {default_level}"))?;

    Ok(EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy())
}

/// Initialize tracing with a stderr formatter.
///
/// Call once at startup; a second call leaves the first subscriber in place.
pub fn init_logging(default_level: &str) -> Result<()> {
    let filter = build_filter(default_level)?;

    // Ignore the error if a global subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();

    Ok(())
}
