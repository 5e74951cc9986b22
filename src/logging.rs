//! Log setup for the binary.
//!
//! Logs go to stderr so stdout stays clean for command output. `RUST_LOG`
//! takes precedence; otherwise `-v` raises the level for this crate.

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Level selected by the number of `-v` flags.
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Filter directive used when `RUST_LOG` is unset.
#[must_use]
pub fn default_directive(verbosity: u8) -> String {
    format!(
        "{}={}",
        env!("CARGO_PKG_NAME").replace('-', "_"),
        level_for(verbosity).to_string().to_lowercase()
    )
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if `RUST_LOG` is malformed or a subscriber is already set.
pub fn init(verbosity: u8) -> Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.is_empty() => EnvFilter::try_new(directives)?,
        _ => EnvFilter::try_new(default_directive(verbosity))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
}
