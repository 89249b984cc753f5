//! Diagnostic logging
//!
//! User-facing progress is printed to stdout by [`crate::ui`]. This module sets
//! up `tracing` for the internal trail (URLs, commands, resolved paths), which
//! goes to stderr so it never mixes with the installer output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for a `-v` count
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,componentry=debug",
        _ => "debug,componentry=trace",
    }
}

/// Initialize logging
///
/// `RUST_LOG` wins over the verbosity flag when it is set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
