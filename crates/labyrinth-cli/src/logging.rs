//! Diagnostic tracing for the command line.
//!
//! Search progress (generations, pruning, accepted loops) is emitted as
//! `tracing` events by `labyrinth-search`. Result files are written
//! regardless of the log level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// Reads `RUST_LOG`, defaulting to `info`. Output goes to stderr in the
/// compact format, leaving stdout for command output.
///
/// ```bash
/// RUST_LOG=labyrinth_search=debug labyrinth run
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
