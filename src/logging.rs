//! Diagnostic logging setup.
//!
//! Logs go to stderr through `tracing-subscriber`. Verbosity follows
//! `RUST_LOG` (for example `RUST_LOG=order_lookup=debug`) and defaults to
//! warnings only so the interactive prompts stay readable.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
