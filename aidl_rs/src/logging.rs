//! Diagnostic logging. Everything goes to stderr.

use std::io::IsTerminal;

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `AIDL_LOG=debug`.
pub const LOG_ENV: &str = "AIDL_LOG";

/// Installs the global subscriber. Filter comes from `AIDL_LOG`, then
/// `RUST_LOG`, defaulting to `warn`.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
