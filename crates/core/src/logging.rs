use std::io::{stdout, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber: human-readable on a terminal, JSON
/// otherwise. Only the first call installs anything; an embedding app
/// that already set its own subscriber keeps it.
pub fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = if IsTerminal::is_terminal(&stdout()) {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_ansi(true)
            .with_target(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_ansi(false)
            .with_target(true)
            .try_init()
    };

    if installed.is_ok() {
        tracing::info!("logging initialized");
    }
}
