//! File logging setup.
//!
//! The TUI owns the terminal, so log output goes to
//! `${POSTDECK_HOME}/logs/postdeck.log` instead of stderr.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::paths;

/// Env var holding an `EnvFilter` directive that overrides the config level.
pub const LOG_ENV_VAR: &str = "POSTDECK_LOG";

const LOG_FILE_NAME: &str = "postdeck.log";

/// Installs the global subscriber writing to the default logs directory.
///
/// The returned guard flushes buffered lines on drop; keep it alive for the
/// lifetime of the process.
///
/// # Errors
/// Returns an error if the logs directory cannot be created, the filter is
/// invalid, or a global subscriber is already installed.
pub fn init(default_level: &str) -> Result<WorkerGuard> {
    init_in(&paths::logs_dir(), default_level)
}

/// Installs the global subscriber writing into `dir`.
///
/// # Errors
/// See [`init`].
pub fn init_in(dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let filter = build_filter(std::env::var(LOG_ENV_VAR).ok().as_deref(), default_level)?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(guard)
}

fn build_filter(env_directive: Option<&str>, default_level: &str) -> Result<EnvFilter> {
    let directive = env_directive
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(default_level);
    EnvFilter::try_new(directive).with_context(|| format!("Invalid log filter: {directive}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_directive_wins() {
        let filter = build_filter(Some("postdeck_core=debug"), "info").unwrap();
        assert_eq!(filter.to_string(), "postdeck_core=debug");
    }

    #[test]
    fn test_blank_env_falls_back_to_default() {
        let filter = build_filter(Some("  "), "warn").unwrap();
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_invalid_directive_is_rejected() {
        assert!(build_filter(None, "postdeck=loud").is_err());
    }
}
