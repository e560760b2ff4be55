//! File logging. The terminal belongs to the UI, so nothing is written to stdout/stderr.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

pub const LOG_FILE: &str = "mipsref.log";
/// Overrides the configured level, same syntax as `RUST_LOG`
pub const LOG_ENV: &str = "MIPSREF_LOG";

/// Install the global subscriber writing to `dir/mipsref.log`.
///
/// The returned guard flushes the background writer when dropped and must
/// live until the program exits. `None` when logging is disabled.
pub fn init(config: &LoggingConfig, dir: &Path) -> Result<Option<WorkerGuard>> {
    if !config.enabled {
        return Ok(None);
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;

    Ok(Some(guard))
}

fn filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logging_installs_nothing() {
        let config = LoggingConfig {
            enabled: false,
            level: String::from("debug"),
        };
        let guard = init(&config, Path::new("/nonexistent/never/created")).unwrap();
        assert!(guard.is_none());
    }
}
