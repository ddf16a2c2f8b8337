use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

pub const LOG_FILE_PREFIX: &str = "component-lab.log";

/// Initialize tracing to a daily-rotated file under `config.dir`.
///
/// Stdout belongs to the terminal UI, so nothing is written there.
/// `RUST_LOG` takes precedence over the configured level. Returns `None`
/// when logging is disabled; otherwise the guard must be held until exit
/// so buffered lines get flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    if !config.enabled {
        return Ok(None);
    }

    std::fs::create_dir_all(&config.dir)
        .with_context(|| format!("failed to create log directory {}", config.dir.display()))?;

    let appender = tracing_appender::rolling::daily(&config.dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(Some(guard))
}
