//! Tracing subscriber setup

use anyhow::{anyhow, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogConfig, LogFormat};

/// File name prefix for the rolling log file
const LOG_FILE_PREFIX: &str = "addrbook.log";

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level. When a log directory is set,
/// events are also written to a daily-rolling file there; keep the returned
/// guard alive for as long as the process logs.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| anyhow!("Invalid log level '{}': {}", config.level, e))?;

    let (file_writer, guard) = match &config.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Text => registry
            .with(fmt::layer().compact())
            .with(file_writer.map(|writer| fmt::layer().with_ansi(false).with_writer(writer)))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json())
            .with(file_writer.map(|writer| fmt::layer().json().with_writer(writer)))
            .try_init(),
    };
    installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(guard)
}
