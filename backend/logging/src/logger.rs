//! Structured Logger
//!
//! Wraps `tracing` to provide console output, optional daily-rolling NDJSON
//! files, and environment-based level control.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::Dispatch;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Options for [`init_logger`].
#[derive(Debug, Clone, Copy)]
pub struct LoggerOptions<'a> {
    /// Filter used when `RUST_LOG` is unset.
    pub level: &'a str,
    /// Directory for `motorspeed.log.YYYY-MM-DD` files; console only when `None`.
    pub log_dir: Option<&'a Path>,
    /// JSON lines on the console instead of the human-readable format.
    pub json_console: bool,
}

impl Default for LoggerOptions<'_> {
    fn default() -> Self {
        Self {
            level: "info",
            log_dir: None,
            json_console: false,
        }
    }
}

/// Console-only subscriber used while the config (and with it the real
/// logger settings) is still being loaded.
///
/// Scope it to the loading future with
/// [`WithSubscriber`](tracing::instrument::WithSubscriber).
pub fn bootstrap_dispatch() -> Dispatch {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    );
    Dispatch::new(subscriber)
}

/// Initialize the global structured logger.
///
/// Fails if the log directory cannot be created. Safe to call more than
/// once; later calls are ignored.
pub fn init_logger(options: LoggerOptions<'_>) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(options.level));

    let console_layer = if options.json_console {
        fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(false)
            .with_ansi(true)
            .boxed()
    };

    // Rolling file appender: writes NDJSON to `<dir>/motorspeed.log.YYYY-MM-DD`
    let file_layer = match options.log_dir {
        Some(dir) => {
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("motorspeed.log")
                .build(dir)
                .with_context(|| format!("Cannot open log directory {}", dir.display()))?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file_appender)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();
    Ok(())
}
