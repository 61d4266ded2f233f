//! Logging Setup
//!
//! Logs go to stdout and to a daily rolling file in the data directory.
//! `RUST_LOG` overrides the default level.

use crate::helpers::{get_or_create_log_dir, is_development};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

/// Base name of the rolling log file
pub const LOG_FILE_NAME: &str = "mail-composer.log";

fn default_level() -> &'static str {
    if is_development() { "debug" } else { "info" }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level()))
}

/// Install the global subscriber.
///
/// Returns the file writer guard; dropping it stops file logging. When the
/// log directory cannot be created only stdout logging is installed.
pub fn init() -> Option<WorkerGuard> {
    let stdout_layer = fmt::layer().with_writer(std::io::stdout);

    match get_or_create_log_dir() {
        Ok(log_dir) => {
            let (file_writer, guard) = tracing_appender::non_blocking(
                tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME),
            );
            Registry::default()
                .with(env_filter())
                .with(stdout_layer)
                .with(fmt::layer().with_ansi(false).with_writer(file_writer))
                .init();
            tracing::debug!(path = ?log_dir, "File logging enabled");
            Some(guard)
        }
        Err(e) => {
            Registry::default()
                .with(env_filter())
                .with(stdout_layer)
                .init();
            tracing::warn!(error = %e, "File logging disabled");
            None
        }
    }
}
