//! Logging Infrastructure
//!
//! Console logging (plain text or JSON lines), plus daily rotating files
//! when a log directory is configured. `RUST_LOG` overrides the configured
//! level.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the logging system.
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn")
/// * `json_format` - JSON lines on the console instead of plain text
/// * `log_dir` - Optional directory for daily rolling log files
///
/// The returned guard flushes the file writer on drop; hold it until exit.
pub fn init_logger(level: &str, json_format: bool, log_dir: Option<&str>) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Console goes to stderr so table output on stdout stays clean
    let text_layer = (!json_format).then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });
    let json_layer = json_format.then(|| {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
    });

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            fs::create_dir_all(log_dir)?;
            let appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "wings");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .with(file_layer)
        .try_init()?;
    Ok(guard)
}
