use crate::cli::LogFormat;
use crate::constants::{LOG_DIRECTORY, LOG_FILE_NAME};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system with the specified log level and format.
///
/// # Arguments
///
/// * `log_level` - The desired log level as a string (e.g. "info", "debug", "warn")
/// * `format` - Human-readable lines or one JSON object per record on stdout
/// * `with_file` - Whether to also log to a daily rotating file in the "logs" directory.
///
/// # Example
///
/// ```
/// init_logging("info", LogFormat::Json, false);
/// ```
pub fn init_logging(log_level: &str, format: LogFormat, with_file: bool) {
    let filter = match EnvFilter::try_new(log_level) {
        Ok(f) => f,
        Err(_) => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", log_level);
            EnvFilter::new("info")
        }
    };

    let (pretty_layer, json_layer) = match format {
        LogFormat::Pretty => (Some(fmt::layer().with_line_number(true)), None),
        LogFormat::Json => (
            None,
            Some(fmt::layer().json().flatten_event(true).with_current_span(false)),
        ),
    };

    let file_layer = with_file.then(|| {
        let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIRECTORY, LOG_FILE_NAME);
        fmt::layer()
            .with_ansi(false)
            .with_line_number(true)
            .with_writer(file_appender)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty_layer)
        .with(json_layer)
        .with(file_layer)
        .init();
}
