//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default log file name inside the data directory.
const LOG_FILE_NAME: &str = "book-browser.log";

/// Where log lines go: `config.log_file` if set, otherwise
/// `<data dir>/book-browser.log`.
#[must_use]
pub fn log_file_path(config: &Config) -> PathBuf {
    config.log_file.as_deref().map_or_else(
        || crate::infrastructure::get_data_dir().join(LOG_FILE_NAME),
        |path| PathBuf::from(crate::infrastructure::expand_tilde(path)),
    )
}

/// Installs the global subscriber.
///
/// Sets up a pipeline that:
/// 1. Filters events by the configured level
/// 2. Formats them without ANSI colors
/// 3. Appends them to the rotating log file
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently does nothing if that fails (logging is optional)
/// - An unparsable level falls back to `"info"`
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use book_browser::observability::init_tracing;
/// use book_browser::Config;
///
/// let dir = std::env::temp_dir().join("book-browser-doc");
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     log_file: Some(dir.join("doc.log").display().to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let log_file = log_file_path(config);
    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(FileWriter::new(log_file));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_log_file_wins() {
        let config = Config {
            log_file: Some("/tmp/custom.log".to_string()),
            ..Config::default()
        };
        assert_eq!(log_file_path(&config), PathBuf::from("/tmp/custom.log"));
    }

    #[test]
    fn default_log_file_lives_in_data_dir() {
        let path = log_file_path(&Config::default());
        assert!(path.ends_with(LOG_FILE_NAME));
    }
}
