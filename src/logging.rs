//! File logging setup.
//!
//! The terminal belongs to the UI, so records are written to a file only.
//! Configuration comes from the environment:
//!
//! - `WAREKI_LOG`: an `EnvFilter` directive (default `info`).
//! - `WAREKI_LOG_DIR`: directory for `wareki.log` (default `$XDG_DATA_HOME/wareki`).

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter directive.
pub const LOG_FILTER_VAR: &str = "WAREKI_LOG";
/// Environment variable overriding the log directory.
pub const LOG_DIR_VAR: &str = "WAREKI_LOG_DIR";

const DEFAULT_FILTER: &str = "info";
const LOG_FILE_NAME: &str = "wareki.log";

/// Errors that can occur while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The platform does not provide a data directory and none was configured.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// The log directory or file could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The filter directive did not parse.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// Another global subscriber was installed first.
    #[error("logging already initialized: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            dir: None,
        }
    }
}

impl LogConfig {
    /// Reads [`LOG_FILTER_VAR`] and [`LOG_DIR_VAR`]. Unset or blank values use defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |v: String| (!v.trim().is_empty()).then_some(v);
        Self {
            filter: get(LOG_FILTER_VAR)
                .and_then(non_blank)
                .unwrap_or_else(|| DEFAULT_FILTER.to_string()),
            dir: get(LOG_DIR_VAR).and_then(non_blank).map(PathBuf::from),
        }
    }

    /// Resolves the log file path.
    pub fn log_path(&self) -> Result<PathBuf, LoggingError> {
        let dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .ok_or(LoggingError::NoDataDir)?
                .join("wareki"),
        };
        Ok(dir.join(LOG_FILE_NAME))
    }
}

/// Local wall-clock timestamps.
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%dT%H:%M:%S%.6f%:z"))
    }
}

/// Installs the global subscriber writing to the configured file.
///
/// Returns the log file path. Fails with [`LoggingError::AlreadyInitialized`]
/// if a global subscriber is already installed, since records would not reach
/// the file.
pub fn init(config: &LogConfig) -> Result<PathBuf, LoggingError> {
    let filter = EnvFilter::try_new(&config.filter)?;
    let path = config.log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::options().create(true).append(true).open(&path)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_timer(LocalTime)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = LogConfig::from_vars(vars(&[]));
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.dir, None);
    }

    #[test]
    fn reads_filter_and_dir() {
        let config = LogConfig::from_vars(vars(&[
            ("WAREKI_LOG", "wareki=debug"),
            ("WAREKI_LOG_DIR", "/tmp/wareki-logs"),
        ]));
        assert_eq!(config.filter, "wareki=debug");
        assert_eq!(config.dir, Some(PathBuf::from("/tmp/wareki-logs")));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = LogConfig::from_vars(vars(&[("WAREKI_LOG", "  "), ("WAREKI_LOG_DIR", "")]));
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn log_path_uses_configured_dir() {
        let config = LogConfig {
            dir: Some(PathBuf::from("/var/tmp/x")),
            ..LogConfig::default()
        };
        assert_eq!(
            config.log_path().unwrap(),
            PathBuf::from("/var/tmp/x/wareki.log")
        );
    }

    // The only test that installs the global subscriber.
    #[test]
    fn init_creates_log_file_and_refuses_second_install() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            filter: "debug".to_string(),
            dir: Some(dir.path().join("nested")),
        };
        let path = init(&config).unwrap();
        assert_eq!(path, dir.path().join("nested").join("wareki.log"));
        assert!(path.exists());

        assert!(matches!(
            init(&config),
            Err(LoggingError::AlreadyInitialized(_))
        ));
    }

    #[test]
    fn init_rejects_bad_filter() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            filter: "wareki=notalevel".to_string(),
            dir: Some(dir.path().to_path_buf()),
        };
        assert!(matches!(init(&config), Err(LoggingError::Filter(_))));
    }
}
