//! Logging configuration and initialization.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Deserialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::ConfigError;

const DEFAULT_LOG_FILE: &str = "homework_bot.log";

/// Console output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
///
/// Events always go to the console. When `file` is set they are also
/// written, without ANSI colors, to that file; the file is truncated on
/// every start. An empty `file` value disables the file sink.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_file")]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    "info".into()
}

#[allow(clippy::unnecessary_wraps)]
fn default_file() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_LOG_FILE))
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            file: default_file(),
        }
    }
}

impl LoggingConfig {
    /// The log file to write to, if any.
    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Check that the level is a valid filter directive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unparseable level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        EnvFilter::try_new(&self.level).map_err(|e| ConfigError::InvalidValue {
            field: "level",
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Install the global tracing subscriber. `RUST_LOG` takes precedence
    /// over the configured level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Logging`] if the log file cannot be created or
    /// a subscriber is already installed.
    pub fn init(&self) -> Result<(), ConfigError> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .map_err(|e| ConfigError::Logging(e.to_string()))?;

        let file = self
            .log_file()
            .map(|path| {
                File::create(path)
                    .map_err(|e| ConfigError::Logging(format!("{}: {e}", path.display())))
            })
            .transpose()?;

        let (json, pretty) = match self.format {
            LogFormat::Json => (Some(fmt::layer().json()), None),
            LogFormat::Pretty => (None, Some(fmt::layer())),
        };
        let file_layer = file.map(|f| fmt::layer().with_ansi(false).with_writer(Mutex::new(f)));

        tracing_subscriber::registry()
            .with(filter)
            .with(json)
            .with(pretty)
            .with(file_layer)
            .try_init()
            .map_err(|e| ConfigError::Logging(e.to_string()))
    }
}
