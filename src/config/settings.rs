//! Non-secret settings loaded from an optional TOML file.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use super::logging::LoggingConfig;
use crate::error::ConfigError;

/// Config file looked up when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Homework status endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

const fn default_retry_period_secs() -> u64 {
    600
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}

/// Top-level settings file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Status API polling settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Status endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Pause between poll cycles in seconds (default: 600).
    #[serde(default = "default_retry_period_secs")]
    pub retry_period_secs: u64,
    /// Optional request timeout in seconds. Unset means the HTTP client default.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            retry_period_secs: default_retry_period_secs(),
            request_timeout_secs: None,
        }
    }
}

impl ApiSettings {
    #[must_use]
    pub fn retry_period(&self) -> Duration {
        Duration::from_secs(self.retry_period_secs)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Settings {
    /// Load settings from a TOML file and validate them.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// holds invalid values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load settings from an explicit path, or from [`DEFAULT_CONFIG_PATH`]
    /// when it exists, falling back to built-in defaults.
    ///
    /// An explicitly named file must exist.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    /// Parse settings from a TOML string and validate them.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or holds invalid values.
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate values that serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = Url::parse(&self.api.endpoint).map_err(|e| ConfigError::InvalidValue {
            field: "endpoint",
            reason: e.to_string(),
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "endpoint",
                reason: format!("unsupported scheme '{}'", endpoint.scheme()),
            });
        }

        if self.api.retry_period_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_period_secs",
                reason: "must be greater than 0".into(),
            });
        }

        if self.api.request_timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                reason: "must be greater than 0".into(),
            });
        }

        self.logging.validate()
    }
}
