use thiserror::Error;

/// Configuration-related errors raised before the poll loop starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", names.join(", "))]
    MissingCredentials { names: Vec<&'static str> },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// Errors raised by a single poll cycle.
///
/// None of these stop the loop. Each one is turned into an error
/// notification and the cycle is retried after the regular sleep.
#[derive(Error, Debug)]
pub enum PollError {
    #[error("status API request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("status API returned unexpected status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("status API returned invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("unexpected response type: expected {expected}")]
    WrongType { expected: &'static str },

    #[error("missing required field in API response: {field}")]
    MissingField { field: &'static str },

    #[error("undocumented homework status: {status}")]
    UndocumentedStatus { status: String },
}

impl PollError {
    /// Whether the cycle failed before the API produced a usable body.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::UnexpectedStatus { .. })
    }
}

/// Notification delivery errors. Logged by the caller, never propagated.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[cfg(feature = "telegram")]
    #[error("telegram request failed: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("notification rejected: {0}")]
    Rejected(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Missing credentials get the distinguished configuration code so
    /// supervisors can tell them apart from other startup failures.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(ConfigError::MissingCredentials { .. }) => {
                crate::config::EXIT_MISSING_CONFIG
            }
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
