//! Process configuration.
//!
//! Secrets come from the environment ([`Credentials`]), everything else from
//! an optional TOML file ([`Settings`]). Both are combined once at startup
//! into an immutable [`Config`] that is borrowed by the poller and adapters.

mod credentials;
mod logging;
mod settings;

pub use credentials::{
    mask_secret, Credentials, PRACTICUM_TOKEN_VAR, TELEGRAM_CHAT_ID_VAR, TELEGRAM_TOKEN_VAR,
};
pub use logging::{LogFormat, LoggingConfig};
pub use settings::{ApiSettings, Settings, DEFAULT_CONFIG_PATH, DEFAULT_ENDPOINT};

/// Exit code for missing credentials (`EX_CONFIG` from sysexits).
pub const EXIT_MISSING_CONFIG: i32 = 78;

/// Full runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub settings: Settings,
}

impl Config {
    #[must_use]
    pub fn new(credentials: Credentials, settings: Settings) -> Self {
        Self {
            credentials,
            settings,
        }
    }

    /// Shorthand for the API section of the settings.
    #[must_use]
    pub fn api(&self) -> &ApiSettings {
        &self.settings.api
    }
}
