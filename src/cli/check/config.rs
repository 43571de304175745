use std::path::Path;

use crate::cli::output;
use crate::config::{
    mask_secret, Credentials, Settings, PRACTICUM_TOKEN_VAR, TELEGRAM_CHAT_ID_VAR,
    TELEGRAM_TOKEN_VAR,
};
use crate::error::Result;

/// Validate settings and credentials without starting the poller.
pub fn execute_config(config_path: Option<&Path>) -> Result<()> {
    output::section("Configuration Check");

    let settings = match Settings::resolve(config_path) {
        Ok(settings) => settings,
        Err(e) => {
            output::error(&format!("Settings error: {e}"));
            return Err(e.into());
        }
    };

    match config_path {
        Some(path) => output::ok(&format!("Settings file is valid: {}", path.display())),
        None => output::ok("Settings loaded"),
    }
    output::key_value("Endpoint", &settings.api.endpoint);
    output::key_value("Retry period", format!("{}s", settings.api.retry_period_secs));
    output::key_value(
        "Timeout",
        settings
            .api
            .request_timeout_secs
            .map_or_else(|| "none".to_string(), |secs| format!("{secs}s")),
    );
    output::key_value("Log level", &settings.logging.level);
    output::key_value(
        "Log file",
        settings
            .logging
            .log_file()
            .map_or_else(|| "disabled".to_string(), |p| p.display().to_string()),
    );

    output::section("Environment");
    match Credentials::from_env() {
        Ok(credentials) => {
            output::key_value(PRACTICUM_TOKEN_VAR, mask_secret(credentials.practicum_token()));
            output::key_value(TELEGRAM_TOKEN_VAR, mask_secret(credentials.telegram_token()));
            output::key_value(TELEGRAM_CHAT_ID_VAR, credentials.telegram_chat_id());
            output::ok("Configuration is ready to use");
            Ok(())
        }
        Err(e) => {
            output::error(&e.to_string());
            output::warn("Set the variables in the environment or in a .env file");
            Err(e.into())
        }
    }
}
