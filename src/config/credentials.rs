//! Secrets loaded from the process environment.

use std::fmt;

use crate::error::ConfigError;

/// Review API OAuth token.
pub const PRACTICUM_TOKEN_VAR: &str = "PR_TOKEN";
/// Telegram bot token.
pub const TELEGRAM_TOKEN_VAR: &str = "TG_TOKEN";
/// Telegram chat the notifications go to.
pub const TELEGRAM_CHAT_ID_VAR: &str = "TG_CHAT_ID";

/// The three secrets the bot cannot run without.
///
/// All values are guaranteed non-empty once constructed.
#[derive(Clone)]
pub struct Credentials {
    practicum_token: String,
    telegram_token: String,
    telegram_chat_id: String,
}

impl Credentials {
    /// Read credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] naming every variable that
    /// is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary lookup function.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| {
            let value = lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty());
            if value.is_none() {
                missing.push(name);
            }
            value.unwrap_or_default()
        };

        let practicum_token = read(PRACTICUM_TOKEN_VAR);
        let telegram_token = read(TELEGRAM_TOKEN_VAR);
        let telegram_chat_id = read(TELEGRAM_CHAT_ID_VAR);

        if !missing.is_empty() {
            return Err(ConfigError::MissingCredentials { names: missing });
        }

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
        })
    }

    #[must_use]
    pub fn practicum_token(&self) -> &str {
        &self.practicum_token
    }

    #[must_use]
    pub fn telegram_token(&self) -> &str {
        &self.telegram_token
    }

    #[must_use]
    pub fn telegram_chat_id(&self) -> &str {
        &self.telegram_chat_id
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &mask_secret(&self.practicum_token))
            .field("telegram_token", &mask_secret(&self.telegram_token))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

/// Mask a secret for display, keeping a short prefix and suffix.
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() >= 15 {
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 5..].iter().collect();
        format!("{head}...{tail}")
    } else {
        let head: String = chars.iter().take(chars.len().min(4)).collect();
        format!("{head}...")
    }
}
