//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for the Telegram Bot API and for a
//! log-only sink used in dry-run mode.

mod logger;

#[cfg(feature = "telegram")]
pub mod telegram;

pub use logger::LogNotifier;

use tracing::info;
#[cfg(not(feature = "telegram"))]
use tracing::warn;

use crate::config::Config;
use crate::port::Notifier;

/// Build the notifier for the given configuration.
///
/// Dry-run always logs instead of sending. Without the `telegram` feature
/// the log notifier is the only backend available.
#[must_use]
pub fn build_notifier(config: &Config, dry_run: bool) -> Box<dyn Notifier> {
    if dry_run {
        info!("Dry-run mode: notifications will be logged, not sent");
        return Box::new(LogNotifier);
    }
    default_notifier(config)
}

#[cfg(feature = "telegram")]
fn default_notifier(config: &Config) -> Box<dyn Notifier> {
    info!(
        chat_id = %config.credentials.telegram_chat_id(),
        "Telegram notifier enabled"
    );
    Box::new(telegram::TelegramNotifier::from_credentials(
        &config.credentials,
    ))
}

#[cfg(not(feature = "telegram"))]
fn default_notifier(_config: &Config) -> Box<dyn Notifier> {
    warn!("Built without the telegram feature; notifications will only be logged");
    Box::new(LogNotifier)
}
