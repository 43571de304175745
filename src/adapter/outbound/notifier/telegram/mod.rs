//! Telegram Bot API notifier.
//!
//! Requires the `telegram` feature to be enabled.

mod notifier;
mod recipient;

pub use notifier::TelegramNotifier;
pub use recipient::parse_recipient;
