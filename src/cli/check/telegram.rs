use std::path::Path;

use crate::adapter::outbound::notifier::telegram::TelegramNotifier;
use crate::cli::output;
use crate::config::{mask_secret, Credentials, Settings};
use crate::error::Result;
use crate::port::Notifier;

const TEST_MESSAGE: &str = "Проверка связи: homework-bot настроен и может отправлять сообщения.";

/// Test Telegram notification by sending a test message.
pub async fn execute_telegram(config_path: Option<&Path>) -> Result<()> {
    Settings::resolve(config_path)?;
    let credentials = Credentials::from_env()?;

    output::section("Telegram Check");
    output::key_value("Bot token", mask_secret(credentials.telegram_token()));
    output::key_value("Chat ID", credentials.telegram_chat_id());

    let notifier = TelegramNotifier::from_credentials(&credentials);
    match notifier.send(TEST_MESSAGE).await {
        Ok(()) => {
            output::ok("Telegram test message sent");
            Ok(())
        }
        Err(e) => {
            output::error(&format!("Failed to send message: {e}"));
            Err(e.into())
        }
    }
}
