//! Provides the [`TelegramNotifier`] for delivering status messages to a
//! single chat.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::Recipient;
use tracing::debug;

use super::recipient::parse_recipient;
use crate::config::Credentials;
use crate::error::NotifyError;
use crate::port::Notifier;

/// Telegram notifier that sends plain-text messages to one chat.
///
/// Messages are sent inline and awaited, so the caller sees the delivery
/// result. Text is sent without a parse mode; homework names are not escaped.
pub struct TelegramNotifier {
    bot: Bot,
    recipient: Recipient,
}

impl TelegramNotifier {
    /// Create a notifier for a bot token and chat identifier.
    #[must_use]
    pub fn new(bot_token: &str, chat_id: &str) -> Self {
        Self {
            bot: Bot::new(bot_token),
            recipient: parse_recipient(chat_id),
        }
    }

    /// Create a notifier from the loaded credentials.
    #[must_use]
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self::new(credentials.telegram_token(), credentials.telegram_chat_id())
    }

    /// The chat messages are delivered to.
    #[must_use]
    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn name(&self) -> &'static str {
        "telegram"
    }

    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        if text.is_empty() {
            return Err(NotifyError::Rejected("message text is empty".into()));
        }

        self.bot
            .send_message(self.recipient.clone(), text)
            .await?;
        debug!("Telegram message sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::ChatId;

    #[test]
    fn test_from_credentials_uses_chat_id() {
        let credentials = Credentials::from_lookup(|name| match name {
            "TG_CHAT_ID" => Some("-42".into()),
            _ => Some("token".into()),
        })
        .unwrap();

        let notifier = TelegramNotifier::from_credentials(&credentials);
        assert_eq!(notifier.recipient(), &Recipient::Id(ChatId(-42)));
    }

    #[tokio::test]
    async fn test_empty_text_is_rejected_without_request() {
        let notifier = TelegramNotifier::new("token", "1");
        let result = notifier.send("").await;
        assert!(matches!(result, Err(NotifyError::Rejected(_))));
    }
}
