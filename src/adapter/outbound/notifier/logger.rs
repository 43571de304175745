use async_trait::async_trait;
use tracing::info;

use crate::error::NotifyError;
use crate::port::Notifier;

/// A logging notifier that writes messages via tracing instead of sending them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        info!(text = %text, "Notification");
        Ok(())
    }
}
