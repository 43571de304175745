//! Notifier port for operator-facing messages.

use async_trait::async_trait;

use crate::error::NotifyError;

/// Delivers plain text messages to a fixed destination.
///
/// Unlike a fire-and-forget event sink, `send` reports the delivery outcome
/// so the poller knows whether a status message actually went out. Callers
/// are expected to log failures and carry on.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Short backend name for log fields.
    fn name(&self) -> &'static str;

    /// Send `text` to the configured destination.
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}
