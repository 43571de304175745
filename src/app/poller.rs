//! The homework status poll loop.
//!
//! Each iteration runs one cycle and then sleeps exactly once:
//!
//! ```text
//! FETCHING → VALIDATING → EXTRACTING → NOTIFYING → ADVANCING → SLEEPING
//!     │           │            │
//!     └───────────┴────────────┴──→ error-notify ─────────────→ SLEEPING
//! ```
//!
//! A failed cycle never advances the watermark. A failed delivery is logged
//! and leaves `last_message` untouched, so an unchanged status is offered
//! again on the next cycle that returns it.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, error, info};

use super::state::PollState;
use crate::domain::{check_response, parse_status};
use crate::error::PollError;
use crate::port::{Notifier, StatusSource};

/// Result of a single poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A new status message was delivered.
    Notified,
    /// The status message equals the last delivered one.
    Unchanged,
    /// The status message changed but could not be delivered.
    DeliveryFailed,
    /// The API reported no submissions in the window.
    NoUpdates,
    /// Fetching, validation or extraction failed.
    Failed,
}

/// Text sent to the operator when a cycle fails.
#[must_use]
pub fn error_message(err: &PollError) -> String {
    format!("Сбой в работе программы: {err}")
}

/// Polls a [`StatusSource`] and forwards status changes to a [`Notifier`].
pub struct Poller {
    source: Box<dyn StatusSource>,
    notifier: Box<dyn Notifier>,
    retry_period: Duration,
    state: PollState,
}

impl Poller {
    #[must_use]
    pub fn new(
        source: Box<dyn StatusSource>,
        notifier: Box<dyn Notifier>,
        retry_period: Duration,
        watermark: i64,
    ) -> Self {
        Self {
            source,
            notifier,
            retry_period,
            state: PollState::new(watermark),
        }
    }

    #[must_use]
    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Run cycles forever, sleeping `retry_period` after each one.
    pub async fn run(&mut self) {
        loop {
            let outcome = self.run_cycle().await;
            debug!(
                ?outcome,
                watermark = self.state.watermark(),
                sleep_secs = self.retry_period.as_secs(),
                "Poll cycle finished"
            );
            sleep(self.retry_period).await;
        }
    }

    /// Run a single fetch/validate/notify cycle without sleeping.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll().await {
            Ok(outcome) => outcome,
            Err(err) => {
                self.report_failure(&err).await;
                CycleOutcome::Failed
            }
        }
    }

    async fn poll(&mut self) -> Result<CycleOutcome, PollError> {
        let body = self.source.fetch(self.state.watermark()).await?;
        let response = check_response(&body)?;

        let outcome = match response.latest() {
            None => {
                debug!("No new homework statuses");
                CycleOutcome::NoUpdates
            }
            Some(record) => {
                let message = parse_status(record)?;
                if self.state.is_duplicate(&message) {
                    debug!("Homework status unchanged, skipping notification");
                    CycleOutcome::Unchanged
                } else if self.dispatch(&message).await {
                    self.state.record_sent(message);
                    CycleOutcome::Notified
                } else {
                    CycleOutcome::DeliveryFailed
                }
            }
        };

        self.state.advance(response.current_date);
        Ok(outcome)
    }

    async fn report_failure(&self, err: &PollError) {
        if err.is_transport() {
            error!(error = %err, "Failed to fetch homework statuses");
        } else {
            error!(error = %err, "Invalid status API response");
        }
        self.dispatch(&error_message(err)).await;
    }

    /// Deliver a message, logging instead of propagating failures.
    async fn dispatch(&self, text: &str) -> bool {
        match self.notifier.send(text).await {
            Ok(()) => {
                info!(notifier = self.notifier.name(), "Message sent");
                true
            }
            Err(e) => {
                error!(notifier = self.notifier.name(), error = %e, "Failed to send message");
                false
            }
        }
    }
}
