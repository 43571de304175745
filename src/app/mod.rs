//! Application layer - the poll loop and its wiring.

mod poller;
mod state;

pub use poller::{error_message, CycleOutcome, Poller};
pub use state::PollState;

use tracing::info;

use crate::adapter::outbound::notifier::build_notifier;
use crate::adapter::outbound::practicum::PracticumClient;
use crate::config::Config;

/// Runtime switches that come from the command line rather than config.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Log notifications instead of sending them.
    pub dry_run: bool,
    /// Initial watermark. Defaults to the current time.
    pub from_date: Option<i64>,
}

/// Main application entry point.
pub struct App;

impl App {
    /// Build the adapters and run the poll loop. Never returns.
    pub async fn run(config: &Config, options: RunOptions) {
        let client = PracticumClient::from_config(config);
        let notifier = build_notifier(config, options.dry_run);
        let watermark = options
            .from_date
            .unwrap_or_else(|| chrono::Utc::now().timestamp());

        info!(
            endpoint = %client.endpoint(),
            notifier = notifier.name(),
            retry_period_secs = config.api().retry_period_secs,
            watermark,
            "Starting homework status poller"
        );

        let mut poller = Poller::new(
            Box::new(client),
            notifier,
            config.api().retry_period(),
            watermark,
        );
        poller.run().await;
    }
}
