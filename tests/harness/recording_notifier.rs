use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use homework_bot::error::NotifyError;
use homework_bot::port::Notifier;

/// Thread-safe message collector for notification assertions in tests.
///
/// Every call is recorded as an attempt; only successful calls are recorded
/// as delivered. `set_failing(true)` makes every send fail.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    attempts: Arc<Mutex<Vec<String>>>,
    delivered: Arc<Mutex<Vec<String>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().expect("lock notifier attempts").clone()
    }

    pub fn delivered(&self) -> Vec<String> {
        self.delivered.lock().expect("lock notifier messages").clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        self.attempts
            .lock()
            .expect("lock notifier attempts")
            .push(text.to_string());

        if self.failing.load(Ordering::SeqCst) {
            return Err(NotifyError::Rejected("scripted failure".into()));
        }

        self.delivered
            .lock()
            .expect("lock notifier messages")
            .push(text.to_string());
        Ok(())
    }
}
