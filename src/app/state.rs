//! In-memory poll state.

/// Mutable state carried between poll cycles.
///
/// Lives for the process lifetime only; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    /// Lower bound (Unix seconds) for the next fetch window.
    watermark: i64,
    /// Last status message that was delivered.
    last_message: Option<String>,
}

impl PollState {
    #[must_use]
    pub fn new(watermark: i64) -> Self {
        Self {
            watermark,
            last_message: None,
        }
    }

    #[must_use]
    pub fn watermark(&self) -> i64 {
        self.watermark
    }

    #[must_use]
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// Whether `message` equals the last delivered one.
    #[must_use]
    pub fn is_duplicate(&self, message: &str) -> bool {
        self.last_message.as_deref() == Some(message)
    }

    /// Remember a delivered message for de-duplication.
    pub fn record_sent(&mut self, message: String) {
        self.last_message = Some(message);
    }

    /// Move the watermark to the server-reported date, if any.
    pub fn advance(&mut self, current_date: Option<i64>) {
        if let Some(date) = current_date {
            self.watermark = date;
        }
    }
}
