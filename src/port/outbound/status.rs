//! Status source port for the homework review API.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::PollError;

/// Source of homework status updates.
///
/// Implementations perform exactly one request per call and return the
/// parsed body untouched; shape validation is the caller's job.
///
/// # Errors
///
/// [`fetch`](Self::fetch) returns [`PollError::Network`] for transport
/// failures, [`PollError::UnexpectedStatus`] for non-success responses and
/// [`PollError::InvalidJson`] when the body cannot be parsed.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch statuses changed since `from_date` (Unix seconds).
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError>;
}
