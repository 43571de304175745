//! Shape validation for status API responses.

use serde_json::Value;

use crate::error::PollError;

/// A status API response that passed shape validation.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusResponse {
    /// Submission records, newest first. Contents are not validated here.
    pub homeworks: Vec<Value>,
    /// Server time to use as the next watermark, if reported.
    pub current_date: Option<i64>,
}

impl StatusResponse {
    /// The most recent submission, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&Value> {
        self.homeworks.first()
    }
}

/// Check that a parsed body has the documented shape.
///
/// # Errors
///
/// Returns [`PollError::WrongType`] naming `object` when the body is not a
/// JSON object, or `array` when `homeworks` is missing or not a list.
pub fn check_response(body: &Value) -> Result<StatusResponse, PollError> {
    let object = body
        .as_object()
        .ok_or(PollError::WrongType { expected: "object" })?;

    let homeworks = object
        .get("homeworks")
        .and_then(Value::as_array)
        .ok_or(PollError::WrongType { expected: "array" })?;

    Ok(StatusResponse {
        homeworks: homeworks.clone(),
        current_date: object.get("current_date").and_then(Value::as_i64),
    })
}
