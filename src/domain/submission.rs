//! Submission records and the status message derived from them.

use serde_json::Value;

use super::verdict::Verdict;
use crate::error::PollError;

/// A single homework submission as reported by the status API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub verdict: Verdict,
}

impl Submission {
    /// Extract the name and verdict from a raw submission record.
    ///
    /// # Errors
    ///
    /// - [`PollError::WrongType`] if the record is not an object or a field is
    ///   not a string.
    /// - [`PollError::MissingField`] if `homework_name` or `status` is absent.
    /// - [`PollError::UndocumentedStatus`] if `status` is not a known verdict.
    pub fn from_value(record: &Value) -> Result<Self, PollError> {
        let record = record
            .as_object()
            .ok_or(PollError::WrongType { expected: "object" })?;

        let name = string_field(record, "homework_name")?;
        let status = string_field(record, "status")?;

        let verdict = status
            .parse::<Verdict>()
            .map_err(|e| PollError::UndocumentedStatus { status: e.0 })?;

        Ok(Self {
            name: name.to_string(),
            verdict,
        })
    }

    /// Human-readable notification text for this submission.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.name,
            self.verdict.description()
        )
    }
}

fn string_field<'a>(
    record: &'a serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, PollError> {
    match record.get(field) {
        None | Some(Value::Null) => Err(PollError::MissingField { field }),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(PollError::WrongType { expected: "string" }),
    }
}

/// Build the status message for a raw submission record.
///
/// Pure function of its input: the same record always yields the same text.
///
/// # Errors
///
/// See [`Submission::from_value`].
pub fn parse_status(record: &Value) -> Result<String, PollError> {
    Submission::from_value(record).map(|s| s.message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn approved_message_contains_name_and_verdict() {
        let message = parse_status(&json!({
            "homework_name": "proj1",
            "status": "approved",
        }))
        .unwrap();

        assert!(message.contains("\"proj1\""));
        assert_eq!(message.matches(Verdict::Approved.description()).count(), 1);
        assert_eq!(
            message,
            "Изменился статус проверки работы \"proj1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn unknown_status_is_undocumented() {
        let result = parse_status(&json!({
            "homework_name": "proj1",
            "status": "unknown_status",
        }));

        assert!(matches!(
            result,
            Err(PollError::UndocumentedStatus { ref status }) if status == "unknown_status"
        ));
    }

    #[test]
    fn missing_name_is_reported() {
        let result = parse_status(&json!({ "status": "approved" }));
        assert!(matches!(
            result,
            Err(PollError::MissingField { field: "homework_name" })
        ));
    }

    #[test]
    fn missing_status_is_reported() {
        let result = parse_status(&json!({ "homework_name": "proj1" }));
        assert!(matches!(result, Err(PollError::MissingField { field: "status" })));
    }

    #[test]
    fn null_status_counts_as_missing() {
        let result = parse_status(&json!({ "homework_name": "proj1", "status": null }));
        assert!(matches!(result, Err(PollError::MissingField { field: "status" })));
    }

    #[test]
    fn non_object_record_is_wrong_type() {
        let result = parse_status(&json!(["proj1", "approved"]));
        assert!(matches!(result, Err(PollError::WrongType { expected: "object" })));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let record = json!({
            "id": 124,
            "homework_name": "username__hw_python_oop.zip",
            "status": "rejected",
            "reviewer_comment": "Код не по PEP8",
            "lesson_name": "Итоговый проект",
        });
        let submission = Submission::from_value(&record).unwrap();
        assert_eq!(submission.name, "username__hw_python_oop.zip");
        assert_eq!(submission.verdict, Verdict::Rejected);
    }

    #[test]
    fn repeated_parsing_is_stable() {
        let record = json!({ "homework_name": "proj1", "status": "reviewing" });
        let first = parse_status(&record).unwrap();
        let second = parse_status(&record).unwrap();
        assert_eq!(first, second);
    }
}
