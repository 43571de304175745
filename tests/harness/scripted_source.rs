use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use homework_bot::error::PollError;
use homework_bot::port::StatusSource;
use serde_json::{json, Value};

#[derive(Default)]
struct Script {
    responses: VecDeque<Result<Value, PollError>>,
    requests: Vec<i64>,
}

/// Deterministic test double for the status API.
///
/// Returns queued responses in order, then an empty `homeworks` list without
/// `current_date` once the queue runs dry.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    script: Arc<Mutex<Script>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_body(&self, body: Value) {
        self.script
            .lock()
            .expect("lock script")
            .responses
            .push_back(Ok(body));
    }

    pub fn push_error(&self, error: PollError) {
        self.script
            .lock()
            .expect("lock script")
            .responses
            .push_back(Err(error));
    }

    /// Queue a single-submission response.
    pub fn push_status(&self, name: &str, status: &str, current_date: i64) {
        self.push_body(json!({
            "homeworks": [{ "homework_name": name, "status": status }],
            "current_date": current_date,
        }));
    }

    /// Watermarks passed to `fetch`, in call order.
    pub fn requests(&self) -> Vec<i64> {
        self.script.lock().expect("lock script").requests.clone()
    }
}

#[async_trait]
impl StatusSource for ScriptedSource {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError> {
        let mut script = self.script.lock().expect("lock script");
        script.requests.push(from_date);
        script
            .responses
            .pop_front()
            .unwrap_or_else(|| Ok(json!({ "homeworks": [] })))
    }
}
