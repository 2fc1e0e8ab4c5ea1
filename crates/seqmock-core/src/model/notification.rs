use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-supplied anchoring payload, never interpreted by the mock
pub type NotificationPayload = Map<String, Value>;

/// Record that a batch was reported as anchored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Batch id taken from the request path
    pub batch_id: String,

    /// Request body as a JSON object, `{}` when absent or malformed
    pub notification: NotificationPayload,
}

impl Notification {
    pub fn new(batch_id: impl Into<String>, notification: NotificationPayload) -> Self {
        Self {
            batch_id: batch_id.into(),
            notification,
        }
    }

    /// Decode a request body leniently
    ///
    /// An empty body, bytes that are not valid JSON, and JSON values that are
    /// not objects all yield an empty payload.
    pub fn payload_from_body(body: &[u8]) -> NotificationPayload {
        if body.is_empty() {
            return NotificationPayload::new();
        }
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => map,
            _ => NotificationPayload::new(),
        }
    }
}
