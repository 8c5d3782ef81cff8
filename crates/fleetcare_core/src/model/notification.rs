//! Notification record.
//!
//! Stored and listed, but no core read path interprets it.

use super::{new_entity_id, Record};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    /// Every other field, kept verbatim.
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Notification {
    pub fn new(payload: Map<String, Value>) -> Self {
        Self {
            id: new_entity_id("n"),
            payload,
        }
    }
}

impl Record for Notification {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::Notification;

    #[test]
    fn payload_fields_survive_roundtrip() {
        let raw = r#"{"id":"n1","message":"Job created","read":false}"#;
        let notification: Notification = serde_json::from_str(raw).unwrap();
        assert_eq!(notification.id, "n1");
        assert_eq!(notification.payload["message"], "Job created");

        let json = serde_json::to_value(&notification).unwrap();
        assert_eq!(json["read"], false);
    }
}
