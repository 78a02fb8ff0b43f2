//! Event payloads for the HEC API
//!
//! Converts the host's [`AnalyticsRecord`] into the flat event object
//! Splunk ingests. Only four fields are forwarded; everything else on
//! the record stays behind.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::analytics::AnalyticsRecord;

/// A single outbound event: field name to JSON value
pub type Event = Map<String, Value>;

/// Wire envelope expected by the HEC event endpoint
#[derive(Serialize)]
pub(crate) struct EventEnvelope<'a> {
    pub event: &'a Event,
}

/// Project an analytics record onto the event fields Splunk receives
pub fn project_record(record: &AnalyticsRecord) -> Event {
    let mut event = Event::new();
    event.insert("api_id".to_string(), Value::from(record.api_id.as_str()));
    event.insert("path".to_string(), Value::from(record.path.as_str()));
    event.insert("method".to_string(), Value::from(record.method.as_str()));
    event.insert(
        "response_code".to_string(),
        Value::from(record.response_code),
    );
    event
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_record() -> AnalyticsRecord {
        AnalyticsRecord::from_value(&json!({
            "api_id": "api-1",
            "path": "/widgets",
            "method": "GET",
            "response_code": 200,
            "org_id": "org-9",
            "ip_address": "10.0.0.1",
        }))
        .unwrap()
    }

    #[test]
    fn test_projection_has_exactly_four_fields() {
        let event = project_record(&make_record());
        assert_eq!(event.len(), 4);
        assert_eq!(event["api_id"], "api-1");
        assert_eq!(event["path"], "/widgets");
        assert_eq!(event["method"], "GET");
        assert_eq!(event["response_code"], 200);
    }

    #[test]
    fn test_envelope_serialization() {
        let event = project_record(&make_record());
        let envelope = EventEnvelope { event: &event };
        let body: Value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            body,
            json!({
                "event": {
                    "api_id": "api-1",
                    "path": "/widgets",
                    "method": "GET",
                    "response_code": 200,
                }
            })
        );
    }
}
