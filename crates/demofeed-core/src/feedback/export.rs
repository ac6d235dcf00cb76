//! Export document for the closed-session history.
//!
//! # Format
//!
//! ```text
//! {
//!   "schemaVersion": "1.0.0",
//!   "exportedAt": "2026-03-02T15:04:05Z",
//!   "sessions": [ { "id": ..., "customer": ..., "feedbackItems": [...] } ]
//! }
//! ```
//!
//! Archives written before the envelope existed are a bare JSON array of
//! sessions; those still import.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::model::FeedbackSession;
use crate::error::{FeedbackError, Result};

/// Schema version written by [`encode`].
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportEnvelopeRef<'a> {
    schema_version: &'a str,
    exported_at: DateTime<Utc>,
    sessions: &'a [FeedbackSession],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportEnvelopeV1 {
    #[allow(dead_code)]
    schema_version: String,
    #[allow(dead_code)]
    exported_at: Option<DateTime<Utc>>,
    sessions: Vec<FeedbackSession>,
}

/// Serializes closed sessions as pretty-printed JSON.
pub fn encode(sessions: &[FeedbackSession], exported_at: DateTime<Utc>) -> Result<String> {
    let envelope = ExportEnvelopeRef {
        schema_version: EXPORT_SCHEMA_VERSION,
        exported_at,
        sessions,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Parses an export document into closed sessions.
///
/// The whole document is parsed and checked before anything is returned,
/// so callers can swap their history in one step.
pub fn decode(text: &str) -> Result<Vec<FeedbackSession>> {
    let value: Value = serde_json::from_str(text)?;

    let sessions = if value.is_array() {
        serde_json::from_value::<Vec<FeedbackSession>>(value)?
    } else if value.is_object() {
        let version = value
            .get("schemaVersion")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| FeedbackError::Serialization {
                format: "JSON".to_string(),
                message: "missing schemaVersion".to_string(),
            })?;
        if !is_supported_version(&version) {
            return Err(FeedbackError::UnsupportedSchemaVersion(version));
        }
        serde_json::from_value::<ExportEnvelopeV1>(value)?.sessions
    } else {
        return Err(FeedbackError::Serialization {
            format: "JSON".to_string(),
            message: "expected an export object or a session array".to_string(),
        });
    };

    for session in &sessions {
        if !session.outcome.is_terminal() {
            return Err(FeedbackError::validation(format!(
                "session '{}' is still {}; only ended sessions can be imported",
                session.id, session.outcome
            )));
        }
    }

    Ok(sessions)
}

fn is_supported_version(version: &str) -> bool {
    version.split('.').next() == Some("1")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGACY_ARRAY: &str = r#"[
  {
    "id": "feedback-session-1",
    "date": "2025-01-14T16:00:00.000Z",
    "customer": "Mercy Regional",
    "attendees": [{ "name": "Sam", "role": "COO", "persona": "executive" }],
    "duration": 45,
    "feedbackItems": [
      {
        "id": "feedback-1",
        "timestamp": "2025-01-14T16:10:00.000Z",
        "type": "objection",
        "sentiment": "negative",
        "priority": "medium",
        "content": "Pricing is above our budget",
        "context": { "persona": "executive" },
        "tags": ["pricing"],
        "actionable": false,
        "createdBy": "SE2"
      }
    ],
    "outcome": "lost",
    "notes": ""
  }
]"#;

    #[test]
    fn test_decode_legacy_array() {
        let sessions = decode(LEGACY_ARRAY).unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].customer, "Mercy Regional");
        assert_eq!(sessions[0].deal_value, None);
        let item = &sessions[0].feedback_items[0];
        assert_eq!(item.content, "Pricing is above our budget");
        assert_eq!(item.context.persona.as_deref(), Some("executive"));
        assert_eq!(item.follow_up, None);
    }

    #[test]
    fn test_encode_writes_envelope() {
        let sessions = decode(LEGACY_ARRAY).unwrap();
        let text = encode(&sessions, Utc::now()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["schemaVersion"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["sessions"][0]["feedbackItems"][0]["type"], "objection");
        assert_eq!(decode(&text).unwrap(), sessions);
    }

    #[test]
    fn test_decode_rejects_future_version() {
        let err = decode(r#"{"schemaVersion": "2.0.0", "sessions": []}"#).unwrap_err();
        assert_eq!(err, FeedbackError::UnsupportedSchemaVersion("2.0.0".to_string()));
    }

    #[test]
    fn test_decode_rejects_missing_version() {
        let err = decode(r#"{"sessions": []}"#).unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_decode_rejects_scalar_and_truncated() {
        assert!(decode("42").unwrap_err().is_serialization());
        let truncated = &LEGACY_ARRAY[..LEGACY_ARRAY.len() / 2];
        assert!(decode(truncated).unwrap_err().is_serialization());
    }

    #[test]
    fn test_decode_rejects_open_session() {
        let open = LEGACY_ARRAY.replace("\"lost\"", "\"in-progress\"");
        assert!(decode(&open).unwrap_err().is_validation());
    }

    #[test]
    fn test_decode_rejects_unknown_enum_value() {
        let bad = LEGACY_ARRAY.replace("\"objection\"", "\"complaint\"");
        assert!(decode(&bad).unwrap_err().is_serialization());
    }
}
