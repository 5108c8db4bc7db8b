//! JSON text codec using `serde_json`.
//!
//! Human-readable form of a [`Record`] for logging and cross-system
//! exchange. Not wire compatible with [`BinaryCodec`](super::BinaryCodec).
//!
//! Keys are `id`, `from_id`, `to_ids`, `body` and `type`. On input, `id`,
//! `from_id` and `type` are required, `to_ids` and `body` default to empty,
//! and unknown keys are rejected.
//!
//! # Example
//!
//! ```
//! use msgwire::codec::TextCodec;
//! use msgwire::protocol::Record;
//!
//! let record = Record::new("msg456", "sender123", ["r1", "r2"], "Hello!", "greeting");
//!
//! let text = TextCodec::to_text(&record).unwrap();
//! assert!(text.contains("\"type\":\"greeting\""));
//!
//! let parsed = TextCodec::from_text(&text).unwrap();
//! assert_eq!(parsed, record);
//! ```

use serde_json::Value;

use crate::error::Result;
use crate::protocol::Record;

/// JSON codec for records.
pub struct TextCodec;

impl TextCodec {
    /// Render a record as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns `TextFormat` if serialization fails.
    #[inline]
    pub fn to_text(record: &Record) -> Result<String> {
        Ok(serde_json::to_string(record)?)
    }

    /// Render a record as indented JSON.
    #[inline]
    pub fn to_text_pretty(record: &Record) -> Result<String> {
        Ok(serde_json::to_string_pretty(record)?)
    }

    /// Parse a record from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `TextFormat` if the text is not a JSON object with the
    /// record's keys.
    #[inline]
    pub fn from_text(text: &str) -> Result<Record> {
        Ok(serde_json::from_str(text)?)
    }

    /// Convert a record to a JSON value (a field-name to value map).
    #[inline]
    pub fn to_value(record: &Record) -> Result<Value> {
        Ok(serde_json::to_value(record)?)
    }

    /// Build a record from a JSON value.
    #[inline]
    pub fn from_value(value: Value) -> Result<Record> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MsgError;
    use serde_json::json;

    fn sample() -> Record {
        Record::new(
            "test_001",
            "go_test",
            ["user1", "user2"],
            "Hello from Go!",
            "test",
        )
    }

    #[test]
    fn test_to_text_field_names() {
        let text = TextCodec::to_text(&sample()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["id"], "test_001");
        assert_eq!(value["from_id"], "go_test");
        assert_eq!(value["to_ids"], json!(["user1", "user2"]));
        assert_eq!(value["body"], "Hello from Go!");
        assert_eq!(value["type"], "test");
        assert!(value.get("msg_type").is_none());
    }

    #[test]
    fn test_text_roundtrip_keeps_recipient_order() {
        let record = Record::new("i", "f", ["z", "a", "m"], "", "t");
        let parsed = TextCodec::from_text(&TextCodec::to_text(&record).unwrap()).unwrap();
        assert_eq!(parsed.to_ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_pretty_text_parses_back() {
        let pretty = TextCodec::to_text_pretty(&sample()).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(TextCodec::from_text(&pretty).unwrap(), sample());
    }

    #[test]
    fn test_from_text_defaults_optional_fields() {
        let parsed = TextCodec::from_text(r#"{"id":"1","from_id":"a","type":"ping"}"#).unwrap();
        assert!(parsed.to_ids.is_empty());
        assert!(parsed.body.is_empty());
        assert_eq!(parsed.msg_type, "ping");
    }

    #[test]
    fn test_from_text_missing_required_field() {
        let err = TextCodec::from_text(r#"{"id":"1","from_id":"a"}"#).unwrap_err();
        assert!(matches!(err, MsgError::TextFormat(_)));
        assert!(err.to_string().contains("type"));
    }

    #[test]
    fn test_from_text_rejects_unknown_field() {
        let err =
            TextCodec::from_text(r#"{"id":"1","from_id":"a","type":"t","extra":1}"#).unwrap_err();
        assert!(matches!(err, MsgError::TextFormat(_)));
    }

    #[test]
    fn test_from_text_invalid_inputs() {
        for input in ["", "not json", "[1,2,3]", "{\"id\": 5}", "{\"id\":\"x\""] {
            let result = TextCodec::from_text(input);
            assert!(
                matches!(result, Err(MsgError::TextFormat(_))),
                "input {:?} should fail",
                input
            );
        }
    }

    #[test]
    fn test_value_roundtrip() {
        let value = TextCodec::to_value(&sample()).unwrap();
        assert!(value.is_object());
        assert_eq!(value.as_object().unwrap().len(), 5);

        let record = TextCodec::from_value(value).unwrap();
        assert_eq!(record, sample());
    }

    #[test]
    fn test_from_value_wrong_type() {
        let err = TextCodec::from_value(json!({"id": "1", "from_id": "a", "type": "t", "to_ids": "x"}))
            .unwrap_err();
        assert!(matches!(err, MsgError::TextFormat(_)));
    }
}
