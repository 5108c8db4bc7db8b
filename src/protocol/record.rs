//! The message record carried by the wire format.
//!
//! # Example
//!
//! ```
//! use msgwire::protocol::Record;
//!
//! let record = Record::new("msg456", "sender123", ["recipient1", "recipient2"], "Hello!", "greeting");
//!
//! assert_eq!(record.from_id, "sender123");
//! assert_eq!(record.to_ids, vec!["recipient1", "recipient2"]);
//! assert_eq!(record.msg_type, "greeting");
//! ```

use serde::{Deserialize, Serialize};

/// A message record.
///
/// Fields are declared in wire order. All storage is owned, so a decoded
/// record never borrows from the bytes it was decoded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    /// Opaque identifier, unique per logical message.
    pub id: String,
    /// Sender identifier.
    pub from_id: String,
    /// Recipient identifiers, order preserved.
    #[serde(default)]
    pub to_ids: Vec<String>,
    /// Message body (may be empty).
    #[serde(default)]
    pub body: String,
    /// Type tag classifying the message.
    #[serde(rename = "type")]
    pub msg_type: String,
}

impl Record {
    /// Create a new record.
    pub fn new<I, S>(
        id: impl Into<String>,
        from_id: impl Into<String>,
        to_ids: I,
        body: impl Into<String>,
        msg_type: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            from_id: from_id.into(),
            to_ids: to_ids.into_iter().map(Into::into).collect(),
            body: body.into(),
            msg_type: msg_type.into(),
        }
    }

    /// Append a recipient to the end of `to_ids`.
    #[inline]
    pub fn add_recipient(&mut self, recipient: impl Into<String>) {
        self.to_ids.push(recipient.into());
    }

    /// Number of recipients.
    #[inline]
    pub fn recipient_count(&self) -> usize {
        self.to_ids.len()
    }

    /// Check if the record has no recipients.
    #[inline]
    pub fn has_no_recipients(&self) -> bool {
        self.to_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new_preserves_order() {
        let record = Record::new("id1", "from", ["c", "a", "b"], "body", "kind");
        assert_eq!(record.to_ids, vec!["c", "a", "b"]);
        assert_eq!(record.recipient_count(), 3);
        assert!(!record.has_no_recipients());
    }

    #[test]
    fn test_record_new_accepts_owned_strings() {
        let recipients = vec!["u1".to_string(), "u2".to_string()];
        let record = Record::new(String::from("id"), "from", recipients, String::new(), "t");
        assert_eq!(record.to_ids.len(), 2);
        assert!(record.body.is_empty());
    }

    #[test]
    fn test_add_recipient_appends() {
        let mut record = Record::new("id", "from", Vec::<String>::new(), "", "t");
        assert!(record.has_no_recipients());

        record.add_recipient("first");
        record.add_recipient(String::from("second"));
        assert_eq!(record.to_ids, vec!["first", "second"]);
    }

    #[test]
    fn test_default_is_empty() {
        let record = Record::default();
        assert!(record.id.is_empty());
        assert!(record.to_ids.is_empty());
        assert!(record.msg_type.is_empty());
    }
}
