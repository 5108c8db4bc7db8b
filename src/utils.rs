//! Record utilities - construction, validation and conversion helpers.
//!
//! A thin layer over [`BinaryCodec`] and [`TextCodec`]; nothing here
//! duplicates codec logic.
//!
//! # Example
//!
//! ```
//! use msgwire::MsgUtils;
//!
//! let (record, timestamp) = MsgUtils::create(
//!     "Test message",
//!     "sender",
//!     ["recipient1", "recipient2"],
//!     "utility_test",
//! );
//!
//! assert!(MsgUtils::validate(&record));
//! assert!(timestamp > 0);
//! assert!(MsgUtils::serialized_size(Some(&record)) > 0);
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use crate::codec::{BinaryCodec, TextCodec};
use crate::error::Result;
use crate::protocol::Record;

/// Prefix of generated record identifiers.
pub const ID_PREFIX: &str = "msg_";

/// Utility functions for records.
pub struct MsgUtils;

impl MsgUtils {
    /// Create a record with a generated id, stamped with the current time.
    ///
    /// Returns the record and the timestamp used, in whole seconds since the
    /// Unix epoch. The id has the form `msg_{timestamp}_{suffix}`, where the
    /// suffix mixes the sub-second clock with the process id.
    pub fn create<I, S>(
        body: impl Into<String>,
        from_id: impl Into<String>,
        to_ids: I,
        msg_type: impl Into<String>,
    ) -> (Record, i64)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let timestamp = now.as_secs() as i64;
        let id = generate_id(timestamp, now.subsec_nanos());

        let record = Record::new(id, from_id, to_ids, body, msg_type);
        tracing::trace!(id = %record.id, timestamp, "Created record");

        (record, timestamp)
    }

    /// Check that all required fields are present.
    ///
    /// `id`, `from_id` and `type` must be non-empty and there must be at
    /// least one recipient. `body` may be empty.
    #[inline]
    pub fn validate(record: &Record) -> bool {
        !record.id.is_empty()
            && !record.from_id.is_empty()
            && !record.msg_type.is_empty()
            && !record.to_ids.is_empty()
    }

    /// Encoded size of the record, or 0 when there is none.
    #[inline]
    pub fn serialized_size(record: Option<&Record>) -> usize {
        record.map_or(0, BinaryCodec::size_of)
    }

    /// Encode the record into a new buffer.
    #[inline]
    pub fn encode(record: &Record) -> Result<Vec<u8>> {
        BinaryCodec::encode_to_vec(record)
    }

    /// Decode a record with default limits.
    #[inline]
    pub fn decode(bytes: &[u8]) -> Result<Record> {
        BinaryCodec::decode(bytes)
    }

    /// Render the record as JSON text.
    pub fn to_text(record: &Record) -> Result<String> {
        TextCodec::to_text(record).map_err(|e| {
            tracing::debug!("Failed to render record {} as text: {}", record.id, e);
            e
        })
    }

    /// Parse a record from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `TextFormat` on structurally invalid input.
    pub fn from_text(text: &str) -> Result<Record> {
        TextCodec::from_text(text).map_err(|e| {
            tracing::debug!("Failed to parse record text: {}", e);
            e
        })
    }
}

/// Build an id from a whole-second timestamp and the sub-second clock.
fn generate_id(timestamp: i64, subsec_nanos: u32) -> String {
    format!("{}{}_{:016x}", ID_PREFIX, timestamp, id_suffix(subsec_nanos))
}

/// Bit-mixed suffix; distinct for distinct `subsec_nanos` within a process.
fn id_suffix(subsec_nanos: u32) -> u64 {
    let pid = std::process::id() as u64;
    (subsec_nanos as u64).wrapping_mul(0x517cc1b727220a95) ^ pid
}
