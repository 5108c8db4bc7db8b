//! Wire format primitives.
//!
//! Every variable-length field is a length prefix followed by raw bytes:
//! ```text
//! ┌──────────┬──────────────────┐
//! │ Length   │ Content          │
//! │ 4 bytes  │ `Length` bytes   │
//! │ uint32 LE│ raw, no escaping │
//! └──────────┴──────────────────┘
//! ```
//!
//! The recipient list is a count prefix (same width) followed by that many
//! length-prefixed strings. Record layout, in order:
//! `id`, `from_id`, `to_ids`, `body`, `type`.
//!
//! All prefixes are Little Endian.

use bytes::{Buf, BufMut};

use crate::error::{MsgError, Result};

/// Width of every length and count prefix, in bytes.
pub const PREFIX_SIZE: usize = 4;

/// Number of prefixes a record always carries (four strings plus the count).
pub const FIXED_PREFIX_COUNT: usize = 5;

/// Smallest possible encoding: all strings empty, no recipients.
pub const MIN_RECORD_SIZE: usize = FIXED_PREFIX_COUNT * PREFIX_SIZE;

/// Default maximum declared string length accepted by decode.
///
/// Equal to the largest length a prefix can carry, so anything the encoder
/// writes decodes with default limits.
pub const DEFAULT_MAX_FIELD_LEN: u32 = u32::MAX;

/// Default maximum declared recipient count accepted by decode.
pub const DEFAULT_MAX_RECIPIENTS: u32 = u32::MAX;

/// Wire field names, as reported in errors.
pub mod fields {
    pub const ID: &str = "id";
    pub const FROM_ID: &str = "from_id";
    /// The recipient count prefix.
    pub const TO_IDS: &str = "to_ids";
    /// A single recipient string.
    pub const TO_IDS_ITEM: &str = "to_ids[]";
    pub const BODY: &str = "body";
    pub const TYPE: &str = "type";
}

/// Limits applied while decoding untrusted input.
///
/// A declared length or count above these limits is rejected as malformed
/// before any allocation happens. The defaults accept every record the
/// encoder can produce; tighter limits are opt-in.
///
/// # Example
///
/// ```
/// use msgwire::protocol::DecodeLimits;
///
/// let limits = DecodeLimits::new()
///     .with_max_field_len(64 * 1024)
///     .with_max_recipients(100);
/// assert_eq!(limits.max_field_len, 64 * 1024);
/// assert_eq!(limits.max_recipients, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Maximum declared byte length of any single string field.
    pub max_field_len: u32,
    /// Maximum declared number of recipients.
    pub max_recipients: u32,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_field_len: DEFAULT_MAX_FIELD_LEN,
            max_recipients: DEFAULT_MAX_RECIPIENTS,
        }
    }
}

impl DecodeLimits {
    /// Create limits with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum declared string length.
    pub fn with_max_field_len(mut self, max_field_len: u32) -> Self {
        self.max_field_len = max_field_len;
        self
    }

    /// Set the maximum declared recipient count.
    pub fn with_max_recipients(mut self, max_recipients: u32) -> Self {
        self.max_recipients = max_recipients;
        self
    }
}

/// Encoded size of a length-prefixed string with `len` content bytes.
#[inline]
pub fn prefixed_len(len: usize) -> usize {
    PREFIX_SIZE + len
}

/// Convert a length or count to its prefix value.
///
/// Fails with `Malformed` if it does not fit the prefix width.
#[inline]
pub fn to_prefix(field: &'static str, len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| {
        MsgError::Malformed(format!(
            "{} length {} exceeds prefix range {}",
            field,
            len,
            u32::MAX
        ))
    })
}

/// Write a prefix value.
#[inline]
pub fn put_prefix<B: BufMut>(dst: &mut B, value: u32) {
    dst.put_u32_le(value);
}

/// Write a length-prefixed string.
///
/// The caller must have checked the length with [`to_prefix`] and sized
/// `dst` for [`prefixed_len`] bytes.
#[inline]
pub fn put_string<B: BufMut>(dst: &mut B, value: &str) {
    debug_assert!(value.len() <= u32::MAX as usize);
    dst.put_u32_le(value.len() as u32);
    dst.put_slice(value.as_bytes());
}

/// Read a prefix value.
#[inline]
pub fn get_prefix<B: Buf>(src: &mut B, field: &'static str) -> Result<u32> {
    if src.remaining() < PREFIX_SIZE {
        return Err(MsgError::Truncated {
            field,
            needed: PREFIX_SIZE,
            remaining: src.remaining(),
        });
    }
    Ok(src.get_u32_le())
}

/// Read a length-prefixed string into fresh owned storage.
///
/// Checks, in order: prefix present, declared length within `max_field_len`,
/// content present, content is UTF-8.
pub fn get_string<'a>(
    src: &mut &'a [u8],
    field: &'static str,
    max_field_len: u32,
) -> Result<String> {
    let declared = get_prefix(src, field)?;
    if declared > max_field_len {
        return Err(MsgError::Malformed(format!(
            "{} length {} exceeds maximum {}",
            field, declared, max_field_len
        )));
    }

    let len = declared as usize;
    if src.len() < len {
        return Err(MsgError::Truncated {
            field,
            needed: len,
            remaining: src.len(),
        });
    }

    let buf: &'a [u8] = *src;
    let (raw, rest) = buf.split_at(len);
    *src = rest;

    std::str::from_utf8(raw)
        .map(str::to_owned)
        .map_err(|e| MsgError::Malformed(format!("{} is not valid UTF-8: {}", field, e)))
}
