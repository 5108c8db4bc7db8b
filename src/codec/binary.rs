//! Binary codec for [`Record`].
//!
//! Size, encode and decode all walk the fields in wire order
//! (`id`, `from_id`, `to_ids`, `body`, `type`), so the computed size always
//! equals the bytes written.
//!
//! # Example
//!
//! ```
//! use msgwire::codec::BinaryCodec;
//! use msgwire::protocol::Record;
//!
//! let record = Record::new("test_001", "go_test", ["user1", "user2"], "Hello from Go!", "test");
//!
//! let mut buf = vec![0u8; BinaryCodec::size_of(&record)];
//! let written = BinaryCodec::encode(&record, &mut buf).unwrap();
//! assert_eq!(written, buf.len());
//!
//! let decoded = BinaryCodec::decode(&buf).unwrap();
//! assert_eq!(decoded, record);
//! ```

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{MsgError, Result};
use crate::protocol::wire_format::{
    fields, get_prefix, get_string, prefixed_len, put_prefix, put_string, to_prefix,
    DecodeLimits, MIN_RECORD_SIZE, PREFIX_SIZE,
};
use crate::protocol::Record;

/// Length-prefixed binary codec.
///
/// Encoding never allocates unless asked to (`encode_to_vec`,
/// `encode_to_bytes`, `encode_append`). Decoding copies every field into
/// fresh owned storage.
pub struct BinaryCodec;

impl BinaryCodec {
    /// Exact number of bytes `encode` will write for `record`.
    #[inline]
    pub fn size_of(record: &Record) -> usize {
        let recipients: usize = record
            .to_ids
            .iter()
            .map(|to_id| prefixed_len(to_id.len()))
            .sum();

        MIN_RECORD_SIZE
            + record.id.len()
            + record.from_id.len()
            + recipients
            + record.body.len()
            + record.msg_type.len()
    }

    /// Encode `record` into the start of `buf`.
    ///
    /// Returns the number of bytes written, always `size_of(record)`.
    /// Bytes of `buf` past that count are left untouched.
    ///
    /// # Errors
    ///
    /// - `OutOfSpace` if `buf` is shorter than `size_of(record)`.
    /// - `Malformed` if a field or the recipient count does not fit a prefix.
    ///
    /// Both are detected before anything is written.
    pub fn encode(record: &Record, buf: &mut [u8]) -> Result<usize> {
        let needed = Self::size_of(record);
        if buf.len() < needed {
            return Err(MsgError::OutOfSpace {
                needed,
                available: buf.len(),
            });
        }
        Self::check_prefixes(record, needed)?;

        let mut dst: &mut [u8] = &mut buf[..needed];
        Self::write_fields(record, &mut dst);
        debug_assert!(dst.is_empty());

        Ok(needed)
    }

    /// Encode `record` into a new vector of exactly `size_of(record)` bytes.
    ///
    /// # Errors
    ///
    /// Returns `Malformed` if a field does not fit a prefix.
    pub fn encode_to_vec(record: &Record) -> Result<Vec<u8>> {
        let needed = Self::size_of(record);
        Self::check_prefixes(record, needed)?;

        let mut buf = Vec::with_capacity(needed);
        Self::write_fields(record, &mut buf);
        debug_assert_eq!(buf.len(), needed);

        Ok(buf)
    }

    /// Encode `record` into an immutable `Bytes` buffer.
    ///
    /// # Errors
    ///
    /// Returns `Malformed` if a field does not fit a prefix.
    #[inline]
    pub fn encode_to_bytes(record: &Record) -> Result<Bytes> {
        Self::encode_to_vec(record).map(Bytes::from)
    }

    /// Append the encoding of `record` to `dst`, growing it as needed.
    ///
    /// Returns the number of bytes appended.
    ///
    /// # Errors
    ///
    /// Returns `Malformed` if a field does not fit a prefix; `dst` is
    /// unchanged in that case.
    pub fn encode_append(record: &Record, dst: &mut BytesMut) -> Result<usize> {
        let needed = Self::size_of(record);
        Self::check_prefixes(record, needed)?;

        dst.reserve(needed);
        Self::write_fields(record, dst);

        Ok(needed)
    }

    /// Decode a record with default [`DecodeLimits`].
    ///
    /// Trailing bytes after the last field are ignored. Strings that are
    /// valid UTF-8, NUL bytes included, round-trip exactly; any other string
    /// bytes are rejected.
    ///
    /// # Errors
    ///
    /// - `Truncated` if input ends before a prefix or field is complete.
    /// - `Malformed` if a declared length or count exceeds the limits, or a
    ///   string is not UTF-8.
    #[inline]
    pub fn decode(bytes: &[u8]) -> Result<Record> {
        Self::decode_with_limits(bytes, &DecodeLimits::default())
    }

    /// Decode a record with custom limits.
    #[inline]
    pub fn decode_with_limits(bytes: &[u8], limits: &DecodeLimits) -> Result<Record> {
        Self::decode_prefix(bytes, limits).map(|(record, _)| record)
    }

    /// Decode a record from the front of `bytes`.
    ///
    /// Returns the record and the number of bytes it occupied, so records
    /// written back to back can be read one after another.
    ///
    /// # Example
    ///
    /// ```
    /// use bytes::BytesMut;
    /// use msgwire::codec::BinaryCodec;
    /// use msgwire::protocol::{DecodeLimits, Record};
    ///
    /// let first = Record::new("1", "a", ["b"], "one", "t");
    /// let second = Record::new("2", "b", ["a"], "two", "t");
    ///
    /// let mut buf = BytesMut::new();
    /// BinaryCodec::encode_append(&first, &mut buf).unwrap();
    /// BinaryCodec::encode_append(&second, &mut buf).unwrap();
    ///
    /// let limits = DecodeLimits::default();
    /// let (decoded, used) = BinaryCodec::decode_prefix(&buf, &limits).unwrap();
    /// assert_eq!(decoded, first);
    /// let (decoded, _) = BinaryCodec::decode_prefix(&buf[used..], &limits).unwrap();
    /// assert_eq!(decoded, second);
    /// ```
    pub fn decode_prefix(bytes: &[u8], limits: &DecodeLimits) -> Result<(Record, usize)> {
        let mut src = bytes;

        let id = get_string(&mut src, fields::ID, limits.max_field_len)?;
        let from_id = get_string(&mut src, fields::FROM_ID, limits.max_field_len)?;

        let count = get_prefix(&mut src, fields::TO_IDS)?;
        if count > limits.max_recipients {
            return Err(MsgError::Malformed(format!(
                "Recipient count {} exceeds maximum {}",
                count, limits.max_recipients
            )));
        }

        // Each recipient needs at least a prefix, so never reserve past what
        // the input could hold.
        let capacity = (count as usize).min(src.len() / PREFIX_SIZE);
        let mut to_ids = Vec::with_capacity(capacity);
        for _ in 0..count {
            to_ids.push(get_string(
                &mut src,
                fields::TO_IDS_ITEM,
                limits.max_field_len,
            )?);
        }

        let body = get_string(&mut src, fields::BODY, limits.max_field_len)?;
        let msg_type = get_string(&mut src, fields::TYPE, limits.max_field_len)?;

        let consumed = bytes.len() - src.len();
        Ok((
            Record {
                id,
                from_id,
                to_ids,
                body,
                msg_type,
            },
            consumed,
        ))
    }

    /// Every prefix fits a u32 whenever the whole record does.
    fn check_prefixes(record: &Record, needed: usize) -> Result<()> {
        if needed <= u32::MAX as usize {
            return Ok(());
        }

        to_prefix(fields::ID, record.id.len())?;
        to_prefix(fields::FROM_ID, record.from_id.len())?;
        to_prefix(fields::TO_IDS, record.to_ids.len())?;
        for to_id in &record.to_ids {
            to_prefix(fields::TO_IDS_ITEM, to_id.len())?;
        }
        to_prefix(fields::BODY, record.body.len())?;
        to_prefix(fields::TYPE, record.msg_type.len())?;
        Ok(())
    }

    fn write_fields<B: BufMut>(record: &Record, dst: &mut B) {
        put_string(dst, &record.id);
        put_string(dst, &record.from_id);

        put_prefix(dst, record.to_ids.len() as u32);
        for to_id in &record.to_ids {
            put_string(dst, to_id);
        }

        put_string(dst, &record.body);
        put_string(dst, &record.msg_type);
    }
}
