//! Protocol module - record type and wire format primitives.
//!
//! - Record struct in wire field order
//! - Length/count prefix encoding and decoding
//! - Decode limits for untrusted input

mod record;
pub mod wire_format;

pub use record::Record;
pub use wire_format::{
    fields, DecodeLimits, DEFAULT_MAX_FIELD_LEN, DEFAULT_MAX_RECIPIENTS, FIXED_PREFIX_COUNT,
    MIN_RECORD_SIZE, PREFIX_SIZE,
};
