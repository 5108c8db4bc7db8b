//! Codec module - serialization/deserialization for records.
//!
//! - [`BinaryCodec`] - length-prefixed binary wire format (hot path)
//! - [`TextCodec`] - JSON using `serde_json`, for debugging and interop
//!
//! # Design
//!
//! Codecs are implemented as marker structs with static methods rather than trait objects.
//! There is exactly one record shape, so there is nothing to dispatch on.
//!
//! # Example
//!
//! ```
//! use msgwire::codec::{BinaryCodec, TextCodec};
//! use msgwire::protocol::Record;
//!
//! let record = Record::new("id1", "alice", ["bob"], "hi", "chat");
//!
//! let wire = BinaryCodec::encode_to_vec(&record).unwrap();
//! assert_eq!(BinaryCodec::decode(&wire).unwrap(), record);
//!
//! let text = TextCodec::to_text(&record).unwrap();
//! assert_eq!(TextCodec::from_text(&text).unwrap(), record);
//! ```

mod binary;
mod text;

pub use binary::BinaryCodec;
pub use text::TextCodec;
