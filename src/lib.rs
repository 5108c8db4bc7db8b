//! # msgwire
//!
//! Compact length-prefixed binary encoding for message records.
//!
//! A record carries an id, a sender id, an ordered list of recipient ids,
//! a body and a type tag. This crate provides:
//!
//! - **Binary codec**: exact size computation, encode into a caller buffer,
//!   strictly bounds-checked decode
//! - **Text codec**: JSON form for logging and interop
//! - **Utilities**: construction with a generated id and timestamp, validation
//!
//! ## Example
//!
//! ```
//! use msgwire::{BinaryCodec, MsgUtils, Record};
//!
//! let record = Record::new("msg456", "sender123", ["recipient1", "recipient2"], "Hello, world!", "greeting");
//! assert!(MsgUtils::validate(&record));
//!
//! // Serialize
//! let mut buf = vec![0u8; BinaryCodec::size_of(&record)];
//! BinaryCodec::encode(&record, &mut buf)?;
//!
//! // Deserialize
//! let decoded = BinaryCodec::decode(&buf)?;
//! assert_eq!(decoded, record);
//! # Ok::<(), msgwire::MsgError>(())
//! ```

pub mod codec;
pub mod error;
pub mod protocol;
pub mod utils;

pub use codec::{BinaryCodec, TextCodec};
pub use error::{MsgError, Result};
pub use protocol::{DecodeLimits, Record};
pub use utils::MsgUtils;
