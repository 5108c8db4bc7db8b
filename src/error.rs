//! Error types for msgwire.

use thiserror::Error;

/// Main error type for all codec and record operations.
#[derive(Debug, Error)]
pub enum MsgError {
    /// Destination buffer is shorter than the encoded record.
    ///
    /// Nothing has been written when this is returned.
    #[error("Out of space: need {needed} bytes, buffer has {available}")]
    OutOfSpace { needed: usize, available: usize },

    /// Input ended before a declared prefix or field was complete.
    #[error("Truncated input reading {field}: need {needed} bytes, {remaining} remaining")]
    Truncated {
        /// Wire field being read when input ran out.
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    /// A declared length or count is structurally invalid.
    #[error("Malformed record: {0}")]
    Malformed(String),

    /// Textual interchange input could not be parsed or produced.
    #[error("Text format error: {0}")]
    TextFormat(#[from] serde_json::Error),
}

impl MsgError {
    /// Check if this is a truncation error.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        matches!(self, MsgError::Truncated { .. })
    }

    /// Check if this is a malformed-input error.
    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(self, MsgError::Malformed(_))
    }

    /// Check if this is an out-of-space error.
    #[inline]
    pub fn is_out_of_space(&self) -> bool {
        matches!(self, MsgError::OutOfSpace { .. })
    }
}

/// Result type alias using MsgError.
pub type Result<T> = std::result::Result<T, MsgError>;
