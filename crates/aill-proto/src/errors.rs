//! Error types for the AILL wire codec.
//!
//! Every fatal decode error carries the byte offset where decoding stopped,
//! so a bad stream can be diagnosed without dumping raw bytes. Fatal errors
//! abort the current utterance; the decoder never resynchronizes inside an
//! utterance - recovery happens at epoch boundaries.
//!
//! Two conditions from the protocol error taxonomy are deliberately NOT
//! variants here because they are non-fatal: an epoch CRC mismatch is the
//! `crc_ok` flag on [`crate::epoch::DecodedEpoch`], and an unknown code in
//! the reserved range decodes as an [`crate::expr::Expression::Opaque`] node.

use thiserror::Error;

use crate::encoder::BuilderState;

/// Result alias for codec operations.
pub type Result<T> = std::result::Result<T, WireError>;

/// Errors raised by the AILL primitive codec, encoder, decoder, and framer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    /// Fewer bytes remain than the current token requires.
    #[error("truncated stream at offset {offset}: {needed} more byte(s) required")]
    Truncated {
        /// Offset where the short read was attempted
        offset: usize,
        /// How many additional bytes were required
        needed: usize,
    },

    /// The wrong token appeared at this position.
    #[error("structural error at offset {offset}: expected {expected}, got {got:#04x}")]
    Structural {
        /// Offset of the offending byte
        offset: usize,
        /// Description of the expected token
        expected: &'static str,
        /// The code actually read
        got: u8,
    },

    /// A mandatory meta header field is absent or out of order.
    #[error("mandatory meta field missing or out of order: {which}")]
    MetaMissing {
        /// Name of the missing field
        which: &'static str,
    },

    /// Invalid UTF-8 in a string payload, or a malformed varint prefix.
    #[error("invalid encoding at offset {offset}")]
    Encoding {
        /// Offset of the malformed payload
        offset: usize,
    },

    /// A value cannot be represented in its wire type.
    #[error("value out of range: {value}")]
    Range {
        /// The offending value
        value: u64,
    },

    /// A builder operation was invoked in the wrong lifecycle state.
    #[error("invalid builder operation: cannot {op} in state {state:?}")]
    BuilderState {
        /// State the builder was in
        state: BuilderState,
        /// Operation that was attempted
        op: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_offsets() {
        let err = WireError::Truncated { offset: 7, needed: 4 };
        assert!(err.to_string().contains("offset 7"));

        let err = WireError::Structural { offset: 3, expected: "END_LIST", got: 0x26 };
        assert!(err.to_string().contains("0x26"));
        assert!(err.to_string().contains("END_LIST"));
    }
}
