//! Error types for the session layer.

use thiserror::Error;

use aill_proto::WireError;

/// Errors raised while exchanging session records over the codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The utterance is not a capability record (wrong shape or magic).
    #[error("not a capability record: {reason}")]
    NotCapabilities {
        /// What was missing or mismatched.
        reason: &'static str,
    },

    /// A capability field is absent or has the wrong literal type.
    #[error("capability record missing field {which}")]
    MissingField {
        /// Field name as documented in the wire layout.
        which: &'static str,
    },

    /// Underlying codec failure.
    #[error(transparent)]
    Wire(#[from] WireError),
}
