//! AILL session layer.
//!
//! Everything that happens before and around the codec: agents advertise
//! [`AgentCapabilities`], a [`ChannelProfile`] is characterized into a
//! [`ChannelReport`], and [`negotiate_session`] derives the common
//! [`SessionParams`] both endpoints run with. The negotiated parameters
//! bound the per-session [`SessionContextTable`] that CONTEXT_REF
//! expressions index into.
//!
//! The handshake is a pure function over in-memory records - no retries,
//! no I/O. Peers that want to exchange capabilities on the wire encode
//! them as a normal utterance via [`wire::capabilities_utterance`], tagged
//! with the [`AILL_MAGIC`] number.

pub mod capabilities;
pub mod channel;
pub mod error;
pub mod negotiate;
pub mod sct;
pub mod wire;

pub use capabilities::{
    AgentCapabilities, CAP_BAND_B4, CAP_EXTENDED_BANDS, CAP_FOUNTAIN, CAP_REED_SOLOMON,
    CONFORMANCE_BASIC, CONFORMANCE_CORE, CONFORMANCE_FULL, CONFORMANCE_STANDARD,
};
pub use channel::{ChannelProfile, ChannelReport};
pub use error::SessionError;
pub use negotiate::{Band, Modulation, SessionParams, negotiate_session};
pub use sct::SessionContextTable;
pub use wire::{AILL_MAGIC, capabilities_utterance, parse_capabilities};
