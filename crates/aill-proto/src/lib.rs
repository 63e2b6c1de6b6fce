//! AILL v1.1 wire-format codec.
//!
//! AILL (Acoustic Inter-agent Linguistic Link) is a binary semantic messaging
//! protocol for autonomous agents exchanging structured utterances over lossy
//! acoustic channels. This crate implements the codec core:
//!
//! - `codebook` - the 256-entry base codebook plus the standard Level 1
//!   domain codebooks (NAV-1, PERCEPT-1, MANIP-1, COMM-1, DIAG-1, PLAN-1,
//!   SAFETY-1)
//! - `stream` - big-endian primitive readers and writers
//! - `varint` - 1-5 byte variable-length unsigned integers
//! - `crc` - CRC-8 (poly 0x07) used by the epoch framer
//! - `expr` - the strongly-typed expression tree produced by the decoder
//! - `encoder` - lifecycle-checked utterance builder
//! - `decoder` - forward-only streaming decoder with offset-tagged errors
//! - `epoch` - CRC-protected transport framing (at most 8192 payload bytes
//!   per epoch)
//!
//! # Wire Format
//!
//! ```text
//! Utterance = START_UTTERANCE
//!             CONFIDENCE f16 | PRIORITY u8 | TIMESTAMP_META i64
//!             [optional meta annotations]
//!             [body expressions]
//!             END_UTTERANCE
//! Epoch     = seq(u16) | len(u16) | payload | crc8
//! ```
//!
//! All multi-byte values are big-endian. Session negotiation lives in the
//! companion `aill-session` crate; the physical acoustic channel is an
//! opaque boundary the codec exchanges bytes through.

pub mod codebook;
pub mod crc;
pub mod decoder;
pub mod encoder;
pub mod epoch;
pub mod errors;
pub mod expr;
pub mod stream;
pub mod varint;

pub use codebook::{
    Arithmetic, Category, CodeEntry, DomainCodebook, DomainEntry, Escape, FrameControl, Logic,
    Meta, Modality, Pragmatic, Quantifier, Relational, Structure, Temporal, TypeMarker,
    base_lookup, get_domain, is_binary_op, is_ternary_op, is_unary_op, register_domain,
};
pub use crc::crc8;
pub use decoder::{decode_utterance, decode_utterance_prefix};
pub use encoder::{BuilderState, UtteranceBuilder, encode_utterance};
pub use epoch::{DecodedEpoch, EpochFramer, MAX_EPOCH_PAYLOAD, decode_epoch, encode_epoch};
pub use errors::{Result, WireError};
pub use expr::{
    Annotation, Expression, FieldKey, MetaHeader, ModalExtra, Utterance, Value,
};
pub use stream::{ByteReader, ByteWriter};
