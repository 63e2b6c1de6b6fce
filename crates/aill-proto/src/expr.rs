//! Decoded expression trees.
//!
//! The decoder produces a single tagged [`Expression`] type rather than a
//! class hierarchy; every wire construct maps to exactly one variant, and
//! `decode(encode(tree)) == tree` for any tree the encoder accepts.

use std::borrow::Cow;

use half::f16;

use crate::codebook::{Modality, Pragmatic, Temporal};

/// A typed literal value (type markers 0x10-0x1F).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// TYPE_INT8
    I8(i8),
    /// TYPE_INT16
    I16(i16),
    /// TYPE_INT32
    I32(i32),
    /// TYPE_INT64
    I64(i64),
    /// TYPE_UINT8
    U8(u8),
    /// TYPE_UINT16
    U16(u16),
    /// TYPE_UINT32
    U32(u32),
    /// TYPE_UINT64
    U64(u64),
    /// TYPE_FLOAT16
    F16(f16),
    /// TYPE_FLOAT32
    F32(f32),
    /// TYPE_FLOAT64
    F64(f64),
    /// TYPE_BOOL
    Bool(bool),
    /// TYPE_STRING (length-prefixed UTF-8)
    Str(String),
    /// TYPE_BYTES (length-prefixed opaque bytes)
    Bytes(Vec<u8>),
    /// TYPE_TIMESTAMP (microseconds since epoch)
    Timestamp(i64),
    /// TYPE_NULL (no payload)
    Null,
}

/// Key of a struct field: explicit FIELD_ID code or positional index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// Field introduced by FIELD_ID with a 16-bit code.
    Code(u16),
    /// Unnamed field, keyed by its position among positional fields.
    Index(u16),
}

/// Extra argument carried by some modalities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModalExtra {
    /// PREDICTED: prediction horizon in milliseconds (f16).
    Horizon(f16),
    /// REPORTED: 16-byte identifier of the reporting agent.
    Reporter([u8; 16]),
}

/// Inline annotation wrapping an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    /// Inline CONFIDENCE tag (f16 in 0.0..=1.0).
    Confidence(f16),
    /// LABEL with a human-readable string.
    Label(String),
}

/// A decoded AILL expression.
///
/// # Invariants
///
/// - `Struct` fields preserve insertion order; a repeated FIELD_ID code is
///   last-write-wins (the first occurrence keeps its position, its value is
///   replaced).
/// - `List`/`Map` keep the declared wire count even when the stream ended
///   early; `incomplete` is set when fewer elements/pairs were present.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A typed literal.
    Literal(Value),

    /// BEGIN_STRUCT .. END_STRUCT with ordered fields.
    Struct {
        /// Ordered (key, value) pairs.
        fields: Vec<(FieldKey, Expression)>,
    },

    /// BEGIN_LIST count .. END_LIST.
    List {
        /// Declared element count from the wire.
        count: u16,
        /// Elements actually decoded.
        elements: Vec<Expression>,
        /// True when the stream ended before `count` elements were read.
        incomplete: bool,
    },

    /// BEGIN_MAP count .. END_MAP.
    Map {
        /// Declared pair count from the wire.
        count: u16,
        /// Key-value pairs actually decoded.
        pairs: Vec<(Expression, Expression)>,
        /// True when the stream ended before `count` pairs were read.
        incomplete: bool,
    },

    /// Pragmatic act prefix wrapping one expression.
    Pragmatic {
        /// The speech act (ASSERT, QUERY, ...).
        act: Pragmatic,
        /// Wrapped expression.
        inner: Box<Expression>,
    },

    /// Modality prefix wrapping one expression.
    Modal {
        /// The modality (OBSERVED, PREDICTED, ...).
        modality: Modality,
        /// Wrapped expression.
        inner: Box<Expression>,
        /// Horizon for PREDICTED, reporter for REPORTED, otherwise `None`.
        extra: Option<ModalExtra>,
    },

    /// Temporal modifier prefix wrapping one expression.
    Temporal {
        /// The temporal modifier (PAST, T_DEADLINE, ...).
        modifier: Temporal,
        /// Wrapped expression.
        inner: Box<Expression>,
    },

    /// ESCAPE_L1/L2/L3 reference into a domain codebook.
    DomainRef {
        /// Escape level: 1 standard, 2 session-negotiated, 3 ephemeral.
        level: u8,
        /// 16-bit domain code.
        code: u16,
    },

    /// CONTEXT_REF into the session context table.
    ContextRef {
        /// SCT index (varint on the wire).
        sct_index: u32,
    },

    /// Inline CONFIDENCE or LABEL annotation wrapping one expression.
    Annotated {
        /// The annotation payload.
        annotation: Annotation,
        /// Wrapped expression.
        inner: Box<Expression>,
    },

    /// EXTENSION proposing a new code; its binding (a following LABEL plus
    /// definition struct) is opaque to the codec.
    Extension {
        /// The proposed 16-bit code.
        proposed_code: u16,
    },

    /// Any other code, including the reserved range 0xC0-0xEF: consumed as a
    /// single byte and surfaced with its base-table mnemonic.
    Opaque {
        /// The raw code byte.
        code: u8,
        /// Mnemonic from the base codebook.
        mnemonic: Cow<'static, str>,
    },
}

impl Expression {
    /// Shorthand for a literal expression.
    #[must_use]
    pub fn literal(value: Value) -> Self {
        Self::Literal(value)
    }

    /// Shorthand for wrapping an expression in a pragmatic act.
    #[must_use]
    pub fn pragmatic(act: Pragmatic, inner: Self) -> Self {
        Self::Pragmatic { act, inner: Box::new(inner) }
    }

    /// Shorthand for wrapping an expression in a modality without extra.
    #[must_use]
    pub fn modal(modality: Modality, inner: Self) -> Self {
        Self::Modal { modality, inner: Box::new(inner), extra: None }
    }

    /// Shorthand for wrapping an expression in a temporal modifier.
    #[must_use]
    pub fn temporal(modifier: Temporal, inner: Self) -> Self {
        Self::Temporal { modifier, inner: Box::new(inner) }
    }
}

/// The utterance meta header.
///
/// CONFIDENCE, PRIORITY, and TIMESTAMP_META are mandatory and ordered on the
/// wire; the remaining annotations are optional, each at most once, in any
/// received order. The encoder emits the optional fields in one canonical
/// order, so tree equality is field-wise.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaHeader {
    /// Sender confidence in the utterance, 0.0..=1.0.
    pub confidence: f16,
    /// Priority 0..8 (higher is more urgent).
    pub priority: u8,
    /// Microseconds since the Unix epoch.
    pub timestamp_us: i64,
    /// Originating agent identifier.
    pub source_agent: Option<[u8; 16]>,
    /// Destination agent identifier.
    pub dest_agent: Option<[u8; 16]>,
    /// Sender-assigned sequence number.
    pub seqnum: Option<u32>,
    /// Distributed trace identifier.
    pub trace_id: Option<u64>,
    /// Hop-count time to live.
    pub ttl: Option<u16>,
    /// Topic code for publish/subscribe filtering.
    pub topic: Option<u16>,
    /// Protocol (major, minor) version tag.
    pub version_tag: Option<(u16, u16)>,
}

impl MetaHeader {
    /// A header with mandatory fields only.
    #[must_use]
    pub fn new(confidence: f16, priority: u8, timestamp_us: i64) -> Self {
        Self {
            confidence,
            priority,
            timestamp_us,
            source_agent: None,
            dest_agent: None,
            seqnum: None,
            trace_id: None,
            ttl: None,
            topic: None,
            version_tag: None,
        }
    }
}

/// A complete utterance: meta header plus ordered body expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// The meta header.
    pub meta: MetaHeader,
    /// Body expressions in wire order.
    pub body: Vec<Expression>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_builders_nest() {
        let expr = Expression::pragmatic(
            Pragmatic::Assert,
            Expression::modal(Modality::Observed, Expression::Literal(Value::I32(42))),
        );
        let Expression::Pragmatic { act, inner } = expr else {
            panic!("expected pragmatic");
        };
        assert_eq!(act, Pragmatic::Assert);
        assert!(matches!(
            *inner,
            Expression::Modal { modality: Modality::Observed, .. }
        ));
    }
}
