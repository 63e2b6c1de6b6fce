//! Capability records on the wire.
//!
//! The handshake itself is a pure in-memory function, but peers that want
//! to exchange capabilities over the link encode them as a normal
//! utterance: an ASSERT of a struct whose first field carries the
//! [`AILL_MAGIC`] tag. Field codes within the struct are positional
//! protocol constants, documented on each accessor below.

use std::collections::BTreeSet;

use aill_proto::{
    Expression, FieldKey, Pragmatic, Utterance, UtteranceBuilder, Value, decode_utterance,
};
use bytes::Bytes;

use crate::{capabilities::AgentCapabilities, error::SessionError};

/// Identifying tag on capability records.
pub const AILL_MAGIC: u32 = 0xA111_C0DE;

const FIELD_MAGIC: u16 = 0x0000;
const FIELD_UUID: u16 = 0x0001;
const FIELD_PROTOCOL_VERSION: u16 = 0x0002;
const FIELD_CONFORMANCE: u16 = 0x0003;
const FIELD_CAPS_BITMAP: u16 = 0x0004;
const FIELD_SAMPLE_RATE: u16 = 0x0005;
const FIELD_FRAME_DURATION: u16 = 0x0006;
const FIELD_NOISE_FLOOR: u16 = 0x0007;
const FIELD_CODEBOOK_SETS: u16 = 0x0008;

/// Encode a capability record as a complete utterance.
///
/// # Errors
///
/// Propagates builder errors from the codec (none are expected for a
/// well-formed record).
pub fn capabilities_utterance(caps: &AgentCapabilities) -> Result<Bytes, SessionError> {
    let mut b = UtteranceBuilder::new();
    b.start_utterance(1.0, 7, None)?;
    b.source_agent(&caps.uuid)?;
    b.pragma(Pragmatic::Assert)?;
    b.begin_struct()?;
    b.field(FIELD_MAGIC)?;
    b.uint32(AILL_MAGIC)?;
    b.field(FIELD_UUID)?;
    b.byte_string(&caps.uuid)?;
    b.field(FIELD_PROTOCOL_VERSION)?;
    b.uint16(caps.protocol_version)?;
    b.field(FIELD_CONFORMANCE)?;
    b.uint8(caps.conformance_level)?;
    b.field(FIELD_CAPS_BITMAP)?;
    b.uint16(caps.capabilities_bitmap)?;
    b.field(FIELD_SAMPLE_RATE)?;
    b.uint16(caps.max_sample_rate_khz)?;
    b.field(FIELD_FRAME_DURATION)?;
    b.uint16(caps.preferred_frame_duration_us)?;
    b.field(FIELD_NOISE_FLOOR)?;
    b.float32(caps.noise_floor_db_spl)?;
    b.field(FIELD_CODEBOOK_SETS)?;
    let sets: Vec<u8> = caps.codebook_sets.iter().copied().collect();
    let count = u16::try_from(sets.len())
        .map_err(|_| SessionError::MissingField { which: "codebook_sets" })?;
    b.begin_list(count)?;
    for id in sets {
        b.uint8(id)?;
    }
    b.end_list()?;
    b.end_struct()?;
    Ok(b.end_utterance()?)
}

/// Parse a capability record from decoded wire bytes.
///
/// # Errors
///
/// - `SessionError::Wire` when the bytes do not decode
/// - `SessionError::NotCapabilities` when the utterance shape or magic is
///   wrong
/// - `SessionError::MissingField` when a required field is absent or
///   mistyped
pub fn parse_capabilities(wire: &[u8]) -> Result<AgentCapabilities, SessionError> {
    let utterance = decode_utterance(wire)?;
    parse_capabilities_utterance(&utterance)
}

/// Parse a capability record from an already-decoded utterance.
///
/// # Errors
///
/// Same shape conditions as [`parse_capabilities`].
pub fn parse_capabilities_utterance(
    utterance: &Utterance,
) -> Result<AgentCapabilities, SessionError> {
    let Some(Expression::Pragmatic { act: Pragmatic::Assert, inner }) = utterance.body.first()
    else {
        return Err(SessionError::NotCapabilities { reason: "body is not an ASSERT" });
    };
    let Expression::Struct { fields } = inner.as_ref() else {
        return Err(SessionError::NotCapabilities { reason: "ASSERT does not wrap a struct" });
    };

    let lookup = |code: u16| -> Option<&Expression> {
        fields
            .iter()
            .find(|(key, _)| *key == FieldKey::Code(code))
            .map(|(_, value)| value)
    };

    match lookup(FIELD_MAGIC) {
        Some(Expression::Literal(Value::U32(AILL_MAGIC))) => {}
        _ => return Err(SessionError::NotCapabilities { reason: "magic tag mismatch" }),
    }

    let uuid = match lookup(FIELD_UUID) {
        Some(Expression::Literal(Value::Bytes(raw))) if raw.len() == 16 => {
            let mut uuid = [0u8; 16];
            uuid.copy_from_slice(raw);
            uuid
        }
        _ => return Err(SessionError::MissingField { which: "uuid" }),
    };

    let protocol_version = match lookup(FIELD_PROTOCOL_VERSION) {
        Some(Expression::Literal(Value::U16(v))) => *v,
        _ => return Err(SessionError::MissingField { which: "protocol_version" }),
    };
    let conformance_level = match lookup(FIELD_CONFORMANCE) {
        Some(Expression::Literal(Value::U8(v))) => *v,
        _ => return Err(SessionError::MissingField { which: "conformance_level" }),
    };
    let capabilities_bitmap = match lookup(FIELD_CAPS_BITMAP) {
        Some(Expression::Literal(Value::U16(v))) => *v,
        _ => return Err(SessionError::MissingField { which: "capabilities_bitmap" }),
    };
    let max_sample_rate_khz = match lookup(FIELD_SAMPLE_RATE) {
        Some(Expression::Literal(Value::U16(v))) => *v,
        _ => return Err(SessionError::MissingField { which: "max_sample_rate_khz" }),
    };
    let preferred_frame_duration_us = match lookup(FIELD_FRAME_DURATION) {
        Some(Expression::Literal(Value::U16(v))) => *v,
        _ => return Err(SessionError::MissingField { which: "preferred_frame_duration_us" }),
    };
    let noise_floor_db_spl = match lookup(FIELD_NOISE_FLOOR) {
        Some(Expression::Literal(Value::F32(v))) => *v,
        _ => return Err(SessionError::MissingField { which: "noise_floor_db_spl" }),
    };

    let codebook_sets = match lookup(FIELD_CODEBOOK_SETS) {
        Some(Expression::List { elements, incomplete: false, .. }) => {
            let mut sets = BTreeSet::new();
            for element in elements {
                let Expression::Literal(Value::U8(id)) = element else {
                    return Err(SessionError::MissingField { which: "codebook_sets" });
                };
                sets.insert(*id);
            }
            sets
        }
        _ => return Err(SessionError::MissingField { which: "codebook_sets" }),
    };

    Ok(AgentCapabilities {
        uuid,
        protocol_version,
        conformance_level,
        capabilities_bitmap,
        max_sample_rate_khz,
        preferred_frame_duration_us,
        noise_floor_db_spl,
        codebook_sets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_record_round_trips() {
        let caps = AgentCapabilities {
            uuid: *b"robot-42-alpha..",
            conformance_level: 3,
            codebook_sets: BTreeSet::from([0x01, 0x04, 0x07]),
            ..AgentCapabilities::default()
        };
        let wire = capabilities_utterance(&caps).unwrap();
        let parsed = parse_capabilities(&wire).unwrap();
        assert_eq!(parsed, caps);
    }

    #[test]
    fn magic_mismatch_is_rejected() {
        let mut b = UtteranceBuilder::new();
        b.start_utterance(1.0, 7, Some(0)).unwrap();
        b.pragma(Pragmatic::Assert).unwrap();
        b.begin_struct().unwrap();
        b.field(FIELD_MAGIC).unwrap();
        b.uint32(0xDEAD_BEEF).unwrap();
        b.end_struct().unwrap();
        let wire = b.end_utterance().unwrap();
        assert_eq!(
            parse_capabilities(&wire),
            Err(SessionError::NotCapabilities { reason: "magic tag mismatch" })
        );
    }

    #[test]
    fn non_assert_body_is_rejected() {
        let mut b = UtteranceBuilder::new();
        b.start_utterance(1.0, 7, Some(0)).unwrap();
        b.pragma(Pragmatic::Query).unwrap();
        b.null().unwrap();
        let wire = b.end_utterance().unwrap();
        assert!(matches!(
            parse_capabilities(&wire),
            Err(SessionError::NotCapabilities { .. })
        ));
    }
}
