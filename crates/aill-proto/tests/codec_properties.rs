//! Property-based tests for the utterance codec.
//!
//! These verify the round-trip invariants for ALL generated inputs, not
//! just hand-picked examples: `decode(encode(tree)) == tree` for arbitrary
//! expression trees, varint minimality, and epoch framing identity.

use aill_proto::{
    Annotation, Expression, FieldKey, MetaHeader, ModalExtra, Modality, Pragmatic, Temporal,
    Utterance, Value, decode_utterance, decode_utterance_prefix, encode_utterance,
    epoch::{self, MAX_EPOCH_PAYLOAD},
    varint,
};
use half::f16;
use proptest::prelude::*;

/// Non-NaN binary16 values (NaN payloads are compared by class, tested
/// separately in the conformance suite).
fn arb_f16() -> impl Strategy<Value = f16> {
    any::<u16>()
        .prop_map(f16::from_bits)
        .prop_filter("NaN", |v| !v.is_nan())
}

fn arb_f32() -> impl Strategy<Value = f32> {
    any::<u32>()
        .prop_map(f32::from_bits)
        .prop_filter("NaN", |v| !v.is_nan())
}

fn arb_f64() -> impl Strategy<Value = f64> {
    any::<u64>()
        .prop_map(f64::from_bits)
        .prop_filter("NaN", |v| !v.is_nan())
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i8>().prop_map(Value::I8),
        any::<i16>().prop_map(Value::I16),
        any::<i32>().prop_map(Value::I32),
        any::<i64>().prop_map(Value::I64),
        any::<u8>().prop_map(Value::U8),
        any::<u16>().prop_map(Value::U16),
        any::<u32>().prop_map(Value::U32),
        any::<u64>().prop_map(Value::U64),
        arb_f16().prop_map(Value::F16),
        arb_f32().prop_map(Value::F32),
        arb_f64().prop_map(Value::F64),
        any::<bool>().prop_map(Value::Bool),
        "\\PC{0,24}".prop_map(Value::Str),
        prop::collection::vec(any::<u8>(), 0..32).prop_map(Value::Bytes),
        any::<i64>().prop_map(Value::Timestamp),
        Just(Value::Null),
    ]
}

fn arb_pragmatic() -> impl Strategy<Value = Pragmatic> {
    (0x80u8..=0x8F).prop_filter_map("pragmatic", Pragmatic::from_u8)
}

fn arb_temporal() -> impl Strategy<Value = Temporal> {
    (0x60u8..=0x6F).prop_filter_map("temporal", Temporal::from_u8)
}

/// Modalities without an extra argument.
fn arb_plain_modality() -> impl Strategy<Value = Modality> {
    (0x70u8..=0x7F)
        .prop_filter_map("modality", Modality::from_u8)
        .prop_filter("extra-carrying", |m| {
            !matches!(m, Modality::Predicted | Modality::Reported)
        })
}

/// Codes that decode as a single opaque node: quantifiers, logic,
/// relational, arithmetic, and the reserved range.
fn arb_opaque_code() -> impl Strategy<Value = u8> {
    prop_oneof![0x30u8..=0x5F, 0xA0u8..=0xEF]
}

fn arb_leaf() -> impl Strategy<Value = Expression> {
    prop_oneof![
        arb_value().prop_map(Expression::Literal),
        (1u8..=3, any::<u16>())
            .prop_map(|(level, code)| Expression::DomainRef { level, code }),
        any::<u32>().prop_map(|sct_index| Expression::ContextRef { sct_index }),
        any::<u16>().prop_map(|proposed_code| Expression::Extension { proposed_code }),
        arb_opaque_code().prop_map(|code| Expression::Opaque {
            code,
            mnemonic: aill_proto::base_lookup(code).mnemonic,
        }),
    ]
}

fn arb_expression() -> impl Strategy<Value = Expression> {
    arb_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            // Struct with unique coded fields (duplicates are
            // last-write-wins on decode, so they cannot round-trip).
            prop::collection::btree_map(any::<u16>(), inner.clone(), 0..4).prop_map(|fields| {
                Expression::Struct {
                    fields: fields
                        .into_iter()
                        .map(|(code, value)| (FieldKey::Code(code), value))
                        .collect(),
                }
            }),
            prop::collection::vec(inner.clone(), 0..4).prop_map(|elements| Expression::List {
                count: elements.len() as u16,
                elements,
                incomplete: false,
            }),
            prop::collection::vec((inner.clone(), inner.clone()), 0..3).prop_map(|pairs| {
                Expression::Map { count: pairs.len() as u16, pairs, incomplete: false }
            }),
            (arb_pragmatic(), inner.clone())
                .prop_map(|(act, e)| Expression::pragmatic(act, e)),
            (arb_plain_modality(), inner.clone())
                .prop_map(|(m, e)| Expression::modal(m, e)),
            (arb_f16(), inner.clone()).prop_map(|(h, e)| Expression::Modal {
                modality: Modality::Predicted,
                inner: Box::new(e),
                extra: Some(ModalExtra::Horizon(h)),
            }),
            (any::<[u8; 16]>(), inner.clone()).prop_map(|(uuid, e)| Expression::Modal {
                modality: Modality::Reported,
                inner: Box::new(e),
                extra: Some(ModalExtra::Reporter(uuid)),
            }),
            (arb_temporal(), inner.clone())
                .prop_map(|(t, e)| Expression::temporal(t, e)),
            (arb_f16(), inner.clone()).prop_map(|(c, e)| Expression::Annotated {
                annotation: Annotation::Confidence(c),
                inner: Box::new(e),
            }),
            ("\\PC{0,16}", inner).prop_map(|(label, e)| Expression::Annotated {
                annotation: Annotation::Label(label),
                inner: Box::new(e),
            }),
        ]
    })
}

fn arb_meta() -> impl Strategy<Value = MetaHeader> {
    (
        arb_f16(),
        any::<u8>(),
        any::<i64>(),
        prop::option::of(any::<[u8; 16]>()),
        prop::option::of(any::<[u8; 16]>()),
        prop::option::of(any::<u32>()),
        prop::option::of(any::<u64>()),
        prop::option::of(any::<u16>()),
        prop::option::of(any::<u16>()),
        prop::option::of((any::<u16>(), any::<u16>())),
    )
        .prop_map(
            |(
                confidence,
                priority,
                timestamp_us,
                source_agent,
                dest_agent,
                seqnum,
                trace_id,
                ttl,
                topic,
                version_tag,
            )| MetaHeader {
                confidence,
                priority,
                timestamp_us,
                source_agent,
                dest_agent,
                seqnum,
                trace_id,
                ttl,
                topic,
                version_tag,
            },
        )
}

fn arb_utterance() -> impl Strategy<Value = Utterance> {
    (arb_meta(), prop::collection::vec(arb_expression(), 0..4))
        .prop_map(|(meta, body)| Utterance { meta, body })
}

proptest! {
    #[test]
    fn utterance_round_trip(utterance in arb_utterance()) {
        let wire = encode_utterance(&utterance).expect("should encode");
        let decoded = decode_utterance(&wire).expect("should decode");
        prop_assert_eq!(decoded, utterance);
    }

    #[test]
    fn successful_prefix_decodes_identically(utterance in arb_utterance(), trailer in prop::collection::vec(any::<u8>(), 0..16)) {
        let wire = encode_utterance(&utterance).expect("should encode");
        let mut stream = wire.to_vec();
        stream.extend_from_slice(&trailer);

        let (decoded, consumed) = decode_utterance_prefix(&stream).expect("should decode");
        prop_assert_eq!(consumed, wire.len());
        let (again, _) = decode_utterance_prefix(&stream[..consumed]).expect("prefix should decode");
        prop_assert_eq!(decoded, again);
    }

    #[test]
    fn varint_round_trip_and_minimality(value in any::<u32>()) {
        let mut buf = Vec::new();
        varint::encode_varint(value, &mut buf);
        let (decoded, consumed) = varint::decode_varint(&buf, 0).expect("should decode");
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(consumed, buf.len());

        let minimal_width = match value {
            0..=127 => 1,
            128..=16_383 => 2,
            16_384..=2_097_151 => 3,
            2_097_152..=268_435_455 => 4,
            _ => 5,
        };
        prop_assert_eq!(buf.len(), minimal_width);
    }

    #[test]
    fn epoch_round_trip(payload in prop::collection::vec(any::<u8>(), 0..MAX_EPOCH_PAYLOAD), seq in any::<u16>()) {
        let frame = epoch::encode_epoch(seq, &payload).expect("should frame");
        let (decoded, consumed) = epoch::decode_epoch(&frame, 0).expect("should decode");
        prop_assert_eq!(consumed, frame.len());
        prop_assert_eq!(decoded.seq, seq);
        prop_assert_eq!(&decoded.payload[..], &payload[..]);
        prop_assert!(decoded.crc_ok);
    }

    #[test]
    fn framer_reassembles_the_stream(chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..2048), 1..12)) {
        let mut framer = aill_proto::EpochFramer::new();
        for chunk in &chunks {
            framer.write(chunk);
        }
        let frames = framer.into_frames();

        let mut reassembled = Vec::new();
        let mut expected_seq = 0u16;
        for frame in &frames {
            let (decoded, consumed) = epoch::decode_epoch(frame, 0).expect("should decode");
            prop_assert_eq!(consumed, frame.len());
            prop_assert!(decoded.payload.len() <= MAX_EPOCH_PAYLOAD);
            prop_assert!(decoded.crc_ok);
            prop_assert_eq!(decoded.seq, expected_seq);
            expected_seq = expected_seq.wrapping_add(1);
            reassembled.extend_from_slice(&decoded.payload);
        }

        let flat: Vec<u8> = chunks.concat();
        prop_assert_eq!(reassembled, flat);
    }
}
