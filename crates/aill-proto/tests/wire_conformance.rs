//! Byte-exact conformance scenarios against the published wire format.
//!
//! Each test pins a documented wire sequence or boundary case: these are
//! the vectors an independent implementation must agree with, so they
//! assert exact bytes rather than round-trip identity.

use aill_proto::{
    Expression, FieldKey, ModalExtra, Modality, Pragmatic, Value, decode_utterance,
    decode_utterance_prefix, encode_epoch, decode_epoch, UtteranceBuilder,
};
use half::f16;

fn assert_wire(actual: &[u8], expected_hex: &str) {
    assert_eq!(hex::encode(actual), expected_hex);
}

#[test]
fn simple_assertion_of_an_integer() {
    // utterance(confidence=1.0, priority=3, timestamp=0) body ASSERT INT32 42
    let mut b = UtteranceBuilder::new();
    b.start_utterance(1.0, 3, Some(0)).unwrap();
    b.pragma(Pragmatic::Assert).unwrap();
    b.int32(42).unwrap();
    let wire = b.end_utterance().unwrap();

    // confidence 1.0 as binary16 is 0x3C00
    assert_wire(&wire, "00903c00910394000000000000000081120000002a01");

    let utt = decode_utterance(&wire).unwrap();
    assert_eq!(utt.meta.confidence, f16::from_f32(1.0));
    assert_eq!(utt.meta.priority, 3);
    assert_eq!(utt.meta.timestamp_us, 0);
    assert_eq!(
        utt.body,
        vec![Expression::pragmatic(
            Pragmatic::Assert,
            Expression::Literal(Value::I32(42))
        )]
    );
}

#[test]
fn position_report() {
    // ASSERT OBSERVED BEGIN_STRUCT FIELD_ID 0x0000 [f32 x3] END_STRUCT
    let mut b = UtteranceBuilder::new();
    b.start_utterance(1.0, 3, Some(0)).unwrap();
    b.pragma(Pragmatic::Assert).unwrap();
    b.modality(Modality::Observed).unwrap();
    b.begin_struct().unwrap();
    b.field(0x0000).unwrap();
    b.list_of_float32(&[12.5, -3.8, 2.1]).unwrap();
    b.end_struct().unwrap();
    let wire = b.end_utterance().unwrap();

    let utt = decode_utterance(&wire).unwrap();
    let Expression::Pragmatic { act, inner } = &utt.body[0] else {
        panic!("expected pragmatic root");
    };
    assert_eq!(*act, Pragmatic::Assert);
    let Expression::Modal { modality, inner, extra } = inner.as_ref() else {
        panic!("expected modal");
    };
    assert_eq!(*modality, Modality::Observed);
    assert_eq!(*extra, None);
    let Expression::Struct { fields } = inner.as_ref() else {
        panic!("expected struct");
    };
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].0, FieldKey::Code(0x0000));
    let Expression::List { count, elements, incomplete } = &fields[0].1 else {
        panic!("expected list");
    };
    assert_eq!(*count, 3);
    assert!(!incomplete);
    assert_eq!(
        elements,
        &vec![
            Expression::Literal(Value::F32(12.5)),
            Expression::Literal(Value::F32(-3.8)),
            Expression::Literal(Value::F32(2.1)),
        ]
    );
}

#[test]
fn domain_query() {
    // QUERY ESCAPE_L1 0x0000
    let mut b = UtteranceBuilder::new();
    b.start_utterance(1.0, 3, Some(0)).unwrap();
    b.pragma(Pragmatic::Query).unwrap();
    b.l1_ref(0x0000).unwrap();
    let wire = b.end_utterance().unwrap();

    let utt = decode_utterance(&wire).unwrap();
    assert_eq!(
        utt.body,
        vec![Expression::pragmatic(
            Pragmatic::Query,
            Expression::DomainRef { level: 1, code: 0x0000 }
        )]
    );
}

#[test]
fn predicted_horizon_within_f16_tolerance() {
    // ASSERT PREDICTED f16(500.0) FLOAT32(2.0)
    let mut b = UtteranceBuilder::new();
    b.start_utterance(1.0, 3, Some(0)).unwrap();
    b.pragma(Pragmatic::Assert).unwrap();
    b.predicted(500.0).unwrap();
    b.float32(2.0).unwrap();
    let wire = b.end_utterance().unwrap();

    let utt = decode_utterance(&wire).unwrap();
    let Expression::Pragmatic { inner, .. } = &utt.body[0] else {
        panic!("expected pragmatic root");
    };
    let Expression::Modal { modality, inner, extra } = inner.as_ref() else {
        panic!("expected modal");
    };
    assert_eq!(*modality, Modality::Predicted);
    let Some(ModalExtra::Horizon(horizon)) = extra else {
        panic!("expected horizon extra");
    };
    assert!((horizon.to_f32() - 500.0).abs() <= 1.0);
    assert_eq!(**inner, Expression::Literal(Value::F32(2.0)));
}

#[test]
fn epoch_detects_any_single_bit_flip() {
    let frame = encode_epoch(0, b"test data").unwrap();
    assert_eq!(frame.len(), 14);

    // Flip every bit of every byte except the CRC byte itself. A flip in
    // the length field may leave the frame undecodable (declared length
    // beyond the buffer); every decodable corruption must fail the CRC.
    for byte_idx in 0..frame.len() - 1 {
        for bit in 0..8 {
            let mut corrupted = frame.to_vec();
            corrupted[byte_idx] ^= 1 << bit;
            if let Ok((decoded, _)) = decode_epoch(&corrupted, 0) {
                assert!(
                    !decoded.crc_ok,
                    "flip at byte {byte_idx} bit {bit} went undetected"
                );
            }
        }
    }
}

#[test]
fn int_literal_boundaries() {
    for v in [-128i8, 0, 127] {
        let mut b = UtteranceBuilder::new();
        b.start_utterance(1.0, 3, Some(0)).unwrap();
        b.pragma(Pragmatic::Assert).unwrap();
        b.int8(v).unwrap();
        let utt = decode_utterance(&b.end_utterance().unwrap()).unwrap();
        assert_eq!(
            utt.body[0],
            Expression::pragmatic(Pragmatic::Assert, Expression::Literal(Value::I8(v)))
        );
    }
    for v in [i32::MIN, 0, i32::MAX] {
        let mut b = UtteranceBuilder::new();
        b.start_utterance(1.0, 3, Some(0)).unwrap();
        b.pragma(Pragmatic::Assert).unwrap();
        b.int32(v).unwrap();
        let utt = decode_utterance(&b.end_utterance().unwrap()).unwrap();
        assert_eq!(
            utt.body[0],
            Expression::pragmatic(Pragmatic::Assert, Expression::Literal(Value::I32(v)))
        );
    }
}

#[test]
fn float32_special_values() {
    for v in [0.0f32, -0.0, 1.5, -1.5, f32::INFINITY, f32::NEG_INFINITY] {
        let mut b = UtteranceBuilder::new();
        b.start_utterance(1.0, 3, Some(0)).unwrap();
        b.float32(v).unwrap();
        let utt = decode_utterance(&b.end_utterance().unwrap()).unwrap();
        let Expression::Literal(Value::F32(decoded)) = &utt.body[0] else {
            panic!("expected f32 literal");
        };
        assert_eq!(decoded.to_bits(), v.to_bits());
    }

    // NaN round-trips to some NaN.
    let mut b = UtteranceBuilder::new();
    b.start_utterance(1.0, 3, Some(0)).unwrap();
    b.float32(f32::NAN).unwrap();
    let utt = decode_utterance(&b.end_utterance().unwrap()).unwrap();
    let Expression::Literal(Value::F32(decoded)) = &utt.body[0] else {
        panic!("expected f32 literal");
    };
    assert!(decoded.is_nan());
}

#[test]
fn strings_with_non_ascii() {
    for s in ["", "Hello AILL! \u{1F916}", "\u{00E9}\u{00E8}\u{4E2D}\u{6587}"] {
        let mut b = UtteranceBuilder::new();
        b.start_utterance(1.0, 3, Some(0)).unwrap();
        b.string(s).unwrap();
        let utt = decode_utterance(&b.end_utterance().unwrap()).unwrap();
        assert_eq!(utt.body[0], Expression::Literal(Value::Str(s.to_owned())));
    }
}

#[test]
fn meta_annotations_round_trip() {
    let dest: [u8; 16] = core::array::from_fn(|i| i as u8);
    let mut b = UtteranceBuilder::new();
    b.start_utterance(0.85, 6, Some(12_345_678)).unwrap();
    b.dest_agent(&dest).unwrap();
    b.seqnum(42).unwrap();
    b.ttl(16).unwrap();
    b.version_tag(1, 1).unwrap();
    b.null().unwrap();
    let utt = decode_utterance(&b.end_utterance().unwrap()).unwrap();

    assert!((utt.meta.confidence.to_f32() - 0.85).abs() < 0.02);
    assert_eq!(utt.meta.priority, 6);
    assert_eq!(utt.meta.timestamp_us, 12_345_678);
    assert_eq!(utt.meta.dest_agent, Some(dest));
    assert_eq!(utt.meta.seqnum, Some(42));
    assert_eq!(utt.meta.ttl, Some(16));
    assert_eq!(utt.meta.version_tag, Some((1, 1)));
    assert_eq!(utt.meta.source_agent, None);
}

#[test]
fn prefix_decodability() {
    let mut b = UtteranceBuilder::new();
    b.start_utterance(1.0, 3, Some(0)).unwrap();
    b.pragma(Pragmatic::Assert).unwrap();
    b.list_of_int32(&[1, 2, 3]).unwrap();
    let wire = b.end_utterance().unwrap();

    // Append trailing garbage: the decoder must stop at END_UTTERANCE.
    let mut with_trailer = wire.to_vec();
    with_trailer.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);

    let (utt, consumed) = decode_utterance_prefix(&with_trailer).unwrap();
    assert_eq!(consumed, wire.len());
    let (again, _) = decode_utterance_prefix(&with_trailer[..consumed]).unwrap();
    assert_eq!(utt, again);
}

#[test]
fn extension_and_label_binding() {
    let mut b = UtteranceBuilder::new();
    b.start_utterance(1.0, 3, Some(0)).unwrap();
    b.extension(0x0C00).unwrap();
    b.label("THERMAL_GRADIENT").unwrap();
    b.begin_struct().unwrap();
    b.field(0x0000).unwrap();
    b.float32(0.5).unwrap();
    b.end_struct().unwrap();
    let utt = decode_utterance(&b.end_utterance().unwrap()).unwrap();

    assert_eq!(utt.body.len(), 2);
    assert_eq!(utt.body[0], Expression::Extension { proposed_code: 0x0C00 });
    let Expression::Annotated { annotation, inner } = &utt.body[1] else {
        panic!("expected labeled definition");
    };
    assert_eq!(
        *annotation,
        aill_proto::Annotation::Label("THERMAL_GRADIENT".to_owned())
    );
    assert!(matches!(inner.as_ref(), Expression::Struct { .. }));
}
