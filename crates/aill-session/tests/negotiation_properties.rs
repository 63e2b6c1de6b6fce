//! Property-based and scenario tests for session negotiation.
//!
//! Negotiation must be commutative (every peer-dependent rule is min,
//! AND, or sorted intersection), and the published handshake scenario
//! must reproduce exactly.

use std::collections::BTreeSet;

use aill_session::{
    AgentCapabilities, Band, ChannelProfile, ChannelReport, Modulation, SessionContextTable,
    capabilities_utterance, negotiate_session, parse_capabilities,
};
use proptest::prelude::*;

fn arb_caps() -> impl Strategy<Value = AgentCapabilities> {
    (
        any::<[u8; 16]>(),
        0u8..=7,
        any::<u16>(),
        8u16..=192,
        500u16..=20_000,
        prop::collection::btree_set(1u8..=7, 0..5),
    )
        .prop_map(
            |(uuid, conformance_level, caps, rate, frame, codebook_sets)| AgentCapabilities {
                uuid,
                conformance_level,
                capabilities_bitmap: caps,
                max_sample_rate_khz: rate,
                preferred_frame_duration_us: frame,
                codebook_sets,
                ..AgentCapabilities::default()
            },
        )
}

fn arb_report() -> impl Strategy<Value = ChannelReport> {
    (-10.0f32..45.0, 50.0f32..900.0).prop_map(|(snr, rt60)| {
        ChannelProfile {
            snr_db: snr,
            distance_m: 1.0,
            reverb_rt60_ms: rt60,
            ..ChannelProfile::default()
        }
        .characterize()
    })
}

proptest! {
    #[test]
    fn negotiation_is_commutative(a in arb_caps(), b in arb_caps(), report in arb_report()) {
        let ab = negotiate_session(&a, &b, &report);
        let ba = negotiate_session(&b, &a, &report);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn negotiated_parameters_are_within_both_peers(a in arb_caps(), b in arb_caps(), report in arb_report()) {
        let params = negotiate_session(&a, &b, &report);

        prop_assert!(params.conformance_level <= a.conformance_level);
        prop_assert!(params.conformance_level <= b.conformance_level);
        prop_assert!(params.sample_rate_khz <= a.max_sample_rate_khz);
        prop_assert!(params.sample_rate_khz <= b.max_sample_rate_khz);
        prop_assert!(params.frame_duration_us >= a.preferred_frame_duration_us);
        prop_assert!(params.frame_duration_us >= b.preferred_frame_duration_us);

        for id in &params.codebook_sets {
            prop_assert!(a.codebook_sets.contains(id));
            prop_assert!(b.codebook_sets.contains(id));
        }
        let mut sorted = params.codebook_sets.clone();
        sorted.sort_unstable();
        prop_assert_eq!(&params.codebook_sets, &sorted);

        // B0/B1 are unconditional; everything else is capability-gated.
        prop_assert!(params.active_bands.starts_with(&[Band::B0, Band::B1]));
        prop_assert!(params.error_correction.starts_with("rate-1/2 conv"));
        prop_assert!(params.sct_max_size == 1024 || params.sct_max_size == 64);
    }

    #[test]
    fn capability_wire_round_trip(caps in arb_caps()) {
        let wire = capabilities_utterance(&caps).expect("should encode");
        let parsed = parse_capabilities(&wire).expect("should parse");
        prop_assert_eq!(parsed, caps);
    }
}

/// The published handshake scenario: a Standard-level and a Full-level
/// agent on a channel measuring in the 16-QAM window.
#[test]
fn standard_handshake_scenario() {
    let a = AgentCapabilities {
        conformance_level: 2,
        capabilities_bitmap: 0x007F,
        codebook_sets: BTreeSet::from([1, 2, 5, 6]),
        ..AgentCapabilities::default()
    };
    let b = AgentCapabilities {
        conformance_level: 3,
        capabilities_bitmap: 0x03FF,
        codebook_sets: BTreeSet::from([1, 2, 5, 6]),
        ..AgentCapabilities::default()
    };

    // Nominal 28 dB at 2 m with RT60 = 200 ms measures ~21 dB effective:
    // 28 - 20*log10(2) - 1.0 reverb penalty.
    let profile = ChannelProfile {
        snr_db: 28.0,
        distance_m: 2.0,
        reverb_rt60_ms: 200.0,
        ..ChannelProfile::default()
    };
    let report = profile.characterize();
    assert!((report.effective_snr_db - 20.98).abs() < 0.01);

    let params = negotiate_session(&a, &b, &report);
    assert_eq!(params.conformance_level, 2);
    assert_eq!(params.modulation, Modulation::Qam16);
    assert_eq!(params.modulation.to_string(), "16-QAM");
    assert_eq!(
        params.active_bands,
        vec![Band::B0, Band::B1, Band::B2, Band::B3]
    );
    assert_eq!(
        params.error_correction,
        "rate-1/2 conv + RS(255,223) + fountain"
    );
    assert_eq!(params.codebook_sets, vec![1, 2, 5, 6]);
    assert_eq!(params.sct_max_size, 1024);
}

#[test]
fn context_table_respects_negotiated_capacity() {
    let a = AgentCapabilities { conformance_level: 1, ..AgentCapabilities::default() };
    let b = AgentCapabilities::default();
    let report = ChannelProfile::default().characterize();
    let params = negotiate_session(&a, &b, &report);
    assert_eq!(params.sct_max_size, 64);

    let mut sct = SessionContextTable::new(params.sct_max_size);
    for i in 0..64 {
        assert!(
            sct.intern(aill_proto::Expression::Literal(aill_proto::Value::I32(i))).is_some()
        );
    }
    assert!(
        sct.intern(aill_proto::Expression::Literal(aill_proto::Value::I32(64))).is_none()
    );
}
