//! Session parameter negotiation.
//!
//! [`negotiate_session`] is the handshake: a pure function reducing two
//! capability records and one channel report to the parameters both
//! endpoints run with. Every rule is a symmetric operator (min, bitwise
//! AND, set intersection) or reads only the channel, so negotiation is
//! commutative in its two peers.

use std::fmt;

use crate::{
    capabilities::{
        AgentCapabilities, CAP_BAND_B4, CAP_EXTENDED_BANDS, CAP_FOUNTAIN, CAP_REED_SOLOMON,
        CONFORMANCE_STANDARD,
    },
    channel::ChannelReport,
};

/// Modulation schemes in increasing spectral efficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modulation {
    /// Binary phase-shift keying, the robust floor.
    Bpsk,
    /// Quadrature phase-shift keying.
    Qpsk,
    /// 16-point quadrature amplitude modulation.
    Qam16,
    /// 64-point quadrature amplitude modulation.
    Qam64,
}

impl Modulation {
    /// Best scheme for the measured effective SNR.
    #[must_use]
    pub fn for_snr_db(snr_db: f32) -> Self {
        if snr_db >= 30.0 {
            Self::Qam64
        } else if snr_db >= 20.0 {
            Self::Qam16
        } else if snr_db >= 10.0 {
            Self::Qpsk
        } else {
            Self::Bpsk
        }
    }

    /// Bits carried per symbol.
    #[must_use]
    pub fn bits_per_symbol(self) -> u8 {
        match self {
            Self::Bpsk => 1,
            Self::Qpsk => 2,
            Self::Qam16 => 4,
            Self::Qam64 => 6,
        }
    }
}

impl fmt::Display for Modulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bpsk => "BPSK",
            Self::Qpsk => "QPSK",
            Self::Qam16 => "16-QAM",
            Self::Qam64 => "64-QAM",
        })
    }
}

/// Acoustic sub-bands. B0 and B1 are always active; the upper bands are
/// negotiated from capabilities and SNR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// Base band, always active.
    B0,
    /// Second base band, always active.
    B1,
    /// Extended band (needs `CAP_EXTENDED_BANDS`, SNR >= 20 dB).
    B2,
    /// Extended band (needs `CAP_EXTENDED_BANDS`, SNR >= 20 dB).
    B3,
    /// Top band (needs `CAP_BAND_B4`, SNR >= 25 dB).
    B4,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::B0 => "B0",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::B3 => "B3",
            Self::B4 => "B4",
        })
    }
}

/// The negotiated parameters for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionParams {
    /// Common conformance level (min of both peers).
    pub conformance_level: u8,
    /// Modulation recommended by channel characterization.
    pub modulation: Modulation,
    /// Active sub-bands in ascending order.
    pub active_bands: Vec<Band>,
    /// Frame duration in microseconds (max of both - the slower agent
    /// dictates).
    pub frame_duration_us: u16,
    /// Sample rate in kHz (min of both).
    pub sample_rate_khz: u16,
    /// Error-correction coding tags, e.g. `rate-1/2 conv + RS(255,223)`.
    pub error_correction: String,
    /// Common domain codebook ids, sorted ascending.
    pub codebook_sets: Vec<u8>,
    /// Session context table capacity.
    pub sct_max_size: u32,
}

/// Derive session parameters from two capability records and a channel
/// report.
///
/// Commutative in `a` and `b`: every peer-dependent field uses min,
/// bitwise AND, or sorted set intersection.
#[must_use]
pub fn negotiate_session(
    a: &AgentCapabilities,
    b: &AgentCapabilities,
    channel: &ChannelReport,
) -> SessionParams {
    let conformance_level = a.conformance_level.min(b.conformance_level);
    let common_caps = a.capabilities_bitmap & b.capabilities_bitmap;
    let sample_rate_khz = a.max_sample_rate_khz.min(b.max_sample_rate_khz);
    // The slower agent dictates the symbol pace.
    let frame_duration_us = a
        .preferred_frame_duration_us
        .max(b.preferred_frame_duration_us);

    let snr = channel.effective_snr_db;
    let mut active_bands = vec![Band::B0, Band::B1];
    if common_caps & CAP_EXTENDED_BANDS != 0 && snr >= 20.0 {
        active_bands.extend([Band::B2, Band::B3]);
    }
    if common_caps & CAP_BAND_B4 != 0 && snr >= 25.0 {
        active_bands.push(Band::B4);
    }

    let mut error_correction = String::from("rate-1/2 conv");
    if common_caps & CAP_REED_SOLOMON != 0 {
        error_correction.push_str(" + RS(255,223)");
    }
    if common_caps & CAP_FOUNTAIN != 0 {
        error_correction.push_str(" + fountain");
    }

    // BTreeSet intersection is already sorted ascending.
    let codebook_sets: Vec<u8> = a.codebook_sets.intersection(&b.codebook_sets).copied().collect();

    let sct_max_size = if conformance_level >= CONFORMANCE_STANDARD { 1024 } else { 64 };

    let params = SessionParams {
        conformance_level,
        modulation: channel.recommended_modulation,
        active_bands,
        frame_duration_us,
        sample_rate_khz,
        error_correction,
        codebook_sets,
        sct_max_size,
    };
    tracing::debug!(
        conformance = params.conformance_level,
        modulation = %params.modulation,
        bands = params.active_bands.len(),
        snr_db = snr,
        "session negotiated"
    );
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulation_thresholds() {
        assert_eq!(Modulation::for_snr_db(35.0), Modulation::Qam64);
        assert_eq!(Modulation::for_snr_db(30.0), Modulation::Qam64);
        assert_eq!(Modulation::for_snr_db(29.9), Modulation::Qam16);
        assert_eq!(Modulation::for_snr_db(20.0), Modulation::Qam16);
        assert_eq!(Modulation::for_snr_db(10.0), Modulation::Qpsk);
        assert_eq!(Modulation::for_snr_db(9.9), Modulation::Bpsk);
        assert_eq!(Modulation::for_snr_db(-10.0), Modulation::Bpsk);
    }

    #[test]
    fn modulation_names_match_the_wire_spec() {
        assert_eq!(Modulation::Qam64.to_string(), "64-QAM");
        assert_eq!(Modulation::Qam16.to_string(), "16-QAM");
        assert_eq!(Modulation::Qpsk.to_string(), "QPSK");
        assert_eq!(Modulation::Bpsk.to_string(), "BPSK");
    }

    #[test]
    fn low_conformance_shrinks_the_context_table() {
        let a = AgentCapabilities { conformance_level: 1, ..AgentCapabilities::default() };
        let b = AgentCapabilities::default();
        let report = ChannelReport::for_tests(15.0, Modulation::Qpsk);
        let params = negotiate_session(&a, &b, &report);
        assert_eq!(params.conformance_level, 1);
        assert_eq!(params.sct_max_size, 64);
    }

    #[test]
    fn bands_require_both_capability_and_snr() {
        let a = AgentCapabilities::default();
        let b = AgentCapabilities::default();

        let weak = ChannelReport::for_tests(15.0, Modulation::Qpsk);
        assert_eq!(
            negotiate_session(&a, &b, &weak).active_bands,
            vec![Band::B0, Band::B1]
        );

        let strong = ChannelReport::for_tests(26.0, Modulation::Qam16);
        assert_eq!(
            negotiate_session(&a, &b, &strong).active_bands,
            vec![Band::B0, Band::B1, Band::B2, Band::B3, Band::B4]
        );

        // Capability gate: strip the extended-band bits from one peer.
        let mut limited = b.clone();
        limited.capabilities_bitmap &= !(CAP_EXTENDED_BANDS | CAP_BAND_B4);
        assert_eq!(
            negotiate_session(&a, &limited, &strong).active_bands,
            vec![Band::B0, Band::B1]
        );
    }

    #[test]
    fn fec_tags_accumulate() {
        let report = ChannelReport::for_tests(15.0, Modulation::Qpsk);

        let bare = AgentCapabilities { capabilities_bitmap: 0, ..AgentCapabilities::default() };
        assert_eq!(
            negotiate_session(&bare, &bare.clone(), &report).error_correction,
            "rate-1/2 conv"
        );

        let coded = AgentCapabilities {
            capabilities_bitmap: CAP_REED_SOLOMON | CAP_FOUNTAIN,
            ..AgentCapabilities::default()
        };
        assert_eq!(
            negotiate_session(&coded, &coded.clone(), &report).error_correction,
            "rate-1/2 conv + RS(255,223) + fountain"
        );
    }
}
