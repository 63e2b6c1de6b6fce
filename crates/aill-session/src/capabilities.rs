//! Agent capability records.
//!
//! Each agent advertises one [`AgentCapabilities`] record; the handshake
//! reduces two records plus a channel report to the session parameters
//! (min / bitwise-AND / intersection, see [`crate::negotiate`]).

use std::collections::BTreeSet;

/// Capability bit: extended bands B2/B3 supported.
pub const CAP_EXTENDED_BANDS: u16 = 0x0001;
/// Capability bit: band B4 supported.
pub const CAP_BAND_B4: u16 = 0x0002;
/// Capability bit: fountain coding supported.
pub const CAP_FOUNTAIN: u16 = 0x0010;
/// Capability bit: RS(255,223) outer code supported.
pub const CAP_REED_SOLOMON: u16 = 0x0020;

/// Conformance level 0: Core.
pub const CONFORMANCE_CORE: u8 = 0;
/// Conformance level 1: Basic.
pub const CONFORMANCE_BASIC: u8 = 1;
/// Conformance level 2: Standard.
pub const CONFORMANCE_STANDARD: u8 = 2;
/// Conformance level 3: Full.
pub const CONFORMANCE_FULL: u8 = 3;

/// What one agent can do, advertised before any session runs.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentCapabilities {
    /// 128-bit agent identifier.
    pub uuid: [u8; 16],
    /// Protocol version, 0x0100 for v1.0.
    pub protocol_version: u16,
    /// Conformance level 0..=7 (0 Core, 1 Basic, 2 Standard, 3 Full).
    pub conformance_level: u8,
    /// Feature bits (see the `CAP_*` constants).
    pub capabilities_bitmap: u16,
    /// Highest supported sample rate in kHz.
    pub max_sample_rate_khz: u16,
    /// Preferred symbol frame duration in microseconds.
    pub preferred_frame_duration_us: u16,
    /// Measured acoustic noise floor in dB SPL.
    pub noise_floor_db_spl: f32,
    /// Domain codebook registry ids this agent understands.
    pub codebook_sets: BTreeSet<u8>,
}

impl Default for AgentCapabilities {
    /// The reference defaults: a Standard-level agent with the NAV-1,
    /// PERCEPT-1, and DIAG-1 codebooks.
    fn default() -> Self {
        Self {
            uuid: [0u8; 16],
            protocol_version: 0x0100,
            conformance_level: CONFORMANCE_STANDARD,
            capabilities_bitmap: 0x007F,
            max_sample_rate_khz: 48,
            preferred_frame_duration_us: 2500,
            noise_floor_db_spl: 35.0,
            codebook_sets: BTreeSet::from([0x01, 0x02, 0x05]),
        }
    }
}

impl AgentCapabilities {
    /// True when the given capability bit is set.
    #[must_use]
    pub fn has_cap(&self, bit: u16) -> bool {
        self.capabilities_bitmap & bit != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_standard_level() {
        let caps = AgentCapabilities::default();
        assert_eq!(caps.conformance_level, CONFORMANCE_STANDARD);
        assert!(caps.has_cap(CAP_EXTENDED_BANDS));
        assert!(caps.has_cap(CAP_REED_SOLOMON));
        assert_eq!(caps.codebook_sets, BTreeSet::from([0x01, 0x02, 0x05]));
    }
}
