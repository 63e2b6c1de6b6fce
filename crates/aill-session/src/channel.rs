//! Acoustic channel profile and pre-session characterization.
//!
//! The physical channel itself (waveforms, bit-error injection) lives
//! outside this crate; the codec only ever exchanges bytes through an
//! opaque boundary. What the session layer needs is the measurement side:
//! a [`ChannelProfile`] describes the deployment conditions, and
//! [`ChannelProfile::characterize`] reduces them to the [`ChannelReport`]
//! the handshake consumes.

use crate::negotiate::Modulation;

/// Deployment conditions of one acoustic link.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelProfile {
    /// Nominal signal-to-noise ratio at the reference distance (1 m), dB.
    pub snr_db: f32,
    /// Distance between the agents in meters.
    pub distance_m: f32,
    /// Reverberation time RT60 in milliseconds.
    pub reverb_rt60_ms: f32,
    /// Ambient temperature in Celsius (affects the speed of sound).
    pub temperature_c: f32,
    /// Relative humidity in percent.
    pub humidity_pct: f32,
    /// Number of significant multipath reflections.
    pub multipath_taps: u8,
    /// High-frequency attenuation per octave above 4 kHz, dB.
    pub freq_response_rolloff_db: f32,
    /// Doppler shift from relative motion, Hz.
    pub doppler_shift_hz: f32,
}

impl Default for ChannelProfile {
    fn default() -> Self {
        Self {
            snr_db: 25.0,
            distance_m: 5.0,
            reverb_rt60_ms: 200.0,
            temperature_c: 20.0,
            humidity_pct: 50.0,
            multipath_taps: 4,
            freq_response_rolloff_db: 3.0,
            doppler_shift_hz: 0.0,
        }
    }
}

/// Pre-session channel measurement consumed by the handshake.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelReport {
    /// SNR after distance attenuation and reverb penalty, dB.
    pub effective_snr_db: f32,
    /// One-way propagation delay in milliseconds.
    pub propagation_delay_ms: f32,
    /// Free-space attenuation relative to 1 m, dB.
    pub distance_attenuation_db: f32,
    /// Modulation recommended for the effective SNR.
    pub recommended_modulation: Modulation,
    /// RT60 carried through for guard interval decisions.
    pub reverb_rt60_ms: f32,
    /// Band recommendation summary.
    pub max_bands: &'static str,
    /// Guard interval recommended for the reverberation, ms.
    pub recommended_guard_interval_ms: f32,
}

impl ChannelProfile {
    /// Speed of sound in m/s, adjusted for temperature.
    #[must_use]
    pub fn speed_of_sound(&self) -> f32 {
        331.3 + 0.606 * self.temperature_c
    }

    /// One-way propagation delay in milliseconds.
    #[must_use]
    pub fn propagation_delay_ms(&self) -> f32 {
        self.distance_m / self.speed_of_sound() * 1000.0
    }

    /// Free-space acoustic attenuation (inverse square law, 1 m
    /// reference). Zero at or below 0.1 m.
    #[must_use]
    pub fn distance_attenuation_db(&self) -> f32 {
        if self.distance_m <= 0.1 {
            0.0
        } else {
            20.0 * self.distance_m.log10()
        }
    }

    /// Effective SNR: nominal minus distance attenuation minus reverb
    /// penalty, floored at -10 dB. Late reflections act as noise, so RT60
    /// above 100 ms costs up to 6 dB.
    #[must_use]
    pub fn effective_snr_db(&self) -> f32 {
        let mut snr = self.snr_db - self.distance_attenuation_db();
        if self.reverb_rt60_ms > 100.0 {
            snr -= (6.0f32).min((self.reverb_rt60_ms - 100.0) * 0.01);
        }
        snr.max(-10.0)
    }

    /// Perform the pre-session measurement.
    #[must_use]
    pub fn characterize(&self) -> ChannelReport {
        let effective_snr_db = self.effective_snr_db();
        let report = ChannelReport {
            effective_snr_db,
            propagation_delay_ms: self.propagation_delay_ms(),
            distance_attenuation_db: self.distance_attenuation_db(),
            recommended_modulation: Modulation::for_snr_db(effective_snr_db),
            reverb_rt60_ms: self.reverb_rt60_ms,
            max_bands: recommend_bands(effective_snr_db),
            recommended_guard_interval_ms: recommend_guard(self.reverb_rt60_ms),
        };
        tracing::debug!(
            snr_db = report.effective_snr_db,
            modulation = %report.recommended_modulation,
            guard_ms = report.recommended_guard_interval_ms,
            "channel characterized"
        );
        report
    }
}

/// Band recommendation as a step function of effective SNR.
fn recommend_bands(snr_db: f32) -> &'static str {
    if snr_db >= 30.0 {
        "B0-B4 (full spectrum)"
    } else if snr_db >= 20.0 {
        "B0-B3 (standard)"
    } else if snr_db >= 10.0 {
        "B0-B2 (reduced)"
    } else {
        "B0-B1 (minimum)"
    }
}

/// Guard interval as a step function of RT60.
fn recommend_guard(rt60_ms: f32) -> f32 {
    if rt60_ms < 100.0 {
        0.3
    } else if rt60_ms < 300.0 {
        0.5
    } else if rt60_ms < 600.0 {
        0.8
    } else {
        1.2
    }
}

#[cfg(test)]
impl ChannelReport {
    /// Minimal report for negotiation unit tests.
    pub(crate) fn for_tests(effective_snr_db: f32, modulation: Modulation) -> Self {
        Self {
            effective_snr_db,
            propagation_delay_ms: 14.6,
            distance_attenuation_db: 14.0,
            recommended_modulation: modulation,
            reverb_rt60_ms: 200.0,
            max_bands: "B0-B2 (reduced)",
            recommended_guard_interval_ms: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_of_sound_tracks_temperature() {
        let warm = ChannelProfile { temperature_c: 20.0, ..ChannelProfile::default() };
        assert!((warm.speed_of_sound() - 343.42).abs() < 0.01);
        let freezing = ChannelProfile { temperature_c: 0.0, ..ChannelProfile::default() };
        assert!((freezing.speed_of_sound() - 331.3).abs() < 0.01);
    }

    #[test]
    fn close_range_has_no_distance_attenuation() {
        let profile = ChannelProfile { distance_m: 0.05, ..ChannelProfile::default() };
        assert_eq!(profile.distance_attenuation_db(), 0.0);
    }

    #[test]
    fn effective_snr_applies_attenuation_and_reverb() {
        // 25 dB nominal at 5 m: 20*log10(5) = 13.98 dB attenuation, plus a
        // 1 dB penalty for RT60 = 200 ms.
        let profile = ChannelProfile::default();
        let snr = profile.effective_snr_db();
        assert!((snr - (25.0 - 13.979_4 - 1.0)).abs() < 0.01);
    }

    #[test]
    fn effective_snr_is_floored() {
        let profile = ChannelProfile {
            snr_db: 0.0,
            distance_m: 100.0,
            ..ChannelProfile::default()
        };
        assert_eq!(profile.effective_snr_db(), -10.0);
    }

    #[test]
    fn reverb_penalty_is_capped_at_six_db() {
        let quiet = ChannelProfile {
            reverb_rt60_ms: 90.0,
            distance_m: 1.0,
            ..ChannelProfile::default()
        };
        let cavernous = ChannelProfile {
            reverb_rt60_ms: 2000.0,
            distance_m: 1.0,
            ..ChannelProfile::default()
        };
        assert!((quiet.effective_snr_db() - cavernous.effective_snr_db() - 6.0).abs() < 0.001);
    }

    #[test]
    fn guard_interval_steps() {
        for (rt60, guard) in [(50.0, 0.3), (100.0, 0.5), (299.0, 0.5), (300.0, 0.8), (600.0, 1.2)] {
            assert_eq!(recommend_guard(rt60), guard, "rt60 = {rt60}");
        }
    }

    #[test]
    fn band_recommendation_steps() {
        assert_eq!(recommend_bands(31.0), "B0-B4 (full spectrum)");
        assert_eq!(recommend_bands(22.0), "B0-B3 (standard)");
        assert_eq!(recommend_bands(12.0), "B0-B2 (reduced)");
        assert_eq!(recommend_bands(2.0), "B0-B1 (minimum)");
    }

    #[test]
    fn characterize_is_consistent() {
        let profile = ChannelProfile::default();
        let report = profile.characterize();
        assert_eq!(report.effective_snr_db, profile.effective_snr_db());
        assert_eq!(
            report.recommended_modulation,
            Modulation::for_snr_db(report.effective_snr_db)
        );
        assert_eq!(report.reverb_rt60_ms, profile.reverb_rt60_ms);
    }
}
