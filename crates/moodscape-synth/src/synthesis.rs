//! Additive harmonic synthesis with a shared vibrato LFO.
//!
//! Builds the raw mono signal for a mood by summing a harmonic series of
//! sinusoids. A single slow LFO warps the effective phase rate of every
//! harmonic, giving the characteristic ambient warble.

use std::f64::consts::TAU;

use crate::envelope::envelope;
use crate::preset::MoodPreset;

/// Vibrato LFO rate in Hz.
const LFO_RATE_HZ: f64 = 0.1;

/// Vibrato depth as a fraction of the nominal frequency.
const LFO_DEPTH: f64 = 0.1;

/// Per-harmonic amplitude numerator: amplitude for multiplier `h` is
/// `0.3 / h`, so higher harmonics roll off and total energy stays bounded
/// for any series length.
const HARMONIC_GAIN: f64 = 0.3;

/// Additive synthesizer for a single mood preset.
#[derive(Debug, Clone)]
pub struct HarmonicSynth<'a> {
    preset: &'a MoodPreset,
}

impl<'a> HarmonicSynth<'a> {
    /// Creates a synthesizer over a resolved preset.
    pub fn new(preset: &'a MoodPreset) -> Self {
        Self { preset }
    }

    /// Renders the mono signal for `duration` seconds at `sample_rate`.
    ///
    /// The buffer length is exactly `round(sample_rate * duration)`. The
    /// stage is fully deterministic: no randomness, output depends only on
    /// the preset, duration, and sample rate.
    pub fn synthesize(&self, duration: f64, sample_rate: u32) -> Vec<f64> {
        let num_samples = (sample_rate as f64 * duration).round() as usize;
        let dt = 1.0 / sample_rate as f64;
        let mut output = vec![0.0; num_samples];

        for (i, sample) in output.iter_mut().enumerate() {
            let t = i as f64 * dt;
            let lfo = (TAU * LFO_RATE_HZ * t).sin() * LFO_DEPTH + 1.0;
            let env = envelope(t, duration);

            let mut acc = 0.0;
            for &h in &self.preset.harmonics {
                let freq = self.preset.base_freq * h;
                let amp = HARMONIC_GAIN / h;
                acc += (TAU * freq * t * lfo).sin() * amp;
            }

            *sample = acc * env;
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::{resolve, Mood, MoodPreset};

    #[test]
    fn test_buffer_length_is_exact() {
        let preset = resolve("Serene");
        let synth = HarmonicSynth::new(&preset);

        assert_eq!(synth.synthesize(1.0, 44100).len(), 44100);
        assert_eq!(synth.synthesize(0.5, 44100).len(), 22050);
        // 0.0001 s at 8 kHz rounds to 1 sample.
        assert_eq!(synth.synthesize(0.0001, 8000).len(), 1);
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let preset = resolve("Mystical");
        let synth = HarmonicSynth::new(&preset);

        let a = synth.synthesize(0.25, 22050);
        let b = synth.synthesize(0.25, 22050);
        assert_eq!(a, b);
    }

    #[test]
    fn test_energy_is_bounded_by_harmonic_rolloff() {
        // Sum of 0.3/h over the series bounds the peak before the envelope.
        for &mood in Mood::all() {
            let preset = MoodPreset::for_mood(mood);
            let bound: f64 = preset.harmonics.iter().map(|h| 0.3 / h).sum();
            let synth = HarmonicSynth::new(&preset);
            for s in synth.synthesize(2.0, 8000) {
                assert!(s.abs() <= bound + 1e-9, "{mood}: |{s}| > {bound}");
            }
        }
    }

    #[test]
    fn test_envelope_silences_endpoints() {
        let preset = resolve("Energetic");
        let synth = HarmonicSynth::new(&preset);
        let samples = synth.synthesize(1.0, 8000);

        assert_eq!(samples[0], 0.0);
        // Last sample sits one dt before the fade-out endpoint; it must be
        // far quieter than the sustain region.
        let tail = samples[samples.len() - 1].abs();
        assert!(tail < 0.01, "tail sample {tail} not faded");
    }
}
