//! Per-sample rhythmic amplitude modulation.
//!
//! Each mood carries one of four rhythm policies. All are pure gain curves
//! except Sparse, which draws a random gate per sample from an injected
//! seeded RNG so renders stay reproducible.

use std::f64::consts::TAU;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::preset::{MoodPreset, RhythmPolicy};

/// Applies the preset's rhythm policy to one sample at time `t`.
///
/// The Sparse gate deliberately fires at audio rate rather than note rate:
/// the probability draw happens for every sample, producing a dense
/// noise-like gating. This matches the shipped behavior; the policy is fed
/// from the caller's seeded RNG so the gate sequence is reproducible.
pub fn modulate(sample: f64, preset: &MoodPreset, t: f64, rng: &mut Pcg32) -> f64 {
    match preset.rhythm {
        RhythmPolicy::Driving => {
            let beat_hz = preset.tempo_bpm / 60.0;
            sample * ((TAU * beat_hz * t).sin() * 0.2 + 0.8)
        }
        RhythmPolicy::Flowing => sample * ((TAU * 0.05 * t).sin() * 0.3 + 0.7),
        RhythmPolicy::Sparse => {
            let gate = if rng.gen::<f64>() < 0.3 { 1.0 } else { 0.1 };
            sample * gate
        }
        RhythmPolicy::Ethereal => sample * ((TAU * 0.03 * t).sin() * 0.5 + 0.5),
    }
}

/// Applies the rhythm policy across a whole buffer sampled at `sample_rate`.
pub fn modulate_buffer(
    samples: &mut [f64],
    preset: &MoodPreset,
    sample_rate: u32,
    rng: &mut Pcg32,
) {
    let dt = 1.0 / sample_rate as f64;
    for (i, sample) in samples.iter_mut().enumerate() {
        *sample = modulate(*sample, preset, i as f64 * dt, rng);
    }
}
