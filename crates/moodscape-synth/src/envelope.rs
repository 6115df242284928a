//! Linear fade-in / sustain / fade-out amplitude envelope.

/// Longest fade window in seconds, regardless of track length.
const MAX_FADE_SECONDS: f64 = 5.0;

/// Fraction of the track duration spent in each fade window.
const FADE_FRACTION: f64 = 0.1;

/// Returns the amplitude multiplier in `[0, 1]` at time `t` of a track
/// lasting `duration` seconds.
///
/// The fade window is `min(duration * 0.1, 5.0)` seconds. Inside the fade-in
/// window the gain ramps linearly from 0 to 1; inside the fade-out window it
/// ramps back down to 0; between them it holds at 1. For durations short
/// enough that the two windows meet, the result is the minimum of both ramps,
/// so the crossover is deterministic and never exceeds either ramp.
pub fn envelope(t: f64, duration: f64) -> f64 {
    let fade = (duration * FADE_FRACTION).min(MAX_FADE_SECONDS);
    if fade <= 0.0 {
        // Degenerate window: full sustain inside the track, silence outside.
        return if (0.0..=duration).contains(&t) { 1.0 } else { 0.0 };
    }

    let fade_in = t / fade;
    let fade_out = (duration - t) / fade;
    fade_in.min(fade_out).clamp(0.0, 1.0)
}
