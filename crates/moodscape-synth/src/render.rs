//! Full render pipeline: resolve, synthesize, modulate, limit, encode.

use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};
use crate::limiter::limit_buffer;
use crate::modulation::modulate_buffer;
use crate::preset::{self, MoodPreset};
use crate::rng::create_component_rng;
use crate::synthesis::HarmonicSynth;
use crate::wav::WavResult;

/// Default track duration in seconds.
pub const DEFAULT_DURATION_SECONDS: f64 = 120.0;

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Allocation cap for the mono sample buffer, in bytes. Roughly sixteen
/// hours of audio at 44.1 kHz; anything larger is rejected up front rather
/// than aborting inside the allocator.
const MAX_BUFFER_BYTES: u64 = 1 << 30;

/// RNG stream key for the Sparse rhythm gate.
const SPARSE_GATE_KEY: &str = "sparse-gate";

/// Parameters for one render call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Mood label. Unknown labels resolve to the Serene preset.
    pub mood: String,
    /// Track duration in seconds.
    pub duration_seconds: f64,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Base seed for the render's random streams.
    pub seed: u32,
}

impl RenderConfig {
    /// Creates a config with the default duration, sample rate, and seed 0.
    pub fn new(mood: impl Into<String>) -> Self {
        Self {
            mood: mood.into(),
            duration_seconds: DEFAULT_DURATION_SECONDS,
            sample_rate: DEFAULT_SAMPLE_RATE,
            seed: 0,
        }
    }

    /// Sets the duration in seconds.
    pub fn with_duration(mut self, duration_seconds: f64) -> Self {
        self.duration_seconds = duration_seconds;
        self
    }

    /// Sets the sample rate in Hz.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets the base seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}

/// Result of one render call.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// Encoded WAV container plus PCM hash.
    pub wav: WavResult,
    /// The preset the mood resolved to.
    pub preset: MoodPreset,
    /// The mood label as requested by the caller.
    pub mood: String,
}

/// Renders a mood track into an encoded WAV container.
///
/// Deterministic: identical configs produce byte-identical containers.
/// The whole buffer is computed eagerly; for long durations run this on a
/// worker thread (see [`crate::generator::MusicGenerator`]).
pub fn render(config: &RenderConfig) -> SynthResult<RenderResult> {
    validate(config)?;

    let preset = preset::resolve(&config.mood);
    let synth = HarmonicSynth::new(&preset);
    let mut samples = synth.synthesize(config.duration_seconds, config.sample_rate);

    let mut gate_rng = create_component_rng(config.seed, SPARSE_GATE_KEY);
    modulate_buffer(&mut samples, &preset, config.sample_rate, &mut gate_rng);
    limit_buffer(&mut samples);

    // Both channels carry the identical signal; no stereo decorrelation.
    let wav = WavResult::from_stereo(&samples, &samples, config.sample_rate)?;

    Ok(RenderResult {
        wav,
        preset,
        mood: config.mood.clone(),
    })
}

fn validate(config: &RenderConfig) -> SynthResult<()> {
    if !config.duration_seconds.is_finite() || config.duration_seconds <= 0.0 {
        return Err(SynthError::InvalidDuration {
            duration: config.duration_seconds,
        });
    }
    if config.sample_rate == 0 {
        return Err(SynthError::InvalidSampleRate {
            rate: config.sample_rate,
        });
    }

    let num_samples = (config.sample_rate as f64 * config.duration_seconds).round();
    let requested_bytes = num_samples * std::mem::size_of::<f64>() as f64;
    if requested_bytes > MAX_BUFFER_BYTES as f64 {
        return Err(SynthError::ResourceExhausted {
            requested_bytes: requested_bytes as u64,
        });
    }

    Ok(())
}
