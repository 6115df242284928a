//! Moodscape Audio Engine
//!
//! Deterministic, mood-conditioned procedural music synthesis. A mood label
//! resolves to a preset of synthesis parameters; the engine renders a
//! multi-second stereo waveform from it with additive harmonic synthesis,
//! shapes it with a fade envelope and a mood-specific rhythm policy, peak
//! limits it, and serializes it into a canonical 16-bit PCM WAV container.
//! No pre-recorded audio is involved anywhere.
//!
//! # Determinism
//!
//! Given the same [`render::RenderConfig`] the output container is
//! byte-identical across runs. The only stochastic stage, the Sparse rhythm
//! gate, draws from a PCG32 stream seeded via BLAKE3 derivation from the
//! config's base seed. Every [`wav::WavResult`] carries a BLAKE3 hash of
//! its PCM payload for cheap determinism checks.
//!
//! # Example
//!
//! ```no_run
//! use moodscape_synth::render::{render, RenderConfig};
//!
//! let config = RenderConfig::new("Mystical").with_duration(30.0).with_seed(42);
//! let result = render(&config)?;
//! std::fs::write("mystical.wav", &result.wav.wav_data)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`preset`] - Mood preset table and resolution
//! - [`envelope`] - Fade-in/sustain/fade-out amplitude envelope
//! - [`synthesis`] - Additive harmonic synthesis with vibrato LFO
//! - [`modulation`] - Per-sample rhythm policies
//! - [`limiter`] - Fixed-headroom peak limiter
//! - [`wav`] - Deterministic WAV encoder
//! - [`render`] - The full render pipeline
//! - [`generator`] - Device lifecycle and revocable track handles
//! - [`rng`] - Deterministic RNG with seed derivation

pub mod envelope;
pub mod error;
pub mod generator;
pub mod limiter;
pub mod modulation;
pub mod preset;
pub mod render;
pub mod rng;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use error::{SynthError, SynthResult};
pub use generator::{AudioDevice, GeneratedTrack, HostCapabilities, MusicGenerator, TrackHandle};
pub use preset::{FilterHint, Mood, MoodPreset, RhythmPolicy};
pub use render::{render, RenderConfig, RenderResult};
pub use wav::{WavResult, WAV_MIME};
