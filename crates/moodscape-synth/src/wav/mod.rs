//! Deterministic 16-bit PCM WAV encoder.
//!
//! Writes canonical RIFF/PCM containers with no timestamps or variable
//! metadata, so identical sample buffers always produce identical bytes.
//! The BLAKE3 hash of the PCM payload is carried alongside the container
//! for cheap determinism checks.

mod format;
mod result;
mod writer;

#[cfg(test)]
mod tests;

pub use format::WavFormat;
pub use result::WavResult;
pub use writer::{encode_stereo, samples_to_pcm16, stereo_to_pcm16, write_wav};

/// Media type of the encoded container.
pub const WAV_MIME: &str = "audio/wav";
