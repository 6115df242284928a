//! WAV encoding result type.

use crate::error::SynthResult;

use super::writer::{encode_stereo, stereo_to_pcm16};

/// Result of encoding a rendered buffer into a WAV container.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only (determinism validation).
    pub pcm_hash: String,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of sample frames per channel.
    pub num_frames: usize,
}

impl WavResult {
    /// Encodes stereo channel buffers into a WAV container.
    ///
    /// Fails when the channel buffers differ in length; no container is
    /// produced in that case.
    pub fn from_stereo(left: &[f64], right: &[f64], sample_rate: u32) -> SynthResult<Self> {
        let pcm = stereo_to_pcm16(left, right)?;
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = encode_stereo(left, right, sample_rate)?;

        Ok(Self {
            wav_data,
            pcm_hash,
            channels: 2,
            sample_rate,
            num_frames: left.len(),
        })
    }

    /// Returns the encoded duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / self.sample_rate as f64
    }
}
