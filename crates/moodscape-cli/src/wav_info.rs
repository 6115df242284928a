//! Standalone RIFF/WAV header parser.
//!
//! Used by the `probe` command and by tests as an independent check that
//! the engine's encoder writes containers any standard reader accepts.

use anyhow::{bail, ensure, Result};
use serde::Serialize;

/// Parsed WAV header fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WavInfo {
    /// PCM format tag (1 for the containers this project writes).
    pub format_tag: u16,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per sample frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Size of the data chunk in bytes.
    pub data_bytes: u32,
}

impl WavInfo {
    /// Number of sample frames in the data chunk.
    pub fn num_frames(&self) -> u32 {
        if self.block_align == 0 {
            return 0;
        }
        self.data_bytes / self.block_align as u32
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.byte_rate == 0 {
            return 0.0;
        }
        self.data_bytes as f64 / self.byte_rate as f64
    }
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Parses the canonical 44-byte RIFF/PCM header.
pub fn parse_wav_header(bytes: &[u8]) -> Result<WavInfo> {
    ensure!(bytes.len() >= 44, "file too short for a WAV header");

    if &bytes[0..4] != b"RIFF" {
        bail!("missing RIFF magic");
    }
    if &bytes[8..12] != b"WAVE" {
        bail!("missing WAVE identifier");
    }
    if &bytes[12..16] != b"fmt " {
        bail!("missing fmt chunk");
    }
    let fmt_size = read_u32(bytes, 16);
    ensure!(fmt_size == 16, "unexpected fmt chunk size {fmt_size}");
    if &bytes[36..40] != b"data" {
        bail!("missing data chunk");
    }

    let info = WavInfo {
        format_tag: read_u16(bytes, 20),
        channels: read_u16(bytes, 22),
        sample_rate: read_u32(bytes, 24),
        byte_rate: read_u32(bytes, 28),
        block_align: read_u16(bytes, 32),
        bits_per_sample: read_u16(bytes, 34),
        data_bytes: read_u32(bytes, 40),
    };

    let declared = read_u32(bytes, 4);
    ensure!(
        declared as u64 == 36 + info.data_bytes as u64,
        "RIFF size field {declared} disagrees with data chunk size {}",
        info.data_bytes
    );

    Ok(info)
}
