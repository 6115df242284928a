//! Core WAV header emission and PCM conversion.

use std::io::{self, Write};

use crate::error::{SynthError, SynthResult};

use super::format::WavFormat;

/// Writes a complete WAV file to a writer.
///
/// Header layout is the canonical 44-byte RIFF/PCM form: `RIFF` + file size,
/// `WAVE`, a 16-byte `fmt ` chunk (PCM tag 1), then the `data` chunk.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Converts f64 samples to 16-bit little-endian PCM bytes.
///
/// Samples are clamped to [-1.0, 1.0] then scaled by 32767 with rounding.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let pcm_value = (clipped * 32767.0).round() as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }

    pcm
}

/// Interleaves two equal-length channel buffers into 16-bit PCM bytes,
/// frame-major (left sample then right sample).
///
/// Fails with [`SynthError::MismatchedChannelLength`] when the buffers
/// differ in length; no bytes are produced in that case.
pub fn stereo_to_pcm16(left: &[f64], right: &[f64]) -> SynthResult<Vec<u8>> {
    if left.len() != right.len() {
        return Err(SynthError::MismatchedChannelLength {
            left: left.len(),
            right: right.len(),
        });
    }

    let mut pcm = Vec::with_capacity(left.len() * 4);
    for (&l, &r) in left.iter().zip(right.iter()) {
        let l_pcm = (l.clamp(-1.0, 1.0) * 32767.0).round() as i16;
        pcm.extend_from_slice(&l_pcm.to_le_bytes());

        let r_pcm = (r.clamp(-1.0, 1.0) * 32767.0).round() as i16;
        pcm.extend_from_slice(&r_pcm.to_le_bytes());
    }

    Ok(pcm)
}

/// Encodes a stereo sample pair into a complete WAV container.
pub fn encode_stereo(left: &[f64], right: &[f64], sample_rate: u32) -> SynthResult<Vec<u8>> {
    let pcm = stereo_to_pcm16(left, right)?;
    Ok(write_wav_to_vec(&WavFormat::stereo(sample_rate), &pcm))
}
