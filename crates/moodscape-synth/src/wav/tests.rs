//! Tests for the WAV encoder module.

use crate::error::SynthError;

use super::format::WavFormat;
use super::result::WavResult;
use super::writer::{encode_stereo, samples_to_pcm16, stereo_to_pcm16, write_wav};

// =========================================================================
// WavFormat tests
// =========================================================================

#[test]
fn test_wav_format_stereo() {
    let format = WavFormat::stereo(44100);
    assert_eq!(format.channels, 2);
    assert_eq!(format.sample_rate, 44100);
    assert_eq!(format.bits_per_sample, 16);
}

#[test]
fn test_block_align_and_byte_rate() {
    let mono = WavFormat::mono(44100);
    assert_eq!(mono.block_align(), 2); // 1 channel * 2 bytes
    assert_eq!(mono.byte_rate(), 88200);

    let stereo = WavFormat::stereo(44100);
    assert_eq!(stereo.block_align(), 4); // 2 channels * 2 bytes
    assert_eq!(stereo.byte_rate(), 176400);

    let stereo_48k = WavFormat::stereo(48000);
    assert_eq!(stereo_48k.byte_rate(), 192000);
}

// =========================================================================
// PCM conversion tests
// =========================================================================

#[test]
fn test_samples_to_pcm16_scaling() {
    let samples = vec![0.0, 0.5, -0.5, 1.0, -1.0];
    let pcm = samples_to_pcm16(&samples);

    assert_eq!(pcm.len(), 10);
    assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 0);
    assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), 16384); // (0.5 * 32767).round()
    assert_eq!(i16::from_le_bytes([pcm[4], pcm[5]]), -16384);
    assert_eq!(i16::from_le_bytes([pcm[6], pcm[7]]), 32767);
    assert_eq!(i16::from_le_bytes([pcm[8], pcm[9]]), -32767);
}

#[test]
fn test_samples_to_pcm16_clamps_out_of_range() {
    let samples = vec![1.5, -2.0, f64::INFINITY, f64::NEG_INFINITY];
    let pcm = samples_to_pcm16(&samples);

    assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 32767);
    assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), -32767);
    assert_eq!(i16::from_le_bytes([pcm[4], pcm[5]]), 32767);
    assert_eq!(i16::from_le_bytes([pcm[6], pcm[7]]), -32767);
}

#[test]
fn test_stereo_interleave_is_frame_major() {
    let left = vec![0.5, -0.5];
    let right = vec![-0.5, 0.5];
    let pcm = stereo_to_pcm16(&left, &right).unwrap();

    assert_eq!(pcm.len(), 8); // 2 frames * 2 channels * 2 bytes

    // Frame 0: left then right.
    assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 16384);
    assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), -16384);
    // Frame 1.
    assert_eq!(i16::from_le_bytes([pcm[4], pcm[5]]), -16384);
    assert_eq!(i16::from_le_bytes([pcm[6], pcm[7]]), 16384);
}

#[test]
fn test_mismatched_channel_lengths_fail() {
    let left = vec![0.5, 0.3, 0.1];
    let right = vec![-0.5, -0.3];

    match stereo_to_pcm16(&left, &right) {
        Err(SynthError::MismatchedChannelLength { left: l, right: r }) => {
            assert_eq!(l, 3);
            assert_eq!(r, 2);
        }
        other => panic!("expected MismatchedChannelLength, got {other:?}"),
    }

    assert!(encode_stereo(&left, &right, 44100).is_err());
}

// =========================================================================
// Header correctness tests
// =========================================================================

#[test]
fn test_wav_header_layout() {
    let wav = encode_stereo(&[0.5; 50], &[-0.5; 50], 48000).unwrap();

    assert_eq!(&wav[0..4], b"RIFF");
    let file_size = u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]);
    assert_eq!(file_size, wav.len() as u32 - 8);
    assert_eq!(&wav[8..12], b"WAVE");

    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(u32::from_le_bytes([wav[16], wav[17], wav[18], wav[19]]), 16);
    assert_eq!(u16::from_le_bytes([wav[20], wav[21]]), 1); // PCM tag
    assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 2); // channels
    assert_eq!(
        u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]),
        48000
    );
    assert_eq!(
        u32::from_le_bytes([wav[28], wav[29], wav[30], wav[31]]),
        192000 // byte rate: 48000 * 2 channels * 2 bytes
    );
    assert_eq!(u16::from_le_bytes([wav[32], wav[33]]), 4); // block align
    assert_eq!(u16::from_le_bytes([wav[34], wav[35]]), 16); // bits per sample

    assert_eq!(&wav[36..40], b"data");
    let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
    assert_eq!(data_size, 200); // 50 frames * 2 channels * 2 bytes
    assert_eq!(wav.len(), 44 + 200);
}

#[test]
fn test_empty_buffers_produce_header_only() {
    let wav = encode_stereo(&[], &[], 44100).unwrap();
    assert_eq!(wav.len(), 44);
    let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
    assert_eq!(data_size, 0);
}

#[test]
fn test_write_wav_to_writer() {
    let format = WavFormat::mono(44100);
    let pcm = samples_to_pcm16(&[0.5, -0.5]);

    let mut buffer = Vec::new();
    write_wav(&mut buffer, &format, &pcm).expect("should write successfully");

    assert_eq!(&buffer[0..4], b"RIFF");
    assert_eq!(buffer.len(), 44 + 4);
}

// =========================================================================
// Determinism and WavResult tests
// =========================================================================

#[test]
fn test_encoding_is_deterministic() {
    let left: Vec<f64> = (0..500).map(|i| (i as f64 * 0.01).sin()).collect();
    let right = left.clone();

    let wav1 = encode_stereo(&left, &right, 44100).unwrap();
    let wav2 = encode_stereo(&left, &right, 44100).unwrap();
    assert_eq!(wav1, wav2);
}

#[test]
fn test_wav_result_fields() {
    let left = vec![0.5, -0.5, 0.3];
    let right = vec![-0.5, 0.5, -0.3];
    let result = WavResult::from_stereo(&left, &right, 48000).unwrap();

    assert_eq!(result.channels, 2);
    assert_eq!(result.sample_rate, 48000);
    assert_eq!(result.num_frames, 3);
    assert_eq!(result.pcm_hash.len(), 64); // BLAKE3 hex
    assert!(result.pcm_hash.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(result.wav_data.len(), 44 + 12);
}

#[test]
fn test_wav_result_duration() {
    let samples = vec![0.0; 22050]; // 0.5 s at 44.1 kHz
    let result = WavResult::from_stereo(&samples, &samples, 44100).unwrap();
    assert!((result.duration_seconds() - 0.5).abs() < 1e-9);
}

#[test]
fn test_pcm_hash_tracks_content() {
    let a = WavResult::from_stereo(&[0.5, 0.3], &[0.5, 0.3], 44100).unwrap();
    let b = WavResult::from_stereo(&[0.5, 0.31], &[0.5, 0.31], 44100).unwrap();
    assert_ne!(a.pcm_hash, b.pcm_hash);
}
