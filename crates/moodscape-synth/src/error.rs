//! Error types for the synthesis engine.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while generating a track.
#[derive(Debug, Error)]
pub enum SynthError {
    /// The host exposes no audio device context.
    #[error("no audio device context available in this environment")]
    EnvironmentUnsupported,

    /// The device context was already closed.
    #[error("audio device context is closed")]
    DeviceClosed,

    /// Channel buffers handed to the encoder have different lengths.
    #[error("mismatched channel lengths: left {left} samples, right {right} samples")]
    MismatchedChannelLength {
        /// Left channel length in samples.
        left: usize,
        /// Right channel length in samples.
        right: usize,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// The requested buffer would exceed the allocation cap.
    #[error("requested sample buffer of {requested_bytes} bytes exceeds the allocation cap")]
    ResourceExhausted {
        /// Bytes the sample buffer would have needed.
        requested_bytes: u64,
    },

    /// A track handle was dereferenced after cleanup.
    #[error("track handle '{id}' has been revoked")]
    HandleRevoked {
        /// Id of the revoked track.
        id: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SynthError {
    /// Stable error code for reports and machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            SynthError::EnvironmentUnsupported => "MOOD_001",
            SynthError::DeviceClosed => "MOOD_002",
            SynthError::MismatchedChannelLength { .. } => "MOOD_003",
            SynthError::InvalidDuration { .. } => "MOOD_004",
            SynthError::InvalidSampleRate { .. } => "MOOD_005",
            SynthError::ResourceExhausted { .. } => "MOOD_006",
            SynthError::HandleRevoked { .. } => "MOOD_007",
            SynthError::Io(_) => "MOOD_008",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SynthError::MismatchedChannelLength { left: 10, right: 7 };
        assert!(err.to_string().contains("left 10"));
        assert!(err.to_string().contains("right 7"));

        let err = SynthError::InvalidDuration { duration: -1.0 };
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(SynthError::EnvironmentUnsupported.code(), "MOOD_001");
        assert_eq!(
            SynthError::HandleRevoked { id: "x".into() }.code(),
            "MOOD_007"
        );
    }
}
