//! Peak limiter with fixed headroom.

/// Peak ceiling: 20% headroom below full scale.
pub const LIMIT_CEILING: f64 = 0.8;

/// Limits one sample to the ±0.8 ceiling, preserving sign.
#[inline]
pub fn limit(sample: f64) -> f64 {
    sample.signum() * sample.abs().min(LIMIT_CEILING)
}

/// Limits a whole buffer in place.
pub fn limit_buffer(samples: &mut [f64]) {
    for sample in samples.iter_mut() {
        *sample = limit(*sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_samples_pass_through() {
        assert_eq!(limit(0.0), 0.0);
        assert_eq!(limit(0.5), 0.5);
        assert_eq!(limit(-0.79), -0.79);
        assert_eq!(limit(0.8), 0.8);
    }

    #[test]
    fn test_peaks_are_clamped_with_sign() {
        assert_eq!(limit(1.5), 0.8);
        assert_eq!(limit(-2.0), -0.8);
    }

    #[test]
    fn test_buffer_never_exceeds_ceiling() {
        let mut samples: Vec<f64> = (-40..=40).map(|i| i as f64 / 10.0).collect();
        limit_buffer(&mut samples);
        for s in samples {
            assert!(s.abs() <= LIMIT_CEILING);
        }
    }
}
