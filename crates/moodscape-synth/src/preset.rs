//! Mood preset table and parameter resolution.
//!
//! Presets encode the audible behavior of each mood as data. Adding a mood
//! is a table edit in [`MoodPreset::for_mood`], not a new code path.

use serde::{Deserialize, Serialize};

/// Golden ratio, used by the Mystical harmonic stack. The full f64 value
/// matters: these ratios set audible interval relationships.
pub const PHI: f64 = 1.618033988749895;

/// Moods with a dedicated preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Fast pulsing texture with a bright harmonic stack.
    Energetic,
    /// Slow-breathing consonant texture. Fallback for unknown names.
    Serene,
    /// Minor-chord partials under a sparse amplitude gate.
    Melancholic,
    /// Golden-ratio partials with a near-silence swell.
    Mystical,
}

impl Mood {
    /// Returns the mood name as used in track titles.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Energetic => "Energetic",
            Mood::Serene => "Serene",
            Mood::Melancholic => "Melancholic",
            Mood::Mystical => "Mystical",
        }
    }

    /// Resolves a mood label. Total: any name outside the table maps to
    /// [`Mood::Serene`]. Matching is case-insensitive.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "energetic" => Mood::Energetic,
            "serene" => Mood::Serene,
            "melancholic" => Mood::Melancholic,
            "mystical" => Mood::Mystical,
            _ => Mood::Serene,
        }
    }

    /// Returns all moods in the preset table.
    pub fn all() -> &'static [Mood] {
        &[
            Mood::Energetic,
            Mood::Serene,
            Mood::Melancholic,
            Mood::Mystical,
        ]
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rhythm policy applied per sample by the modulation stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RhythmPolicy {
    /// Tempo-locked amplitude pulse, ±20% around a 0.8 baseline.
    Driving,
    /// 0.05 Hz wave, ±30% around a 0.7 baseline.
    Flowing,
    /// Per-sample random gate: 1.0 with probability 0.3, else 0.1.
    Sparse,
    /// 0.03 Hz wave swinging the full 0..1 range.
    Ethereal,
}

/// Filter hint carried by a preset.
///
/// Informational only: no filter stage consumes it in the current pipeline.
/// It is kept in the data model so downstream consumers and a future filter
/// stage agree on the intended spectral shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterHint {
    /// Attenuate below the base frequency.
    Highpass,
    /// Attenuate above the harmonic stack.
    Lowpass,
    /// Keep a band around the harmonic stack.
    Bandpass,
    /// No spectral shaping intended.
    None,
}

/// Synthesis parameters for one mood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodPreset {
    /// Tempo in beats per minute. Drives the Driving rhythm pulse rate.
    pub tempo_bpm: f64,
    /// Fundamental frequency in Hz.
    pub base_freq: f64,
    /// Harmonic frequency multipliers, each >= 1.0. Never empty.
    pub harmonics: Vec<f64>,
    /// Rhythm policy for the modulation stage.
    pub rhythm: RhythmPolicy,
    /// Intended spectral shaping (informational, see [`FilterHint`]).
    pub filter_hint: FilterHint,
}

impl MoodPreset {
    /// Returns the preset for a mood.
    pub fn for_mood(mood: Mood) -> Self {
        match mood {
            Mood::Energetic => Self {
                tempo_bpm: 120.0,
                base_freq: 440.0,
                harmonics: vec![1.0, 2.0, 3.0],
                rhythm: RhythmPolicy::Driving,
                filter_hint: FilterHint::Highpass,
            },
            Mood::Serene => Self {
                tempo_bpm: 60.0,
                base_freq: 220.0,
                harmonics: vec![1.0, 1.5, 2.0],
                rhythm: RhythmPolicy::Flowing,
                filter_hint: FilterHint::Lowpass,
            },
            Mood::Melancholic => Self {
                tempo_bpm: 75.0,
                // Minor triad above G3: minor third is 2^(3/12).
                base_freq: 196.0,
                harmonics: vec![1.0, 1.189207115002721, 1.5],
                rhythm: RhythmPolicy::Sparse,
                filter_hint: FilterHint::Lowpass,
            },
            Mood::Mystical => Self {
                tempo_bpm: 90.0,
                base_freq: 174.0,
                harmonics: vec![1.0, PHI, PHI * PHI],
                rhythm: RhythmPolicy::Ethereal,
                filter_hint: FilterHint::Bandpass,
            },
        }
    }
}

/// Resolves a mood label to its preset.
///
/// Total function: unknown names resolve to the Serene preset, never an
/// error. The caller keeps the original label for display purposes.
pub fn resolve(mood_name: &str) -> MoodPreset {
    MoodPreset::for_mood(Mood::parse(mood_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_preset_is_well_formed() {
        for &mood in Mood::all() {
            let preset = MoodPreset::for_mood(mood);
            assert!(preset.tempo_bpm > 0.0, "{mood}: tempo must be positive");
            assert!(preset.base_freq > 0.0, "{mood}: base freq must be positive");
            assert!(!preset.harmonics.is_empty(), "{mood}: harmonics empty");
            for &h in &preset.harmonics {
                assert!(h >= 1.0, "{mood}: multiplier {h} below fundamental");
            }
        }
    }

    #[test]
    fn test_unknown_mood_falls_back_to_serene() {
        let fallback = resolve("totally-unknown-mood");
        assert_eq!(fallback, MoodPreset::for_mood(Mood::Serene));
        assert_eq!(resolve(""), MoodPreset::for_mood(Mood::Serene));
    }

    #[test]
    fn test_resolution_is_case_insensitive() {
        assert_eq!(resolve("ENERGETIC"), MoodPreset::for_mood(Mood::Energetic));
        assert_eq!(resolve("mystical"), MoodPreset::for_mood(Mood::Mystical));
    }

    #[test]
    fn test_mystical_uses_golden_ratio_partials() {
        let preset = MoodPreset::for_mood(Mood::Mystical);
        assert_eq!(preset.harmonics[1], PHI);
        assert_eq!(preset.harmonics[2], PHI * PHI);
    }

    #[test]
    fn test_each_rhythm_policy_is_exercised() {
        let policies: Vec<RhythmPolicy> = Mood::all()
            .iter()
            .map(|&m| MoodPreset::for_mood(m).rhythm)
            .collect();
        assert!(policies.contains(&RhythmPolicy::Driving));
        assert!(policies.contains(&RhythmPolicy::Flowing));
        assert!(policies.contains(&RhythmPolicy::Sparse));
        assert!(policies.contains(&RhythmPolicy::Ethereal));
    }

    #[test]
    fn test_preset_serde_round_trip() {
        let preset = MoodPreset::for_mood(Mood::Mystical);
        let json = serde_json::to_string(&preset).unwrap();
        let back: MoodPreset = serde_json::from_str(&json).unwrap();
        assert_eq!(preset, back);
    }
}
