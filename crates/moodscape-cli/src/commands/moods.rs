//! Moods command implementation.
//!
//! Lists the preset table with the parameters each mood resolves to.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use moodscape_synth::preset::{Mood, MoodPreset};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct MoodEntry {
    name: &'static str,
    #[serde(flatten)]
    preset: MoodPreset,
}

/// Run the moods command.
pub fn run(json_output: bool) -> Result<ExitCode> {
    let entries: Vec<MoodEntry> = Mood::all()
        .iter()
        .map(|&mood| MoodEntry {
            name: mood.as_str(),
            preset: MoodPreset::for_mood(mood),
        })
        .collect();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Available moods:".cyan().bold());
    for entry in &entries {
        let harmonics: Vec<String> = entry
            .preset
            .harmonics
            .iter()
            .map(|h| format!("{h:.3}"))
            .collect();
        println!(
            "  {:12} {:3.0} BPM, {:6.1} Hz, harmonics [{}], {:?} rhythm, {:?} filter hint",
            entry.name.green(),
            entry.preset.tempo_bpm,
            entry.preset.base_freq,
            harmonics.join(", "),
            entry.preset.rhythm,
            entry.preset.filter_hint,
        );
    }
    println!(
        "{}",
        "Unknown mood names fall back to the Serene preset.".dimmed()
    );

    Ok(ExitCode::SUCCESS)
}
