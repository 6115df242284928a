//! Render command implementation.
//!
//! Renders one mood track and writes the WAV container to disk.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use moodscape_synth::render::{render, RenderConfig};
use moodscape_synth::WAV_MIME;
use serde::Serialize;

/// Machine-readable render report for `--json`.
#[derive(Debug, Serialize)]
struct RenderReport<'a> {
    mood: &'a str,
    output: &'a str,
    media_type: &'static str,
    duration_seconds: f64,
    sample_rate: u32,
    seed: u32,
    bytes: usize,
    pcm_hash: &'a str,
    elapsed_ms: u128,
}

/// Run the render command.
///
/// # Returns
/// Exit code: 0 on success, 1 on failure.
pub fn run(
    mood: &str,
    duration: f64,
    sample_rate: u32,
    seed: u32,
    output: &str,
    json_output: bool,
) -> Result<ExitCode> {
    let start = Instant::now();

    let config = RenderConfig::new(mood)
        .with_duration(duration)
        .with_sample_rate(sample_rate)
        .with_seed(seed);

    if !json_output {
        println!(
            "{} {} ({}s at {} Hz, seed {})",
            "Rendering:".cyan().bold(),
            mood,
            duration,
            sample_rate,
            seed
        );
    }

    let result = render(&config).with_context(|| format!("failed to render mood '{mood}'"))?;

    std::fs::write(Path::new(output), &result.wav.wav_data)
        .with_context(|| format!("failed to write {output}"))?;

    let elapsed_ms = start.elapsed().as_millis();

    if json_output {
        let report = RenderReport {
            mood,
            output,
            media_type: WAV_MIME,
            duration_seconds: duration,
            sample_rate,
            seed,
            bytes: result.wav.wav_data.len(),
            pcm_hash: &result.wav.pcm_hash,
            elapsed_ms,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "  {} {} ({} bytes, {} ms)",
            "✓".green(),
            output,
            result.wav.wav_data.len(),
            elapsed_ms
        );
        println!("  {} {}", "PCM hash:".dimmed(), result.wav.pcm_hash);
    }

    Ok(ExitCode::SUCCESS)
}
