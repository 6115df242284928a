//! Probe command implementation.
//!
//! Parses a WAV file's header and prints its format fields.

use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::wav_info::parse_wav_header;

/// Run the probe command.
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let bytes = std::fs::read(input).with_context(|| format!("failed to read {input}"))?;
    let info = parse_wav_header(&bytes).with_context(|| format!("{input} is not a valid WAV"))?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Probing:".cyan().bold(), input);
    println!("  format tag:      {}", info.format_tag);
    println!("  channels:        {}", info.channels);
    println!("  sample rate:     {} Hz", info.sample_rate);
    println!("  bits per sample: {}", info.bits_per_sample);
    println!("  block align:     {}", info.block_align);
    println!("  byte rate:       {}", info.byte_rate);
    println!("  data bytes:      {}", info.data_bytes);
    println!(
        "  duration:        {:.3} s ({} frames)",
        info.duration_seconds(),
        info.num_frames()
    );

    Ok(ExitCode::SUCCESS)
}
