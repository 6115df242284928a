//! Moodscape CLI - render mood-conditioned ambient tracks to WAV files.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

use moodscape_cli::commands;

/// Moodscape - Deterministic mood-conditioned music synthesis
#[derive(Parser)]
#[command(name = "moodscape")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a mood track and write the WAV container to a file
    Render {
        /// Mood label (unknown names fall back to Serene)
        #[arg(short, long)]
        mood: String,

        /// Track duration in seconds
        #[arg(short, long, default_value_t = 120.0)]
        duration: f64,

        /// Output sample rate in Hz
        #[arg(long, default_value_t = 44100)]
        sample_rate: u32,

        /// Base seed for the render's random streams
        #[arg(short, long, default_value_t = 0)]
        seed: u32,

        /// Output file path
        #[arg(short, long)]
        output: String,

        /// Output a machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the mood preset table
    Moods {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Parse a WAV file header and print its format fields
    Probe {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            mood,
            duration,
            sample_rate,
            seed,
            output,
            json,
        } => commands::render::run(&mood, duration, sample_rate, seed, &output, json),
        Commands::Moods { json } => commands::moods::run(json),
        Commands::Probe { input, json } => commands::probe::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
