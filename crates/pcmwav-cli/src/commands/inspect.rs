//! Inspect command implementation
//!
//! Prints the header of an existing WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use pcmwav::wav::compute_pcm_hash;
use pcmwav::{inspect_wav, WavInfo};
use serde::Serialize;
use std::fs;
use std::process::ExitCode;

/// JSON output of the inspect command.
#[derive(Debug, Serialize)]
struct InspectOutput<'a> {
    input: &'a str,
    #[serde(flatten)]
    info: &'a WavInfo,
    frames: usize,
    duration_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pcm_hash: Option<String>,
}

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to print machine-readable JSON
///
/// # Returns
/// Exit code: 0 if the header parses and the payload is complete, 1 otherwise
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let data = fs::read(input).with_context(|| format!("Failed to read WAV file: {}", input))?;
    let info = inspect_wav(&data).with_context(|| format!("Failed to parse WAV file: {}", input))?;
    let pcm_hash = compute_pcm_hash(&data);

    if json_output {
        let output = InspectOutput {
            input,
            info: &info,
            frames: info.num_frames(),
            duration_seconds: info.duration_seconds(),
            pcm_hash,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize output")?
        );
    } else {
        print_human(input, &info, pcm_hash.as_deref());
    }

    if info.is_complete() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn print_human(input: &str, info: &WavInfo, pcm_hash: Option<&str>) {
    println!("{} {}", "Inspecting:".cyan().bold(), input);
    println!("  audio format:    {}", info.audio_format);
    println!("  channels:        {}", info.channels);
    println!("  sample rate:     {} Hz", info.sample_rate);
    println!("  bits per sample: {}", info.bits_per_sample);
    println!("  byte rate:       {}", info.byte_rate);
    println!("  block align:     {}", info.block_align);
    println!("  riff size:       {}", info.riff_size);
    println!("  data size:       {}", info.data_size);
    println!(
        "  frames:          {} ({:.3}s)",
        info.num_frames(),
        info.duration_seconds()
    );
    if let Some(hash) = pcm_hash {
        println!("  pcm hash:        {}", hash);
    }

    if !info.is_complete() {
        println!(
            "{} data chunk declares {} bytes but {} follow",
            "WARNING".yellow().bold(),
            info.data_size,
            info.data_available
        );
    }
}
