//! Encode command implementation
//!
//! Reads normalized samples and writes them as a RIFF/WAVE file.

use anyhow::{Context, Result};
use colored::Colorize;
use log::{debug, info};
use pcmwav::{WavEncoder, WavFormat};
use serde::Serialize;
use std::fs;
use std::process::ExitCode;

use crate::input::{load_format, load_samples};

/// Format options for the encode command.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (16 or 32).
    pub bits: u16,
    /// Optional JSON format descriptor overriding the fields above.
    pub format_path: Option<String>,
}

impl EncodeOptions {
    /// Resolves the format descriptor to encode with.
    pub fn resolve_format(&self) -> Result<WavFormat> {
        match &self.format_path {
            Some(path) => load_format(path),
            None => Ok(WavFormat::pcm(self.channels, self.sample_rate, self.bits)),
        }
    }
}

/// JSON summary of an encode run.
#[derive(Debug, Serialize)]
struct EncodeOutput<'a> {
    output: &'a str,
    format: WavFormat,
    frames: usize,
    file_size: usize,
    duration_seconds: f64,
    pcm_hash: String,
}

/// Run the encode command
///
/// # Arguments
/// * `input` - Sample file path (`-` for stdin)
/// * `output` - Output WAV path
/// * `options` - Format options
/// * `json_output` - Whether to print a machine-readable summary
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    input: &str,
    output: &str,
    options: &EncodeOptions,
    json_output: bool,
) -> Result<ExitCode> {
    let format = options.resolve_format()?;
    let samples = load_samples(input)?;
    debug!("loaded {} samples from {}", samples.len(), input);

    if !json_output {
        println!(
            "{} {} ({} Hz, {} ch, {}-bit)",
            "Encoding:".cyan().bold(),
            input,
            format.sample_rate,
            format.channels,
            format.bits_per_sample
        );
    }

    let encoded = WavEncoder::new(format)
        .encode(&samples)
        .with_context(|| format!("Failed to encode WAV file: {}", output))?;
    fs::write(output, &encoded.wav_data)
        .with_context(|| format!("Failed to write WAV file: {}", output))?;

    let frames = encoded.num_frames;
    let file_size = encoded.wav_data.len();
    let duration_seconds = encoded.duration_seconds();
    let pcm_hash = encoded.pcm_hash;

    info!("wrote {} frames to {}", frames, output);

    if json_output {
        let summary = EncodeOutput {
            output,
            format,
            frames,
            file_size,
            duration_seconds,
            pcm_hash,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?
        );
    } else {
        println!(
            "{} {} ({} frames, {} bytes, {:.3}s)",
            "SUCCESS".green().bold(),
            output,
            frames,
            file_size,
            duration_seconds
        );
        println!("  {} {}", "PCM hash:".dimmed(), pcm_hash);
    }

    Ok(ExitCode::SUCCESS)
}
