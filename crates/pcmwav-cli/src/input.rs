//! Loading sample values and format descriptors from disk.

use anyhow::{bail, Context, Result};
use pcmwav::WavFormat;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Reads the raw input text, treating `-` as stdin.
fn read_source(path: &str) -> Result<String> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read samples from stdin")?;
        return Ok(content);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read sample file: {}", path))
}

/// Loads samples from a file (or stdin when `path` is `-`).
///
/// Files ending in `.json` must hold a JSON array of numbers. Anything else
/// is parsed as plain text: numbers separated by whitespace or commas, with
/// `#` starting a comment that runs to the end of the line.
pub fn load_samples(path: &str) -> Result<Vec<f64>> {
    let content = read_source(path)?;

    let is_json = Path::new(path)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON sample array: {}", path))
    } else {
        parse_samples(&content)
    }
}

/// Parses whitespace/comma separated sample text.
pub fn parse_samples(content: &str) -> Result<Vec<f64>> {
    let mut samples = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let line = match line.find('#') {
            Some(idx) => &line[..idx],
            None => line,
        };

        for token in line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let value: f64 = token
                .parse()
                .with_context(|| format!("Invalid sample '{}' on line {}", token, line_no + 1))?;
            if !value.is_finite() {
                bail!("Non-finite sample '{}' on line {}", token, line_no + 1);
            }
            samples.push(value);
        }
    }

    Ok(samples)
}

/// Loads a full format descriptor from a JSON file.
pub fn load_format(path: &str) -> Result<WavFormat> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read format file: {}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse format descriptor: {}", path))
}
