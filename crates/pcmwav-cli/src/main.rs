//! pcmwav CLI - Command-line interface for the RIFF/WAVE encoder
//!
//! This binary encodes normalized sample files into WAV files and inspects
//! the headers of existing ones.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use pcmwav::BitDepth;
use pcmwav_cli::commands;
use pcmwav_cli::commands::encode::EncodeOptions;

/// pcmwav - Encode normalized samples as RIFF/WAVE PCM
#[derive(Parser)]
#[command(name = "pcmwav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a sample file into a WAV file
    Encode {
        /// Sample file (text or .json array); `-` reads stdin
        #[arg(short, long)]
        input: String,

        /// Output WAV file path
        #[arg(short, long)]
        output: String,

        /// Number of interleaved channels
        #[arg(short, long, default_value_t = 1)]
        channels: u16,

        /// Sample rate in Hz
        #[arg(short = 'r', long, default_value_t = 44100)]
        sample_rate: u32,

        /// Bits per sample
        #[arg(short, long, default_value_t = 16, value_parser = parse_bits)]
        bits: u16,

        /// JSON format descriptor; overrides --channels, --sample-rate and --bits
        #[arg(short, long)]
        format: Option<String>,

        /// Output a machine-readable JSON summary (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the header of a WAV file
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

/// Accepts only the bit depths the encoder can write.
fn parse_bits(value: &str) -> Result<u16, String> {
    let bits: u16 = value.parse().map_err(|_| format!("not a number: {}", value))?;
    BitDepth::try_from(bits)
        .map(|depth| depth.bits())
        .map_err(|e| e.to_string())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            channels,
            sample_rate,
            bits,
            format,
            json,
        } => {
            let options = EncodeOptions {
                channels,
                sample_rate,
                bits,
                format_path: format,
            };
            commands::encode::run(&input, &output, &options, json)
        }
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
