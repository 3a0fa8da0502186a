//! WAV encoder builder.

use std::io::Write;

use super::format::WavFormat;
use super::pcm::{interleave, samples_to_pcm};
use super::result::EncodedWav;
use super::writer::write_wav;
use crate::error::WavResult;

/// Encoder bound to one format descriptor.
#[derive(Debug, Clone, Copy)]
pub struct WavEncoder {
    format: WavFormat,
}

impl WavEncoder {
    /// Creates an encoder for an arbitrary format.
    pub fn new(format: WavFormat) -> Self {
        Self { format }
    }

    /// Creates a 16-bit mono encoder.
    pub fn mono(sample_rate: u32) -> Self {
        Self::new(WavFormat::mono(sample_rate))
    }

    /// Creates a 16-bit stereo encoder.
    pub fn stereo(sample_rate: u32) -> Self {
        Self::new(WavFormat::stereo(sample_rate))
    }

    /// Switches the encoder to another bit depth, re-deriving the format.
    pub fn with_bits(self, bits_per_sample: u16) -> Self {
        Self::new(WavFormat::pcm(
            self.format.channels,
            self.format.sample_rate,
            bits_per_sample,
        ))
    }

    /// The format this encoder writes.
    pub fn format(&self) -> &WavFormat {
        &self.format
    }

    /// Encodes interleaved samples to an in-memory file.
    pub fn encode(&self, samples: &[f64]) -> WavResult<EncodedWav> {
        EncodedWav::encode(samples, &self.format)
    }

    /// Interleaves separate left/right channels and encodes them.
    pub fn encode_stereo(&self, left: &[f64], right: &[f64]) -> WavResult<EncodedWav> {
        self.encode(&interleave(&[left, right]))
    }

    /// Encodes interleaved samples straight into a writer.
    pub fn write_to<W: Write>(&self, writer: &mut W, samples: &[f64]) -> WavResult<()> {
        write_wav(writer, samples, &self.format)
    }

    /// Returns the BLAKE3 hash of the PCM payload (not the full file).
    pub fn pcm_hash(&self, samples: &[f64]) -> WavResult<String> {
        let pcm = samples_to_pcm(samples, self.format.bit_depth()?);
        Ok(blake3::hash(&pcm).to_hex().to_string())
    }
}
