//! Encoded WAV result type.

use super::format::WavFormat;
use super::writer::PreparedWav;
use crate::error::WavResult;

/// A fully encoded WAV file.
#[derive(Debug, Clone)]
pub struct EncodedWav {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Format the file was encoded with.
    pub format: WavFormat,
    /// Number of frames (samples per channel).
    pub num_frames: usize,
}

impl EncodedWav {
    /// Encodes interleaved samples.
    pub fn encode(samples: &[f64], format: &WavFormat) -> WavResult<Self> {
        let prepared = PreparedWav::build(samples, format)?;
        let pcm_hash = blake3::hash(&prepared.pcm).to_hex().to_string();
        let num_frames = prepared.num_frames;

        Ok(Self {
            wav_data: prepared.into_bytes(),
            pcm_hash,
            format: *format,
            num_frames,
        })
    }

    /// Returns the PCM payload following the 44-byte header.
    pub fn pcm_data(&self) -> &[u8] {
        &self.wav_data[super::chunk::WAV_HEADER_LEN..]
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.format.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames as f64 / self.format.sample_rate as f64
    }
}
