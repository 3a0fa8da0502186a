//! WAV file format parameters.

use serde::{Deserialize, Serialize};

use super::depth::BitDepth;
use crate::error::WavResult;

/// Audio format tag for integer PCM.
pub const WAVE_FORMAT_PCM: u16 = 1;

/// Size of the PCM `fmt ` chunk body.
pub const PCM_FMT_CHUNK_SIZE: u32 = 16;

/// WAV format descriptor.
///
/// Every field is copied verbatim into the `fmt ` chunk. The encoder does not
/// recompute `byte_rate` or `block_align`; use [`WavFormat::pcm`] to derive
/// them consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WavFormat {
    /// Audio format tag (1 = integer PCM).
    #[serde(default = "default_audio_format")]
    pub audio_format: u16,
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (16 or 32).
    pub bits_per_sample: u16,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per frame across all channels.
    pub block_align: u16,
    /// Size of the `fmt ` chunk body.
    #[serde(default = "default_fmt_chunk_size")]
    pub fmt_chunk_size: u32,
}

fn default_audio_format() -> u16 {
    WAVE_FORMAT_PCM
}

fn default_fmt_chunk_size() -> u32 {
    PCM_FMT_CHUNK_SIZE
}

impl WavFormat {
    /// Creates an integer PCM format with derived byte rate and block align.
    pub fn pcm(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Self {
        let block_align = channels.wrapping_mul(bits_per_sample / 8);
        Self {
            audio_format: WAVE_FORMAT_PCM,
            channels,
            sample_rate,
            bits_per_sample,
            byte_rate: sample_rate.wrapping_mul(u32::from(block_align)),
            block_align,
            fmt_chunk_size: PCM_FMT_CHUNK_SIZE,
        }
    }

    /// Creates a 16-bit mono format.
    pub fn mono(sample_rate: u32) -> Self {
        Self::pcm(1, sample_rate, 16)
    }

    /// Creates a 16-bit stereo format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self::pcm(2, sample_rate, 16)
    }

    /// Resolves the bit depth, rejecting widths the packer cannot produce.
    pub fn bit_depth(&self) -> WavResult<BitDepth> {
        BitDepth::try_from(self.bits_per_sample)
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Whether `byte_rate` and `block_align` agree with the other fields.
    pub fn is_consistent(&self) -> bool {
        let block_align = u64::from(self.channels) * u64::from(self.bytes_per_sample());
        let byte_rate = u64::from(self.sample_rate) * block_align;
        u64::from(self.block_align) == block_align && u64::from(self.byte_rate) == byte_rate
    }
}
