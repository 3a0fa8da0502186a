//! Sample rescaling and PCM packing.

use super::depth::BitDepth;

/// Rescales one normalized sample to the integer range of `depth`.
///
/// The sample is multiplied by the largest positive value of the width and
/// truncated toward zero. Nothing is clamped: samples outside [-1.0, 1.0]
/// produce values outside the width's range, which wrap when packed. NaN
/// rescales to 0.
pub fn rescale_sample(sample: f64, depth: BitDepth) -> i64 {
    (sample * depth.max_value() as f64) as i64
}

/// Appends one rescaled value to `pcm` as a little-endian integer of `depth`.
///
/// Only the low `depth.bits()` bits are kept, so the two's complement bit
/// pattern of in-range values is preserved.
pub fn pack_sample(pcm: &mut Vec<u8>, value: i64, depth: BitDepth) {
    match depth {
        BitDepth::Sixteen => pcm.extend_from_slice(&(value as i16).to_le_bytes()),
        BitDepth::ThirtyTwo => pcm.extend_from_slice(&(value as i32).to_le_bytes()),
    }
}

/// Converts normalized `f64` samples to little-endian integer PCM bytes.
///
/// Samples are packed in input order with no padding; the result is exactly
/// `samples.len() * depth.bytes()` bytes long.
///
/// # Arguments
/// * `samples` - Interleaved audio samples, nominally in [-1.0, 1.0]
/// * `depth` - Target sample width
///
/// # Returns
/// Raw PCM payload for the `data` chunk
pub fn samples_to_pcm(samples: &[f64], depth: BitDepth) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * depth.bytes());

    for &sample in samples {
        pack_sample(&mut pcm, rescale_sample(sample, depth), depth);
    }

    pcm
}

/// Converts normalized samples to 16-bit PCM bytes.
///
/// Shorthand for [`samples_to_pcm`] with [`BitDepth::Sixteen`].
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    samples_to_pcm(samples, BitDepth::Sixteen)
}

/// Converts normalized samples to 32-bit PCM bytes.
///
/// Shorthand for [`samples_to_pcm`] with [`BitDepth::ThirtyTwo`].
pub fn samples_to_pcm32(samples: &[f64]) -> Vec<u8> {
    samples_to_pcm(samples, BitDepth::ThirtyTwo)
}

/// Interleaves per-channel sample slices into a single frame-ordered buffer.
///
/// The output length is the shortest channel length times the channel count;
/// trailing samples of longer channels are dropped.
pub fn interleave(channels: &[&[f64]]) -> Vec<f64> {
    let frames = channels.iter().map(|c| c.len()).min().unwrap_or(0);
    let mut out = Vec::with_capacity(frames * channels.len());

    for i in 0..frames {
        for channel in channels {
            out.push(channel[i]);
        }
    }

    out
}
