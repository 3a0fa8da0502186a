//! RIFF chunk framing.
//!
//! A minimal WAVE file is three regions, always in this order:
//!
//! ```text
//! offset  size  field
//! 0       4     "RIFF"
//! 4       4     36 + data size
//! 8       4     "WAVE"
//! 12      4     "fmt "
//! 16      4     fmt chunk size (16)
//! 20      16    format body
//! 36      4     "data"
//! 40      4     data size
//! 44      N     PCM payload
//! ```

use super::format::WavFormat;
use crate::error::{WavError, WavResult};

/// Little-endian RIFF container tag.
pub const RIFF_ID: [u8; 4] = *b"RIFF";
/// Big-endian RIFF container tag. Recognized when inspecting, never written.
pub const RIFX_ID: [u8; 4] = *b"RIFX";
/// WAVE form type.
pub const WAVE_ID: [u8; 4] = *b"WAVE";
/// Format chunk tag.
pub const FMT_ID: [u8; 4] = *b"fmt ";
/// Data chunk tag.
pub const DATA_ID: [u8; 4] = *b"data";

/// Size of the RIFF header region.
pub const RIFF_HEADER_LEN: usize = 12;
/// Size of the format chunk region (header plus 16-byte PCM body).
pub const FMT_CHUNK_LEN: usize = 24;
/// Size of the data chunk header.
pub const DATA_HEADER_LEN: usize = 8;
/// Total header size in front of the PCM payload.
pub const WAV_HEADER_LEN: usize = RIFF_HEADER_LEN + FMT_CHUNK_LEN + DATA_HEADER_LEN;

/// Bytes counted by the RIFF size field besides the PCM payload
/// ("WAVE" + format chunk + data chunk header).
const RIFF_SIZE_OVERHEAD: u32 = 36;

/// Builds the RIFF header for a payload of `data_size` bytes.
pub fn riff_header(data_size: u32) -> [u8; RIFF_HEADER_LEN] {
    let mut header = [0u8; RIFF_HEADER_LEN];
    header[0..4].copy_from_slice(&RIFF_ID);
    header[4..8].copy_from_slice(&(RIFF_SIZE_OVERHEAD + data_size).to_le_bytes());
    header[8..12].copy_from_slice(&WAVE_ID);
    header
}

/// Builds the `fmt ` chunk, echoing every descriptor field unchanged.
pub fn fmt_chunk(format: &WavFormat) -> [u8; FMT_CHUNK_LEN] {
    let mut chunk = [0u8; FMT_CHUNK_LEN];
    chunk[0..4].copy_from_slice(&FMT_ID);
    chunk[4..8].copy_from_slice(&format.fmt_chunk_size.to_le_bytes());
    chunk[8..10].copy_from_slice(&format.audio_format.to_le_bytes());
    chunk[10..12].copy_from_slice(&format.channels.to_le_bytes());
    chunk[12..16].copy_from_slice(&format.sample_rate.to_le_bytes());
    chunk[16..20].copy_from_slice(&format.byte_rate.to_le_bytes());
    chunk[20..22].copy_from_slice(&format.block_align.to_le_bytes());
    chunk[22..24].copy_from_slice(&format.bits_per_sample.to_le_bytes());
    chunk
}

/// Builds the `data` chunk header for a payload of `data_size` bytes.
pub fn data_chunk_header(data_size: u32) -> [u8; DATA_HEADER_LEN] {
    let mut header = [0u8; DATA_HEADER_LEN];
    header[0..4].copy_from_slice(&DATA_ID);
    header[4..8].copy_from_slice(&data_size.to_le_bytes());
    header
}

/// Computes the data chunk size from the frame count and format.
///
/// This is derived from the descriptor, not measured from the packed buffer.
/// Sizes that would overflow either 32-bit size field are rejected.
pub fn data_chunk_size(num_frames: usize, format: &WavFormat) -> WavResult<u32> {
    let bits = num_frames as u128 * u128::from(format.channels) * u128::from(format.bits_per_sample);
    let bytes = bits / 8;

    if bytes > u128::from(u32::MAX - RIFF_SIZE_OVERHEAD) {
        return Err(WavError::DataTooLarge {
            bytes: u64::try_from(bytes).unwrap_or(u64::MAX),
        });
    }

    Ok(bytes as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_riff_header_layout() {
        let header = riff_header(2);
        assert_eq!(&header[0..4], b"RIFF");
        assert_eq!(u32::from_le_bytes([header[4], header[5], header[6], header[7]]), 38);
        assert_eq!(&header[8..12], b"WAVE");
    }

    #[test]
    fn test_fmt_chunk_echoes_descriptor() {
        let mut format = WavFormat::pcm(2, 44100, 16);
        // Deliberately inconsistent: the chunk must mirror it anyway.
        format.byte_rate = 12345;

        let chunk = fmt_chunk(&format);
        assert_eq!(&chunk[0..4], b"fmt ");
        assert_eq!(u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]), 16);
        assert_eq!(u16::from_le_bytes([chunk[8], chunk[9]]), 1);
        assert_eq!(u16::from_le_bytes([chunk[10], chunk[11]]), 2);
        assert_eq!(
            u32::from_le_bytes([chunk[12], chunk[13], chunk[14], chunk[15]]),
            44100
        );
        assert_eq!(
            u32::from_le_bytes([chunk[16], chunk[17], chunk[18], chunk[19]]),
            12345
        );
        assert_eq!(u16::from_le_bytes([chunk[20], chunk[21]]), 4);
        assert_eq!(u16::from_le_bytes([chunk[22], chunk[23]]), 16);
    }

    #[test]
    fn test_data_chunk_header() {
        let header = data_chunk_header(400);
        assert_eq!(&header[0..4], b"data");
        assert_eq!(u32::from_le_bytes([header[4], header[5], header[6], header[7]]), 400);
    }

    #[test]
    fn test_data_chunk_size() {
        assert_eq!(data_chunk_size(0, &WavFormat::mono(44100)).unwrap(), 0);
        assert_eq!(data_chunk_size(100, &WavFormat::stereo(44100)).unwrap(), 400);
        assert_eq!(data_chunk_size(10, &WavFormat::pcm(3, 8000, 32)).unwrap(), 120);
    }

    #[test]
    fn test_data_chunk_size_overflow() {
        let format = WavFormat::pcm(2, 48000, 32);
        let err = data_chunk_size(usize::MAX / 4, &format).unwrap_err();
        assert!(matches!(err, WavError::DataTooLarge { .. }));
    }

    #[test]
    fn test_header_len() {
        assert_eq!(WAV_HEADER_LEN, 44);
    }
}
