//! Reading back the header of an encoded WAV file.

use serde::Serialize;

use super::chunk::{DATA_ID, FMT_ID, RIFF_ID, RIFX_ID, WAVE_ID, WAV_HEADER_LEN};
use crate::error::{WavError, WavResult};

/// Header information extracted from a WAV file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WavInfo {
    /// Value of the RIFF size field.
    pub riff_size: u32,
    /// Audio format code (1 = PCM).
    pub audio_format: u16,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second, as stored.
    pub byte_rate: u32,
    /// Bytes per frame, as stored.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Value of the data chunk size field.
    pub data_size: u32,
    /// Offset of the first PCM byte.
    pub data_offset: usize,
    /// PCM bytes present after the data chunk header, capped at `data_size`.
    pub data_available: usize,
}

impl WavInfo {
    /// Number of complete frames in the data chunk.
    pub fn num_frames(&self) -> usize {
        if self.block_align == 0 {
            return 0;
        }
        self.data_size as usize / usize::from(self.block_align)
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames() as f64 / self.sample_rate as f64
    }

    /// Whether the data size field matches the trailing payload exactly.
    pub fn is_complete(&self) -> bool {
        self.data_available == self.data_size as usize
    }
}

fn read_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

/// Parses the RIFF/WAVE structure of `data`.
///
/// Chunks other than `fmt ` and `data` are skipped (word-aligned). A
/// big-endian `RIFX` container is reported as
/// [`WavError::BigEndianUnsupported`].
pub fn inspect_wav(data: &[u8]) -> WavResult<WavInfo> {
    if data.len() < WAV_HEADER_LEN {
        return Err(WavError::malformed(
            0,
            format!(
                "file too short: {} bytes (minimum {})",
                data.len(),
                WAV_HEADER_LEN
            ),
        ));
    }

    if data[0..4] == RIFX_ID {
        return Err(WavError::BigEndianUnsupported);
    }
    if data[0..4] != RIFF_ID {
        return Err(WavError::malformed(0, "missing RIFF tag"));
    }
    if data[8..12] != WAVE_ID {
        return Err(WavError::malformed(8, "missing WAVE form type"));
    }

    let riff_size = read_u32(data, 4);
    let mut fmt: Option<[u8; 16]> = None;
    let mut offset = 12;

    while offset + 8 <= data.len() {
        let chunk_id = &data[offset..offset + 4];
        let chunk_size = read_u32(data, offset + 4) as usize;
        let body = offset + 8;

        if chunk_id == FMT_ID {
            if chunk_size < 16 {
                return Err(WavError::malformed(
                    offset,
                    format!("fmt chunk too small: {} bytes", chunk_size),
                ));
            }
            if body + 16 > data.len() {
                return Err(WavError::malformed(offset, "truncated fmt chunk"));
            }
            let mut raw = [0u8; 16];
            raw.copy_from_slice(&data[body..body + 16]);
            fmt = Some(raw);
        } else if chunk_id == DATA_ID {
            let fmt = fmt.ok_or_else(|| {
                WavError::malformed(offset, "data chunk found before fmt chunk")
            })?;

            return Ok(WavInfo {
                riff_size,
                audio_format: read_u16(&fmt, 0),
                channels: read_u16(&fmt, 2),
                sample_rate: read_u32(&fmt, 4),
                byte_rate: read_u32(&fmt, 8),
                block_align: read_u16(&fmt, 12),
                bits_per_sample: read_u16(&fmt, 14),
                data_size: chunk_size as u32,
                data_offset: body,
                data_available: (data.len() - body).min(chunk_size),
            });
        }

        offset = body + ((chunk_size + 1) & !1);
    }

    if fmt.is_none() {
        return Err(WavError::malformed(12, "missing fmt chunk"));
    }
    Err(WavError::malformed(12, "missing data chunk"))
}

/// Extracts the PCM payload of a WAV file.
///
/// Returns `None` if the file cannot be parsed or the payload is truncated.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    let info = inspect_wav(wav_data).ok()?;
    let end = info.data_offset.checked_add(info.data_size as usize)?;
    wav_data.get(info.data_offset..end)
}

/// Computes the BLAKE3 hash of a WAV file's PCM payload.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_wav() -> Vec<u8> {
        let mut wav = Vec::new();
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&40u32.to_le_bytes());
        wav.extend_from_slice(b"WAVE");
        wav.extend_from_slice(b"fmt ");
        wav.extend_from_slice(&16u32.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes());
        wav.extend_from_slice(&8000u32.to_le_bytes());
        wav.extend_from_slice(&16000u32.to_le_bytes());
        wav.extend_from_slice(&2u16.to_le_bytes());
        wav.extend_from_slice(&16u16.to_le_bytes());
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&4u32.to_le_bytes());
        wav.extend_from_slice(&[1, 0, 2, 0]);
        wav
    }

    #[test]
    fn test_inspect_minimal() {
        let info = inspect_wav(&minimal_wav()).unwrap();
        assert_eq!(info.riff_size, 40);
        assert_eq!(info.channels, 1);
        assert_eq!(info.sample_rate, 8000);
        assert_eq!(info.data_size, 4);
        assert_eq!(info.data_offset, 44);
        assert_eq!(info.num_frames(), 2);
        assert!(info.is_complete());
    }

    #[test]
    fn test_inspect_rifx() {
        let mut wav = minimal_wav();
        wav[0..4].copy_from_slice(b"RIFX");
        assert!(matches!(
            inspect_wav(&wav).unwrap_err(),
            WavError::BigEndianUnsupported
        ));
    }

    #[test]
    fn test_inspect_too_short() {
        let err = inspect_wav(&[0u8; 10]).unwrap_err();
        assert!(err.to_string().contains("too short"));
    }

    #[test]
    fn test_inspect_bad_wave_tag() {
        let mut wav = minimal_wav();
        wav[8..12].copy_from_slice(b"AVI ");
        assert!(matches!(
            inspect_wav(&wav).unwrap_err(),
            WavError::Malformed { offset: 8, .. }
        ));
    }

    #[test]
    fn test_inspect_skips_unknown_odd_chunk() {
        let base = minimal_wav();
        let mut wav = base[..36].to_vec();
        wav.extend_from_slice(b"junk");
        wav.extend_from_slice(&3u32.to_le_bytes());
        wav.extend_from_slice(&[9, 9, 9, 0]);
        wav.extend_from_slice(&base[36..]);

        let info = inspect_wav(&wav).unwrap();
        assert_eq!(info.data_offset, 56);
        assert_eq!(extract_pcm_data(&wav).unwrap(), &[1, 0, 2, 0]);
    }

    #[test]
    fn test_inspect_trailing_chunk_after_data() {
        let format = crate::WavFormat::mono(8000);
        let mut wav = crate::wav::write_wav_to_vec(&[0.5, -0.5], &format).unwrap();
        wav.extend_from_slice(b"LIST");
        wav.extend_from_slice(&4u32.to_le_bytes());
        wav.extend_from_slice(b"INFO");

        let info = inspect_wav(&wav).unwrap();
        assert_eq!(info.data_size, 4);
        assert_eq!(info.data_available, 4);
        assert!(info.is_complete());
        assert_eq!(extract_pcm_data(&wav).unwrap().len(), 4);
    }

    #[test]
    fn test_extract_truncated_payload() {
        let mut wav = minimal_wav();
        wav.truncate(46);
        let info = inspect_wav(&wav).unwrap();
        assert!(!info.is_complete());
        assert!(extract_pcm_data(&wav).is_none());
    }
}
