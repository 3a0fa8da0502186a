//! Encode orchestration: validate, pack, frame and write.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{debug, warn};

use super::chunk::{data_chunk_header, data_chunk_size, fmt_chunk, riff_header, WAV_HEADER_LEN};
use super::format::WavFormat;
use super::pcm::samples_to_pcm;
use crate::error::{ChunkKind, WavError, WavResult};

/// Every region of a WAV file, built before anything is written.
#[derive(Debug)]
pub(crate) struct PreparedWav {
    pub(crate) riff: [u8; 12],
    pub(crate) fmt: [u8; 24],
    pub(crate) data_header: [u8; 8],
    pub(crate) pcm: Vec<u8>,
    pub(crate) num_frames: usize,
}

impl PreparedWav {
    /// Validates the input and builds all regions.
    ///
    /// All failures happen here, so a sink never sees a partial file because
    /// of bad input.
    pub(crate) fn build(samples: &[f64], format: &WavFormat) -> WavResult<Self> {
        let depth = format.bit_depth()?;
        if format.channels == 0 {
            return Err(WavError::NoChannels);
        }

        let channels = usize::from(format.channels);
        if samples.len() % channels != 0 {
            return Err(WavError::IncompleteFrame {
                samples: samples.len(),
                channels: format.channels,
            });
        }

        if !format.is_consistent() {
            warn!(
                "format descriptor is inconsistent (byte_rate={}, block_align={}); writing it unchanged",
                format.byte_rate, format.block_align
            );
        }

        let num_frames = samples.len() / channels;
        let data_size = data_chunk_size(num_frames, format)?;
        let pcm = samples_to_pcm(samples, depth);
        debug_assert_eq!(
            pcm.len(),
            data_size as usize,
            "packed PCM length disagrees with the data chunk size"
        );

        Ok(Self {
            riff: riff_header(data_size),
            fmt: fmt_chunk(format),
            data_header: data_chunk_header(data_size),
            pcm,
            num_frames,
        })
    }

    /// Total size of the encoded file in bytes.
    pub(crate) fn len(&self) -> usize {
        WAV_HEADER_LEN + self.pcm.len()
    }

    /// Writes the regions in order, stopping at the first failure.
    pub(crate) fn write_to<W: Write>(&self, writer: &mut W) -> WavResult<()> {
        debug!(
            "writing WAV: {} frames, {} payload bytes",
            self.num_frames,
            self.pcm.len()
        );

        writer
            .write_all(&self.riff)
            .map_err(|e| WavError::write(ChunkKind::Riff, e))?;
        writer
            .write_all(&self.fmt)
            .map_err(|e| WavError::write(ChunkKind::Fmt, e))?;
        writer
            .write_all(&self.data_header)
            .map_err(|e| WavError::write(ChunkKind::Data, e))?;
        writer
            .write_all(&self.pcm)
            .map_err(|e| WavError::write(ChunkKind::Data, e))?;
        writer
            .flush()
            .map_err(|e| WavError::write(ChunkKind::Flush, e))?;

        Ok(())
    }

    /// Concatenates the regions into one buffer.
    pub(crate) fn into_bytes(self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.len());
        buffer.extend_from_slice(&self.riff);
        buffer.extend_from_slice(&self.fmt);
        buffer.extend_from_slice(&self.data_header);
        buffer.extend_from_slice(&self.pcm);
        buffer
    }
}

/// Encodes samples and writes a complete WAV file to a writer.
///
/// The header, format chunk and data chunk are written in that order. Input
/// errors are reported before the first byte reaches `writer`; a write error
/// aborts immediately and names the region that failed. Nothing is rolled
/// back.
///
/// # Arguments
/// * `writer` - Output sink
/// * `samples` - Interleaved samples, nominally in [-1.0, 1.0]
/// * `format` - Format descriptor, echoed verbatim into the `fmt ` chunk
pub fn write_wav<W: Write>(writer: &mut W, samples: &[f64], format: &WavFormat) -> WavResult<()> {
    PreparedWav::build(samples, format)?.write_to(writer)
}

/// Encodes samples into an in-memory WAV file.
pub fn write_wav_to_vec(samples: &[f64], format: &WavFormat) -> WavResult<Vec<u8>> {
    Ok(PreparedWav::build(samples, format)?.into_bytes())
}

/// Encodes samples into a WAV file at `path`.
///
/// Input is validated before the file is created. Each region is written
/// straight to the file, unbuffered, so a write error names the region the OS
/// rejected. The file handle is closed on every return path; after a failed
/// write the partial file stays on disk.
pub fn write_wav_file(
    path: impl AsRef<Path>,
    samples: &[f64],
    format: &WavFormat,
) -> WavResult<()> {
    let path = path.as_ref();
    let prepared = PreparedWav::build(samples, format)?;

    let mut file = File::create(path)?;
    prepared.write_to(&mut file)?;

    debug!("wrote {} bytes to {}", prepared.len(), path.display());
    Ok(())
}
