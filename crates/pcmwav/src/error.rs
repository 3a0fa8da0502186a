//! Error types for WAV encoding and inspection.

use std::fmt;

use thiserror::Error;

/// Result type for WAV operations.
pub type WavResult<T> = Result<T, WavError>;

/// The region of the container that was being written when a sink failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    /// The 12-byte RIFF header.
    Riff,
    /// The `fmt ` chunk.
    Fmt,
    /// The `data` chunk header and PCM payload.
    Data,
    /// The final flush of the sink.
    Flush,
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChunkKind::Riff => "riff",
            ChunkKind::Fmt => "fmt",
            ChunkKind::Data => "data",
            ChunkKind::Flush => "flush",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while encoding or inspecting WAV data.
#[derive(Debug, Error)]
pub enum WavError {
    /// Bit depth is not one of the supported integer PCM widths.
    #[error("unsupported bit depth: {bits} (expected 16 or 32)")]
    UnsupportedBitDepth {
        /// The rejected bits-per-sample value.
        bits: u16,
    },

    /// Format descriptor declares zero channels.
    #[error("format declares zero channels")]
    NoChannels,

    /// Sample count does not divide into whole frames.
    #[error("{samples} samples do not form whole frames of {channels} channels")]
    IncompleteFrame {
        /// Number of interleaved samples supplied.
        samples: usize,
        /// Channel count from the format.
        channels: u16,
    },

    /// PCM payload does not fit the 32-bit RIFF size fields.
    #[error("PCM payload of {bytes} bytes exceeds the RIFF size limit")]
    DataTooLarge {
        /// Payload size in bytes.
        bytes: u64,
    },

    /// The output sink rejected a write.
    #[error("failed to write {chunk} chunk: {source}")]
    Write {
        /// Region being written.
        chunk: ChunkKind,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error outside the chunk writes (e.g. creating the output file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is a big-endian RIFX container.
    #[error("big-endian RIFX containers are not supported")]
    BigEndianUnsupported,

    /// Input is not a well-formed RIFF/WAVE file.
    #[error("malformed WAV at offset {offset}: {message}")]
    Malformed {
        /// Byte offset where the problem was found.
        offset: usize,
        /// Description of the problem.
        message: String,
    },
}

impl WavError {
    /// Creates a malformed-input error.
    pub fn malformed(offset: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            offset,
            message: message.into(),
        }
    }

    /// Creates a sink write error for the given region.
    pub(crate) fn write(chunk: ChunkKind, source: std::io::Error) -> Self {
        Self::Write { chunk, source }
    }

    /// Stable error code for diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            WavError::UnsupportedBitDepth { .. } => "WAV_001",
            WavError::NoChannels => "WAV_002",
            WavError::IncompleteFrame { .. } => "WAV_003",
            WavError::DataTooLarge { .. } => "WAV_004",
            WavError::Write { .. } => "WAV_005",
            WavError::Io(_) => "WAV_006",
            WavError::BigEndianUnsupported => "WAV_007",
            WavError::Malformed { .. } => "WAV_008",
        }
    }

    /// Whether the error was raised before anything reached the sink.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            WavError::UnsupportedBitDepth { .. }
                | WavError::NoChannels
                | WavError::IncompleteFrame { .. }
                | WavError::DataTooLarge { .. }
        )
    }
}
