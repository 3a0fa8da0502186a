//! pcmwav
//!
//! Encodes normalized audio samples into canonical RIFF/WAVE files.
//!
//! # Overview
//!
//! Each sample (nominally in [-1.0, 1.0]) is rescaled to the full signed
//! range of the target width, truncated toward zero and packed little-endian.
//! The packed payload is framed by the three mandatory regions of a minimal
//! WAVE file:
//!
//! - **RIFF header** - `"RIFF"`, `36 + data size`, `"WAVE"`
//! - **Format chunk** - the caller's [`WavFormat`], echoed field for field
//! - **Data chunk** - `"data"`, payload size, PCM bytes
//!
//! Only 16-bit and 32-bit integer PCM are supported; anything else fails
//! before a single byte is written.
//!
//! # Example
//!
//! ```
//! use pcmwav::{write_wav, WavFormat};
//!
//! let format = WavFormat::mono(44100);
//! let mut out: Vec<u8> = Vec::new();
//! write_wav(&mut out, &[0.0, 0.5, -0.5], &format)?;
//!
//! assert_eq!(out.len(), 44 + 6);
//! # Ok::<(), pcmwav::WavError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`write_wav()`] - Encode to any [`std::io::Write`] sink
//! - [`write_wav_file()`] - Encode to a file path
//! - [`WavEncoder`] - Encoder bound to one format, with PCM hashing
//! - [`inspect_wav()`] - Read back the header of an encoded file
//! - [`wav`] - All building blocks (rescaling, packing, chunk framing)

pub mod error;
pub mod wav;

// Re-export main types at crate root
pub use error::{ChunkKind, WavError, WavResult};
pub use wav::{
    inspect_wav, write_wav, write_wav_file, write_wav_to_vec, BitDepth, EncodedWav, WavEncoder,
    WavFormat, WavInfo,
};
