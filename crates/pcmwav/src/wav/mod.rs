//! Deterministic WAV file writer.
//!
//! This module encodes normalized `f64` samples into minimal RIFF/WAVE files
//! (RIFF header, `fmt ` chunk, `data` chunk) with 16-bit or 32-bit integer
//! PCM payloads. Output carries no timestamps or metadata, so equal input
//! always yields byte-identical files.

mod builder;
mod chunk;
mod depth;
mod format;
mod inspect;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use builder::WavEncoder;
pub use chunk::{
    data_chunk_header, data_chunk_size, fmt_chunk, riff_header, DATA_ID, FMT_ID, RIFF_ID,
    RIFX_ID, WAVE_ID, WAV_HEADER_LEN,
};
pub use depth::BitDepth;
pub use format::{WavFormat, PCM_FMT_CHUNK_SIZE, WAVE_FORMAT_PCM};
pub use inspect::{compute_pcm_hash, extract_pcm_data, inspect_wav, WavInfo};
pub use pcm::{
    interleave, pack_sample, rescale_sample, samples_to_pcm, samples_to_pcm16, samples_to_pcm32,
};
pub use result::EncodedWav;
pub use writer::{write_wav, write_wav_file, write_wav_to_vec};
