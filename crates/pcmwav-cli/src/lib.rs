//! pcmwav CLI library.
//!
//! This crate provides the command implementations behind the `pcmwav`
//! binary: sample loading, WAV encoding and header inspection.

pub mod commands;
pub mod input;
