//! Supported integer PCM bit depths.

use std::fmt;

use crate::error::WavError;

/// Integer PCM sample width.
///
/// Only the two widths the encoder can pack are representable, so an
/// unsupported depth is rejected once, when the raw value is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// 16-bit signed little-endian.
    Sixteen,
    /// 32-bit signed little-endian.
    ThirtyTwo,
}

impl BitDepth {
    /// Bits per sample as written to the format chunk.
    pub fn bits(self) -> u16 {
        match self {
            BitDepth::Sixteen => 16,
            BitDepth::ThirtyTwo => 32,
        }
    }

    /// Bytes per sample (per channel).
    pub fn bytes(self) -> usize {
        match self {
            BitDepth::Sixteen => 2,
            BitDepth::ThirtyTwo => 4,
        }
    }

    /// Largest positive value representable at this width.
    pub fn max_value(self) -> i64 {
        match self {
            BitDepth::Sixteen => i16::MAX as i64,
            BitDepth::ThirtyTwo => i32::MAX as i64,
        }
    }

    /// Smallest value representable at this width.
    pub fn min_value(self) -> i64 {
        match self {
            BitDepth::Sixteen => i16::MIN as i64,
            BitDepth::ThirtyTwo => i32::MIN as i64,
        }
    }
}

impl TryFrom<u16> for BitDepth {
    type Error = WavError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        match bits {
            16 => Ok(BitDepth::Sixteen),
            32 => Ok(BitDepth::ThirtyTwo),
            _ => Err(WavError::UnsupportedBitDepth { bits }),
        }
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}
