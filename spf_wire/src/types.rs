//! Type definitions for FHE parameters and ciphertexts.

use std::fmt;
use std::num::NonZeroU32;

use parasol_runtime::L1GlweCiphertext;
use serde::{Deserialize, Serialize};

/// Type-safe bit width representation for FHE operations.
///
/// This enum ensures only valid bit widths can be used, eliminating the need
/// for runtime validation in internal functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BitWidth {
    U8 = 8,
    U16 = 16,
    U32 = 32,
    U64 = 64,
}

/// Error type for invalid bit width conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("bit_width must be 8, 16, 32, or 64, got {0}")]
pub struct InvalidBitWidth(pub u32);

impl BitWidth {
    /// All supported bit widths, narrowest first.
    pub const ALL: [BitWidth; 4] = [BitWidth::U8, BitWidth::U16, BitWidth::U32, BitWidth::U64];

    /// Get the byte width (bit_width / 8).
    pub fn byte_width(self) -> u32 {
        u32::from(self) / 8
    }

    /// Get the maximum unsigned value for this bit width.
    pub fn max_unsigned(self) -> u64 {
        match self {
            BitWidth::U8 => u8::MAX as u64,
            BitWidth::U16 => u16::MAX as u64,
            BitWidth::U32 => u32::MAX as u64,
            BitWidth::U64 => u64::MAX,
        }
    }

    /// Get the minimum signed value for this bit width.
    pub fn min_signed(self) -> i64 {
        match self {
            BitWidth::U8 => i8::MIN as i64,
            BitWidth::U16 => i16::MIN as i64,
            BitWidth::U32 => i32::MIN as i64,
            BitWidth::U64 => i64::MIN,
        }
    }

    /// Get the maximum signed value for this bit width.
    pub fn max_signed(self) -> i64 {
        match self {
            BitWidth::U8 => i8::MAX as i64,
            BitWidth::U16 => i16::MAX as i64,
            BitWidth::U32 => i32::MAX as i64,
            BitWidth::U64 => i64::MAX,
        }
    }

    /// Convert a signed value to its unsigned representation using two's complement.
    pub fn signed_to_unsigned(self, value: i64) -> u64 {
        match self {
            BitWidth::U8 => (value as i8) as u8 as u64,
            BitWidth::U16 => (value as i16) as u16 as u64,
            BitWidth::U32 => (value as i32) as u32 as u64,
            BitWidth::U64 => value as u64,
        }
    }

    /// Convert an unsigned value to its signed representation using two's complement.
    pub fn unsigned_to_signed(self, value: u64) -> i64 {
        match self {
            BitWidth::U8 => (value as u8) as i8 as i64,
            BitWidth::U16 => (value as u16) as i16 as i64,
            BitWidth::U32 => (value as u32) as i32 as i64,
            BitWidth::U64 => value as i64,
        }
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u32::from(*self))
    }
}

impl TryFrom<u16> for BitWidth {
    type Error = InvalidBitWidth;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        BitWidth::try_from(value as u32)
    }
}

impl TryFrom<u32> for BitWidth {
    type Error = InvalidBitWidth;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            8 => Ok(BitWidth::U8),
            16 => Ok(BitWidth::U16),
            32 => Ok(BitWidth::U32),
            64 => Ok(BitWidth::U64),
            _ => Err(InvalidBitWidth(value)),
        }
    }
}

impl From<BitWidth> for u8 {
    fn from(bw: BitWidth) -> u8 {
        bw as u8
    }
}

impl From<BitWidth> for u16 {
    fn from(bw: BitWidth) -> u16 {
        bw as u16
    }
}

impl From<BitWidth> for u32 {
    fn from(bw: BitWidth) -> u32 {
        bw as u32
    }
}

impl From<BitWidth> for usize {
    fn from(bw: BitWidth) -> usize {
        bw as usize
    }
}

/// One entry of a parameters payload as it appears on the wire.
///
/// Variant order and field order are part of the encoding and must not change
/// without bumping [`PARAMETERS_VERSION`](crate::PARAMETERS_VERSION).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ParameterType {
    /// Single ciphertext parameter
    Ciphertext { content: WireCiphertext },
    /// Array of ciphertext parameters
    CiphertextArray { contents: Vec<WireCiphertext> },
    /// Output ciphertext array (result)
    OutputCiphertextArray {
        bit_width: BitWidth,
        size: NonZeroU32,
    },
    /// Single plaintext parameter, signed values in two's complement
    Plaintext { bit_width: BitWidth, value: u64 },
    /// Array of plaintext parameters
    PlaintextArray {
        bit_width: BitWidth,
        values: Vec<u64>,
    },
}

/// Ciphertext with associated bit width.
#[derive(Clone, Serialize, Deserialize)]
pub struct WireCiphertext {
    pub bit_width: BitWidth,
    pub ciphertext: L1GlweCiphertext,
}

impl fmt::Debug for WireCiphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WireCiphertext")
            .field("bit_width", &self.bit_width)
            .field("ciphertext", &"<L1GlweCiphertext>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_width_try_from_valid() {
        assert_eq!(BitWidth::try_from(8u32), Ok(BitWidth::U8));
        assert_eq!(BitWidth::try_from(16u32), Ok(BitWidth::U16));
        assert_eq!(BitWidth::try_from(32u16), Ok(BitWidth::U32));
        assert_eq!(BitWidth::try_from(64u16), Ok(BitWidth::U64));
    }

    #[test]
    fn test_bit_width_try_from_invalid() {
        for value in [0u32, 1, 7, 12, 15, 17, 33, 65, 128, 256] {
            assert_eq!(BitWidth::try_from(value), Err(InvalidBitWidth(value)));
        }
    }

    #[test]
    fn test_invalid_bit_width_message() {
        let err = BitWidth::try_from(7u32).unwrap_err();
        assert_eq!(err.to_string(), "bit_width must be 8, 16, 32, or 64, got 7");
    }

    #[test]
    fn test_bit_width_conversions() {
        for bw in BitWidth::ALL {
            let bits = u32::from(bw);
            assert_eq!(u8::from(bw) as u32, bits);
            assert_eq!(u16::from(bw) as u32, bits);
            assert_eq!(usize::from(bw) as u32, bits);
            assert_eq!(bw.byte_width() * 8, bits);
            assert_eq!(bw.to_string(), bits.to_string());
        }
    }

    #[test]
    fn test_ranges_match_bit_width() {
        for bw in BitWidth::ALL {
            let bits = u32::from(bw);
            assert_eq!(bw.max_unsigned() as u128, (1u128 << bits) - 1);
            assert_eq!(bw.min_signed() as i128, -(1i128 << (bits - 1)));
            assert_eq!(bw.max_signed() as i128, (1i128 << (bits - 1)) - 1);
        }
    }

    #[test]
    fn test_twos_complement() {
        // Positive values stay positive
        assert_eq!(BitWidth::U8.unsigned_to_signed(42), 42);
        assert_eq!(BitWidth::U16.unsigned_to_signed(1000), 1000);

        assert_eq!(BitWidth::U8.unsigned_to_signed(255), -1);
        assert_eq!(BitWidth::U8.unsigned_to_signed(128), -128);
        assert_eq!(BitWidth::U16.unsigned_to_signed(65535), -1);
        assert_eq!(BitWidth::U16.unsigned_to_signed(32768), -32768);

        assert_eq!(BitWidth::U8.signed_to_unsigned(-1), 255);
        assert_eq!(BitWidth::U32.signed_to_unsigned(-1), u32::MAX as u64);
        assert_eq!(BitWidth::U64.signed_to_unsigned(i64::MIN), 1 << 63);
    }
}
