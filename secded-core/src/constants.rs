//! Constants and limits for the SEC-DED codeword format

use crate::error::CodecError;
use serde::{Deserialize, Serialize};

/// Payload widths the codec accepts, in bits
pub const SUPPORTED_WIDTHS: [usize; 3] = [8, 16, 32];

/// Number of Hamming parity bits for an 8-bit payload
pub const PARITY_BITS_W8: usize = 4;

/// Number of Hamming parity bits for a 16-bit payload
pub const PARITY_BITS_W16: usize = 5;

/// Number of Hamming parity bits for a 32-bit payload
pub const PARITY_BITS_W32: usize = 6;

/// Largest codeword the codec produces (32 data + 6 parity + 1 overall)
pub const MAX_CODEWORD_LEN: usize = 32 + PARITY_BITS_W32 + 1;

/// Payload width
///
/// The parity count is a fixed table, not derived from the Hamming bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum DataWidth {
    /// 8 data bits, 13-bit codeword
    W8,
    /// 16 data bits, 22-bit codeword
    W16,
    /// 32 data bits, 39-bit codeword
    W32,
}

impl DataWidth {
    /// Look up the width for a payload length in bits
    pub fn from_bits(bits: usize) -> Result<Self, CodecError> {
        match bits {
            8 => Ok(DataWidth::W8),
            16 => Ok(DataWidth::W16),
            32 => Ok(DataWidth::W32),
            other => Err(CodecError::InvalidLength(other)),
        }
    }

    /// Number of payload bits
    pub const fn bits(&self) -> usize {
        match self {
            DataWidth::W8 => 8,
            DataWidth::W16 => 16,
            DataWidth::W32 => 32,
        }
    }

    /// Number of Hamming parity bits (excluding the overall parity bit)
    pub const fn parity_count(&self) -> usize {
        match self {
            DataWidth::W8 => PARITY_BITS_W8,
            DataWidth::W16 => PARITY_BITS_W16,
            DataWidth::W32 => PARITY_BITS_W32,
        }
    }

    /// Data plus parity bits, i.e. every position the Hamming checks cover
    pub const fn data_total(&self) -> usize {
        self.bits() + self.parity_count()
    }

    /// Full codeword length including the trailing overall parity bit
    pub const fn codeword_len(&self) -> usize {
        self.data_total() + 1
    }

    /// Find the width whose codeword has exactly `len` bits
    pub fn from_codeword_len(len: usize) -> Option<Self> {
        [DataWidth::W8, DataWidth::W16, DataWidth::W32]
            .into_iter()
            .find(|w| w.codeword_len() == len)
    }
}

impl TryFrom<usize> for DataWidth {
    type Error = CodecError;

    fn try_from(bits: usize) -> Result<Self, Self::Error> {
        DataWidth::from_bits(bits)
    }
}

impl From<DataWidth> for usize {
    fn from(width: DataWidth) -> Self {
        width.bits()
    }
}

impl core::fmt::Display for DataWidth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_table() {
        assert_eq!(DataWidth::W8.parity_count(), 4);
        assert_eq!(DataWidth::W16.parity_count(), 5);
        assert_eq!(DataWidth::W32.parity_count(), 6);
    }

    #[test]
    fn test_lengths() {
        assert_eq!(DataWidth::W8.data_total(), 12);
        assert_eq!(DataWidth::W8.codeword_len(), 13);
        assert_eq!(DataWidth::W16.codeword_len(), 22);
        assert_eq!(DataWidth::W32.codeword_len(), 39);
        assert_eq!(DataWidth::W32.codeword_len(), MAX_CODEWORD_LEN);
    }

    #[test]
    fn test_unsupported_width() {
        for bits in [0, 7, 10, 24, 64] {
            assert_eq!(
                DataWidth::from_bits(bits),
                Err(CodecError::InvalidLength(bits))
            );
        }
    }

    #[test]
    fn test_from_codeword_len() {
        assert_eq!(DataWidth::from_codeword_len(22), Some(DataWidth::W16));
        assert_eq!(DataWidth::from_codeword_len(12), None);
    }
}
