//! Syndrome computation, error classification and single-bit correction

use crate::constants::DataWidth;
use crate::error::CodecError;
use crate::layout::{xor_at, ParityLayout};
use crate::types::{Codeword, DecodeResult, ErrorClass, Syndrome};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Decoder options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Treat a zero syndrome with a failed overall check as a single error
    /// in the overall parity bit and correct it.
    ///
    /// Off by default: that combination is then reported as
    /// [`ErrorClass::DoubleUncorrectable`], matching the reference vectors.
    pub correct_overall_parity: bool,
}

/// Single-shot SEC-DED decoder
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder with the given options
    pub const fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Decoder options in effect
    pub const fn config(&self) -> DecoderConfig {
        self.config
    }

    /// Decode a codeword that carries a payload of `width` bits
    ///
    /// Classification follows the syndrome / overall-check table:
    ///
    /// | syndrome | overall | result |
    /// |---|---|---|
    /// | 0 | 0 | `None` |
    /// | 0 | 1 | `DoubleUncorrectable` (or a corrected overall bit, if configured) |
    /// | s != 0 | 1 | `SingleCorrectable(s)`, bit `s` flipped |
    /// | s != 0 | 0 | `DoubleUncorrectable`, `s` is diagnostic only |
    ///
    /// A nonzero syndrome beyond the last covered position cannot come from
    /// a single flip and is reported as uncorrectable. This includes a
    /// syndrome naming the overall parity position itself: it is never
    /// flipped on the strength of the Hamming checks alone, unlike a naive
    /// "flip bit s" corrector.
    pub fn decode(&self, received: &Codeword, width: DataWidth) -> Result<DecodeResult, CodecError> {
        let layout = ParityLayout::new(width);

        if received.len() != layout.codeword_len() {
            return Err(CodecError::LengthMismatch {
                expected: layout.codeword_len(),
                actual: received.len(),
            });
        }

        let syndrome = compute_syndrome(received, &layout);
        let overall_parity_check = received.parity();

        let classification = match (syndrome.value, overall_parity_check) {
            (0, false) => ErrorClass::None,
            (0, true) if self.config.correct_overall_parity => {
                ErrorClass::SingleCorrectable(layout.overall_position())
            }
            (0, true) => ErrorClass::DoubleUncorrectable,
            (s, true) if s <= layout.data_total() => ErrorClass::SingleCorrectable(s),
            (_, _) => ErrorClass::DoubleUncorrectable,
        };

        let corrected = match classification {
            ErrorClass::SingleCorrectable(position) => Some(received.flipped(position)),
            _ => None,
        };

        #[cfg(feature = "logging")]
        match classification {
            ErrorClass::None => debug!("Codeword clean (width {})", width),
            ErrorClass::SingleCorrectable(position) => {
                debug!("Corrected single error at position {}", position)
            }
            ErrorClass::DoubleUncorrectable => warn!(
                "Uncorrectable error: syndrome {} ({}), overall check {}",
                syndrome,
                syndrome.value,
                u8::from(overall_parity_check)
            ),
        }

        Ok(DecodeResult {
            width,
            received: received.clone(),
            syndrome,
            overall_parity_check,
            classification,
            corrected,
        })
    }
}

/// Recompute every Hamming check over a received codeword
///
/// Check `k` is the XOR of the positions covered by `2^k`; the returned
/// bits are ordered with the highest check first.
pub fn compute_syndrome(received: &Codeword, layout: &ParityLayout) -> Syndrome {
    let mut checks: Vec<bool> = layout
        .parity_positions()
        .map(|p| xor_at(received.bits(), &layout.covered_by(p)))
        .collect();
    checks.reverse();
    Syndrome::from_bits(checks)
}

/// Decode with the default options, `m` being the original payload width
pub fn decode(received: &Codeword, m: usize) -> Result<DecodeResult, CodecError> {
    let width = DataWidth::from_bits(m)?;
    Decoder::default().decode(received, width)
}

/// Decode a `'0'/'1'` codeword with the default options
pub fn decode_str(received: &str, m: usize) -> Result<DecodeResult, CodecError> {
    let codeword: Codeword = received.parse()?;
    decode(&codeword, m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corrupt::corrupt;
    use crate::encoder::encode_str;
    use alloc::string::ToString;

    const GOLDEN: &str = "0100100111010";

    #[test]
    fn test_decode_clean() {
        let result = decode_str(GOLDEN, 8).unwrap();

        assert_eq!(result.classification, ErrorClass::None);
        assert!(result.syndrome.is_zero());
        assert!(!result.overall_parity_check);
        assert_eq!(result.corrected, None);
        assert_eq!(result.recovered().unwrap().to_string(), GOLDEN);
        assert_eq!(result.payload().unwrap().to_string(), "10110010");
    }

    #[test]
    fn test_decode_single_error() {
        let cw: Codeword = GOLDEN.parse().unwrap();
        let damaged = corrupt(&cw, &[6]).unwrap();
        let result = decode(&damaged, 8).unwrap();

        assert_eq!(result.classification, ErrorClass::SingleCorrectable(6));
        assert_eq!(result.syndrome.to_string(), "0110");
        assert_eq!(result.syndrome.value, 6);
        assert!(result.overall_parity_check);
        assert_eq!(result.corrected.as_ref(), Some(&cw));
        assert_eq!(result.received, damaged);
    }

    #[test]
    fn test_decode_double_error_reports_syndrome_without_flipping() {
        let cw: Codeword = GOLDEN.parse().unwrap();
        let damaged = corrupt(&cw, &[1, 2]).unwrap();
        let result = decode(&damaged, 8).unwrap();

        assert_eq!(result.classification, ErrorClass::DoubleUncorrectable);
        assert_eq!(result.syndrome.value, 3);
        assert!(!result.overall_parity_check);
        assert_eq!(result.corrected, None);
        assert_eq!(result.recovered(), None);
        assert_eq!(result.payload(), None);
    }

    #[test]
    fn test_overall_bit_flip_default_is_uncorrectable() {
        let cw: Codeword = GOLDEN.parse().unwrap();
        let damaged = corrupt(&cw, &[13]).unwrap();
        let result = decode(&damaged, 8).unwrap();

        assert!(result.syndrome.is_zero());
        assert!(result.overall_parity_check);
        assert_eq!(result.classification, ErrorClass::DoubleUncorrectable);
        assert_eq!(result.corrected, None);
    }

    #[test]
    fn test_overall_bit_flip_corrected_when_configured() {
        let cw: Codeword = GOLDEN.parse().unwrap();
        let damaged = corrupt(&cw, &[13]).unwrap();
        let decoder = Decoder::new(DecoderConfig {
            correct_overall_parity: true,
        });
        let result = decoder.decode(&damaged, DataWidth::W8).unwrap();

        assert_eq!(result.classification, ErrorClass::SingleCorrectable(13));
        assert_eq!(result.corrected, Some(cw));
    }

    #[test]
    fn test_syndrome_beyond_covered_positions_is_not_corrected() {
        // Three flips whose XOR is 15 > data_total (12)
        let cw: Codeword = GOLDEN.parse().unwrap();
        let damaged = corrupt(&cw, &[3, 4, 8]).unwrap();
        let result = decode(&damaged, 8).unwrap();

        assert_eq!(result.syndrome.value, 15);
        assert!(result.overall_parity_check);
        assert_eq!(result.classification, ErrorClass::DoubleUncorrectable);
        assert_eq!(result.corrected, None);
    }

    #[test]
    fn test_syndrome_naming_overall_bit_is_not_corrected() {
        // 1 ^ 4 ^ 8 = 13, the overall parity position of a W8 codeword
        let cw: Codeword = GOLDEN.parse().unwrap();
        let damaged = corrupt(&cw, &[1, 4, 8]).unwrap();
        for correct_overall_parity in [false, true] {
            let decoder = Decoder::new(DecoderConfig {
                correct_overall_parity,
            });
            let result = decoder.decode(&damaged, DataWidth::W8).unwrap();

            assert_eq!(result.syndrome.value, 13);
            assert!(result.overall_parity_check);
            assert_eq!(result.classification, ErrorClass::DoubleUncorrectable);
            assert_eq!(result.corrected, None);
        }
    }

    #[test]
    fn test_length_mismatch() {
        let cw = encode_str("1010101010101010", 16).unwrap();
        assert_eq!(
            decode(&cw, 8),
            Err(CodecError::LengthMismatch {
                expected: 13,
                actual: 22
            })
        );
        assert_eq!(decode(&cw, 12), Err(CodecError::InvalidLength(12)));
    }
}
