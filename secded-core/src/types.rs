//! Core value types: payloads, codewords, syndromes and decode results

use crate::constants::DataWidth;
use crate::error::CodecError;
use alloc::string::String;
use alloc::vec::Vec;
use bitvec::prelude::*;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Bit storage shared by payloads and codewords
pub type Bits = BitVec<u8, Msb0>;

/// Parse a `'0'/'1'` string into bits
pub fn parse_bits(s: &str) -> Result<Bits, CodecError> {
    let mut bits = Bits::with_capacity(s.len());
    for (idx, ch) in s.chars().enumerate() {
        match ch {
            '0' => bits.push(false),
            '1' => bits.push(true),
            found => {
                return Err(CodecError::InvalidCharacter {
                    position: idx + 1,
                    found,
                })
            }
        }
    }
    Ok(bits)
}

fn write_bits(bits: &BitSlice<u8, Msb0>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for bit in bits.iter().by_vals() {
        f.write_str(if bit { "1" } else { "0" })?;
    }
    Ok(())
}

/// Payload of 8, 16 or 32 bits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Payload {
    bits: Bits,
}

impl Payload {
    /// Wrap raw bits, validating the length
    pub fn from_bits(bits: Bits) -> Result<Self, CodecError> {
        DataWidth::from_bits(bits.len())?;
        Ok(Self { bits })
    }

    /// Wrap a block already sized to a supported width
    pub(crate) fn from_block(bits: Bits) -> Self {
        debug_assert!(DataWidth::from_bits(bits.len()).is_ok());
        Self { bits }
    }

    /// Parse a bit string declared to be `width` bits long
    ///
    /// A width outside {8, 16, 32} or a payload of any other length fails
    /// with [`CodecError::InvalidLength`] carrying the offending length.
    pub fn parse_with_width(s: &str, width: usize) -> Result<Self, CodecError> {
        let declared = DataWidth::from_bits(width)?;
        let bits = parse_bits(s)?;
        if bits.len() != declared.bits() {
            return Err(CodecError::InvalidLength(bits.len()));
        }
        Ok(Self { bits })
    }

    /// Payload width
    pub fn width(&self) -> DataWidth {
        match self.bits.len() {
            8 => DataWidth::W8,
            16 => DataWidth::W16,
            _ => DataWidth::W32,
        }
    }

    /// Underlying bits, first payload bit first
    pub fn bits(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false: a payload has at least 8 bits
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}

impl FromStr for Payload {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Payload::from_bits(parse_bits(s)?)
    }
}

impl TryFrom<String> for Payload {
    type Error = CodecError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Payload> for String {
    fn from(payload: Payload) -> Self {
        alloc::format!("{}", payload)
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bits(&self.bits, f)
    }
}

/// Codeword with 1-indexed positions
///
/// Length is not checked on construction: a received codeword may have any
/// length, and the decoder rejects the ones that do not match their width.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Codeword {
    bits: Bits,
}

impl Codeword {
    /// Wrap raw bits
    pub fn from_bits(bits: Bits) -> Self {
        Self { bits }
    }

    /// Codeword length in bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when the codeword has no bits
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit at a 1-indexed position, `None` when out of range
    pub fn bit(&self, position: usize) -> Option<bool> {
        if position == 0 {
            return None;
        }
        self.bits.get(position - 1).map(|b| *b)
    }

    /// Underlying bits, position 1 first
    pub fn bits(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    /// Consume into the underlying bits
    pub fn into_bits(self) -> Bits {
        self.bits
    }

    /// XOR of every bit
    pub fn parity(&self) -> bool {
        self.bits.count_ones() % 2 == 1
    }

    /// Copy with the bit at a 1-indexed position inverted
    pub(crate) fn flipped(&self, position: usize) -> Self {
        let mut bits = self.bits.clone();
        let idx = position - 1;
        let old = bits[idx];
        bits.set(idx, !old);
        Self { bits }
    }
}

impl FromStr for Codeword {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Codeword::from_bits(parse_bits(s)?))
    }
}

impl TryFrom<String> for Codeword {
    type Error = CodecError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Codeword> for String {
    fn from(codeword: Codeword) -> Self {
        alloc::format!("{}", codeword)
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bits(&self.bits, f)
    }
}

/// Role of a codeword position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BitRole {
    /// Holds a payload bit
    Data,
    /// Hamming parity bit at a power-of-two position
    Parity,
    /// Trailing overall parity bit
    OverallParity,
}

/// Recomputed parity checks of a received codeword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syndrome {
    /// Check bits, most-significant (highest parity position) first
    pub bits: Vec<bool>,

    /// Check bits read as a binary integer
    pub value: usize,
}

impl Syndrome {
    /// Build from check bits ordered most-significant first
    pub fn from_bits(bits: Vec<bool>) -> Self {
        let value = bits
            .iter()
            .fold(0usize, |acc, &bit| (acc << 1) | usize::from(bit));
        Self { bits, value }
    }

    /// True when no parity check failed
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl fmt::Display for Syndrome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Outcome of classifying a received codeword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "position", rename_all = "snake_case")]
pub enum ErrorClass {
    /// No error detected
    None,
    /// Single bit error at the given 1-indexed position, corrected
    SingleCorrectable(usize),
    /// Two (or more) bit errors detected; nothing corrected
    DoubleUncorrectable,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorClass::None => write!(f, "no error"),
            ErrorClass::SingleCorrectable(pos) => {
                write!(f, "single error at position {}, corrected", pos)
            }
            ErrorClass::DoubleUncorrectable => write!(f, "double error, uncorrectable"),
        }
    }
}

/// Everything the decoder learned about one received codeword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeResult {
    /// Payload width the codeword was decoded against
    pub width: DataWidth,

    /// The codeword as received
    pub received: Codeword,

    /// Recomputed Hamming checks
    pub syndrome: Syndrome,

    /// XOR of every received bit, overall parity bit included
    pub overall_parity_check: bool,

    /// Error classification
    pub classification: ErrorClass,

    /// Corrected codeword, present only for single correctable errors
    pub corrected: Option<Codeword>,
}

impl DecodeResult {
    /// The codeword that can be trusted, if any
    ///
    /// This is the received codeword when no error was detected and the
    /// corrected one after a single-bit correction.
    pub fn recovered(&self) -> Option<&Codeword> {
        match self.classification {
            ErrorClass::None => Some(&self.received),
            ErrorClass::SingleCorrectable(_) => self.corrected.as_ref(),
            ErrorClass::DoubleUncorrectable => None,
        }
    }

    /// Payload carried by [`recovered`](Self::recovered)
    pub fn payload(&self) -> Option<Payload> {
        let codeword = self.recovered()?;
        crate::layout::ParityLayout::new(self.width)
            .extract_payload(codeword)
            .ok()
    }

    /// True when the codeword is usable as-is or after correction
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.classification, ErrorClass::DoubleUncorrectable)
    }
}
