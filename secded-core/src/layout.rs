//! Parity-position planning shared by the encoder and decoder
//!
//! Positions are 1-indexed. Position `i <= data_total` is a parity bit iff
//! `i` is a power of two; position `data_total + 1` is the overall parity
//! bit; everything else holds payload bits in reverse order (the last
//! payload bit sits at the lowest data position).

use crate::constants::DataWidth;
use crate::error::CodecError;
use crate::types::{BitRole, Bits, Codeword, Payload};
use alloc::vec::Vec;
use bitvec::prelude::*;

/// True iff `x > 0` and `x` has exactly one set bit
pub const fn is_power_of_two(x: usize) -> bool {
    x != 0 && x & (x - 1) == 0
}

/// Number of Hamming parity bits for a payload of `m` bits
pub fn parity_count(m: usize) -> Result<usize, CodecError> {
    Ok(DataWidth::from_bits(m)?.parity_count())
}

/// Every position in `1..=data_total` that shares a set bit with `parity_position`
///
/// For a power-of-two `parity_position` the only parity bit in the result
/// is `parity_position` itself, so each parity value is independent of the
/// others.
pub fn covered_positions(parity_position: usize, data_total: usize) -> Vec<usize> {
    (1..=data_total)
        .filter(|j| j & parity_position != 0)
        .collect()
}

/// XOR of the bits at the given 1-indexed positions
pub(crate) fn xor_at(bits: &BitSlice<u8, Msb0>, positions: &[usize]) -> bool {
    positions
        .iter()
        .fold(false, |acc, &pos| acc ^ bits[pos - 1])
}

/// Position plan for one payload width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParityLayout {
    width: DataWidth,
}

impl ParityLayout {
    /// Layout for a width
    pub const fn new(width: DataWidth) -> Self {
        Self { width }
    }

    /// Layout for a payload of `m` bits
    pub fn for_bits(m: usize) -> Result<Self, CodecError> {
        Ok(Self::new(DataWidth::from_bits(m)?))
    }

    /// Payload width
    pub const fn width(&self) -> DataWidth {
        self.width
    }

    /// Number of Hamming parity bits
    pub const fn parity_count(&self) -> usize {
        self.width.parity_count()
    }

    /// Positions covered by the Hamming checks
    pub const fn data_total(&self) -> usize {
        self.width.data_total()
    }

    /// Codeword length, overall parity bit included
    pub const fn codeword_len(&self) -> usize {
        self.width.codeword_len()
    }

    /// Position of the overall parity bit (the last one)
    pub const fn overall_position(&self) -> usize {
        self.data_total() + 1
    }

    /// Parity positions `1, 2, 4, ..`, lowest first
    pub fn parity_positions(&self) -> impl Iterator<Item = usize> {
        (0..self.parity_count()).map(|k| 1usize << k)
    }

    /// Data positions in increasing order
    pub fn data_positions(&self) -> impl Iterator<Item = usize> {
        (1..=self.data_total()).filter(|&i| !is_power_of_two(i))
    }

    /// Positions checked by the parity bit at `parity_position`
    pub fn covered_by(&self, parity_position: usize) -> Vec<usize> {
        covered_positions(parity_position, self.data_total())
    }

    /// Role of a 1-indexed position, `None` outside the codeword
    pub fn role(&self, position: usize) -> Option<BitRole> {
        match position {
            0 => None,
            p if p == self.overall_position() => Some(BitRole::OverallParity),
            p if p > self.overall_position() => None,
            p if is_power_of_two(p) => Some(BitRole::Parity),
            _ => Some(BitRole::Data),
        }
    }

    /// Roles of every position, position 1 first
    pub fn roles(&self) -> Vec<BitRole> {
        (1..=self.codeword_len())
            .filter_map(|p| self.role(p))
            .collect()
    }

    /// Recover the payload from a codeword of this layout
    ///
    /// Reads the data positions in increasing order and reverses them,
    /// undoing the encoder's placement.
    pub fn extract_payload(&self, codeword: &Codeword) -> Result<Payload, CodecError> {
        if codeword.len() != self.codeword_len() {
            return Err(CodecError::LengthMismatch {
                expected: self.codeword_len(),
                actual: codeword.len(),
            });
        }

        let bits = codeword.bits();
        let mut payload: Bits = self.data_positions().map(|pos| bits[pos - 1]).collect();
        payload.reverse();
        Payload::from_bits(payload)
    }
}

/// Recover the payload of `codeword`, decoded against `width`
pub fn extract_payload(codeword: &Codeword, width: DataWidth) -> Result<Payload, CodecError> {
    ParityLayout::new(width).extract_payload(codeword)
}
