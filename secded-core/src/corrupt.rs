//! Bit-flip injection at caller-chosen positions
//!
//! The codec never picks positions itself; callers that want random
//! corruption resolve the positions first and pass them in.

use crate::error::CodecError;
use crate::types::Codeword;
use alloc::collections::BTreeSet;

/// Flip the bit at each given 1-indexed position
///
/// Positions form a set: repeating a position flips it once. Every position
/// is checked before any bit is touched, so an out-of-range position leaves
/// nothing half-applied.
pub fn corrupt(codeword: &Codeword, positions: &[usize]) -> Result<Codeword, CodecError> {
    let len = codeword.len();
    let unique: BTreeSet<usize> = positions.iter().copied().collect();

    if let Some(&position) = unique.iter().find(|&&p| p == 0 || p > len) {
        return Err(CodecError::PositionOutOfRange { position, len });
    }

    let mut bits = codeword.bits().to_bitvec();
    for position in unique {
        let idx = position - 1;
        let old = bits[idx];
        bits.set(idx, !old);
    }

    Ok(Codeword::from_bits(bits))
}
