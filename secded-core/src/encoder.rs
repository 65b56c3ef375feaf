//! Codeword encoding

use crate::error::CodecError;
use crate::layout::{is_power_of_two, xor_at, ParityLayout};
use crate::types::{Bits, Codeword, Payload};
use bitvec::prelude::*;

/// Encode a payload into a SEC-DED codeword
///
/// The codeword is built in three steps:
/// 1. Payload bits are reversed and laid into the non-power-of-two
///    positions `1..=data_total` in increasing order
/// 2. Each parity position `2^k` receives the XOR of the positions it covers
/// 3. A final overall parity bit is appended: the XOR of every bit before it
pub fn encode(payload: &Payload) -> Codeword {
    let layout = ParityLayout::new(payload.width());
    let data_total = layout.data_total();

    let mut bits: Bits = bitvec![u8, Msb0; 0; data_total];

    // Data bits, last payload bit first
    let mut reversed = payload.bits().iter().by_vals().rev();
    for pos in 1..=data_total {
        if is_power_of_two(pos) {
            continue;
        }
        if let Some(bit) = reversed.next() {
            bits.set(pos - 1, bit);
        }
    }

    // Parity positions are still zero here, so each XOR only sees data bits
    for p in layout.parity_positions() {
        let parity = xor_at(&bits, &layout.covered_by(p));
        bits.set(p - 1, parity);
    }

    let overall = bits.count_ones() % 2 == 1;
    bits.push(overall);

    Codeword::from_bits(bits)
}

/// Encode a `'0'/'1'` payload declared to be `width` bits long
///
/// Fails with [`CodecError::InvalidLength`] when `width` is not 8, 16 or 32
/// or the payload has a different length, and with
/// [`CodecError::InvalidCharacter`] on non-binary symbols.
pub fn encode_str(payload: &str, width: usize) -> Result<Codeword, CodecError> {
    let payload = Payload::parse_with_width(payload, width)?;
    Ok(encode(&payload))
}
