//! Fuzzing entry points for secded-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decoder

use secded_core::{DataWidth, Decoder, DecoderConfig};

const WIDTHS: [DataWidth; 3] = [DataWidth::W8, DataWidth::W16, DataWidth::W32];

/// Decode arbitrary text as a codeword of every width
pub fn fuzz_decode(data: &[u8]) {
    let text = String::from_utf8_lossy(data);

    // Parsing may fail; decoding a parsed codeword must never panic
    if let Ok(codeword) = text.parse::<secded_core::Codeword>() {
        for width in WIDTHS {
            for correct_overall_parity in [false, true] {
                let decoder = Decoder::new(DecoderConfig {
                    correct_overall_parity,
                });
                let _ = decoder.decode(&codeword, width);
            }
        }
    }
}

/// Decode arbitrary bytes as a packed stream of every width
///
/// The first 16 bytes, when present, become the block count and byte length
/// so inconsistent and overflowing headers are exercised; the rest is the body.
pub fn fuzz_stream(data: &[u8]) {
    use secded_core::stream::{decode_stream, EncodedStream};

    let (header, body) = data.split_at(data.len().min(16));
    let field = |bytes: &[u8]| {
        let mut word = [0u8; 8];
        word[..bytes.len()].copy_from_slice(bytes);
        u64::from_le_bytes(word) as usize
    };
    let (blocks, byte_len) = header.split_at(header.len().min(8));
    let (blocks, byte_len) = (field(blocks), field(byte_len));

    for width in WIDTHS {
        let stream = EncodedStream {
            width,
            blocks,
            byte_len,
            body: body.to_vec().into(),
        };
        let _ = stream.codeword(blocks);
        let _ = decode_stream(&stream, DecoderConfig::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_decode_empty() {
        fuzz_decode(&[]);
    }

    #[test]
    fn test_fuzz_decode_random() {
        fuzz_decode(&[0x12, 0x34, 0x56, 0x78]);
        fuzz_decode(b"0100100111010");
        fuzz_decode(b"1111111111111111111111111111111111111111");
    }

    #[test]
    fn test_fuzz_stream_empty() {
        fuzz_stream(&[]);
    }

    #[test]
    fn test_fuzz_stream_random() {
        fuzz_stream(&[0xFF; 1024]);
    }

    #[test]
    fn test_fuzz_stream_crafted_header() {
        let mut data = ((usize::MAX / 4) as u64).to_le_bytes().to_vec();
        data.extend_from_slice(&1u64.to_le_bytes());
        data.extend_from_slice(&[0, 0]);
        fuzz_stream(&data);

        // One block declared for a four-byte input
        let mut data = 1u64.to_le_bytes().to_vec();
        data.extend_from_slice(&4u64.to_le_bytes());
        data.extend_from_slice(&[0u8; 7]);
        fuzz_stream(&data);
    }
}
