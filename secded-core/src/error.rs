//! Error types for SEC-DED codec operations

/// Input validation failures raised before any bit computation
///
/// Error classifications produced by decoding (single or double errors) are
/// regular results, not variants of this type.
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Payload length (or declared width) is not 8, 16 or 32 bits
    #[cfg_attr(feature = "std", error("Invalid length: {0} bits (expected 8, 16 or 32)"))]
    InvalidLength(usize),

    /// Non-binary symbol in a bit string
    #[cfg_attr(
        feature = "std",
        error("Invalid character {found:?} at position {position}: only '0' and '1' are allowed")
    )]
    InvalidCharacter {
        /// 1-indexed position of the offending symbol.
        position: usize,
        /// The symbol that was found.
        found: char,
    },

    /// Corruption position outside the codeword
    #[cfg_attr(
        feature = "std",
        error("Position {position} out of range: codeword has positions 1..={len}")
    )]
    PositionOutOfRange {
        /// The requested 1-indexed position.
        position: usize,
        /// Codeword length in bits.
        len: usize,
    },

    /// Received codeword length does not match the declared payload width
    #[cfg_attr(
        feature = "std",
        error("Length mismatch: expected {expected}-bit codeword, got {actual} bits")
    )]
    LengthMismatch {
        /// Codeword length implied by the declared width.
        expected: usize,
        /// Length actually received.
        actual: usize,
    },

    /// Packed stream holds fewer bits than its block count requires
    #[cfg_attr(
        feature = "std",
        error("Truncated stream: expected {expected} bits, got {actual}")
    )]
    TruncatedStream {
        /// Bits required by the block count.
        expected: usize,
        /// Bits present in the packed body.
        actual: usize,
    },

    /// Stream header disagrees with itself or with the body size
    #[cfg_attr(
        feature = "std",
        error("Inconsistent stream header: {blocks} blocks, {byte_len} bytes, {body_len}-byte body")
    )]
    InconsistentStream {
        /// Declared block count.
        blocks: usize,
        /// Declared length of the original input in bytes.
        byte_len: usize,
        /// Size of the packed body in bytes.
        body_len: usize,
    },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for CodecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}
