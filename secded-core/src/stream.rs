//! Block codec over arbitrary byte buffers
//!
//! The input is cut into payload blocks of one [`DataWidth`], each block is
//! encoded independently, and the codewords are packed back to back,
//! MSB-first, into a single byte buffer. A short final block is padded with
//! zero bits; `byte_len` records how much of the decoded output is real.

use crate::constants::DataWidth;
use crate::decoder::{Decoder, DecoderConfig};
use crate::encoder::encode;
use crate::error::CodecError;
use crate::types::{Bits, Codeword, ErrorClass, Payload};
use alloc::vec::Vec;
use bitvec::prelude::*;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Packed sequence of codewords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedStream {
    /// Payload width of every block
    pub width: DataWidth,

    /// Number of codewords in `body`
    pub blocks: usize,

    /// Length of the original input in bytes
    pub byte_len: usize,

    /// Codewords packed MSB-first, padded to a whole byte
    pub body: Bytes,
}

impl EncodedStream {
    /// Number of meaningful bits in `body`, `None` if the block count overflows
    pub fn bit_len(&self) -> Option<usize> {
        self.blocks.checked_mul(self.width.codeword_len())
    }

    /// Check the header against the body before any block is read
    ///
    /// The body must hold exactly `blocks` codewords (padded to a whole byte)
    /// and `blocks` must be the count `byte_len` bytes encode to.
    pub fn validate(&self) -> Result<(), CodecError> {
        let available = self.body.len().saturating_mul(8);
        let bit_len = self.bit_len().ok_or(CodecError::TruncatedStream {
            expected: usize::MAX,
            actual: available,
        })?;
        if available < bit_len {
            return Err(CodecError::TruncatedStream {
                expected: bit_len,
                actual: available,
            });
        }

        let needed_blocks = self
            .byte_len
            .checked_mul(8)
            .map(|bits| bits.div_ceil(self.width.bits()));
        if needed_blocks != Some(self.blocks) || self.body.len() != bit_len.div_ceil(8) {
            return Err(CodecError::InconsistentStream {
                blocks: self.blocks,
                byte_len: self.byte_len,
                body_len: self.body.len(),
            });
        }
        Ok(())
    }

    /// Unpack the codeword of block `index`
    pub fn codeword(&self, index: usize) -> Result<Codeword, CodecError> {
        let len = self.width.codeword_len();
        let bits = self.body[..].view_bits::<Msb0>();
        let range = index
            .checked_mul(len)
            .and_then(|start| Some(start..start.checked_add(len)?));
        match range {
            Some(range) if range.end <= bits.len() => {
                Ok(Codeword::from_bits(bits[range].to_bitvec()))
            }
            range => Err(CodecError::TruncatedStream {
                expected: range.map_or(usize::MAX, |r| r.end),
                actual: bits.len(),
            }),
        }
    }
}

/// Outcome of decoding one block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockReport {
    /// Block index, starting at 0
    pub index: usize,

    /// Classification of the block's codeword
    pub classification: ErrorClass,

    /// Syndrome value, kept for diagnostics
    pub syndrome: usize,
}

/// Outcome of decoding a whole stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamReport {
    /// Per-block outcomes, in order
    pub blocks: Vec<BlockReport>,

    /// Blocks with no error
    pub clean: usize,

    /// Blocks with a corrected single error
    pub corrected: usize,

    /// Blocks that could not be recovered
    pub uncorrectable: usize,

    /// Recovered input, absent when any block was uncorrectable
    pub data: Option<Vec<u8>>,
}

impl StreamReport {
    /// True when every block was recovered
    pub fn is_complete(&self) -> bool {
        self.uncorrectable == 0
    }
}

/// Encode a byte buffer block by block
pub fn encode_stream(data: &[u8], width: DataWidth) -> EncodedStream {
    let input = data.view_bits::<Msb0>();
    let block_bits = width.bits();
    let blocks = input.len().div_ceil(block_bits);

    let mut packed: Bits = BitVec::with_capacity(blocks * width.codeword_len());
    for chunk in input.chunks(block_bits) {
        let mut block = chunk.to_bitvec();
        block.resize(block_bits, false);
        let payload = Payload::from_block(block);
        packed.extend_from_bitslice(encode(&payload).bits());
    }

    #[cfg(feature = "logging")]
    debug!(
        "Encoded {} bytes into {} blocks of width {}",
        data.len(),
        blocks,
        width
    );

    EncodedStream {
        width,
        blocks,
        byte_len: data.len(),
        body: Bytes::from(packed.into_vec()),
    }
}

/// Decode a packed stream, correcting single errors per block
pub fn decode_stream(
    stream: &EncodedStream,
    config: DecoderConfig,
) -> Result<StreamReport, CodecError> {
    stream.validate()?;

    let decoder = Decoder::new(config);
    let mut reports = Vec::with_capacity(stream.blocks);
    let mut recovered: Bits = BitVec::with_capacity(stream.blocks * stream.width.bits());
    let mut clean = 0;
    let mut corrected = 0;
    let mut uncorrectable = 0;

    for index in 0..stream.blocks {
        let codeword = stream.codeword(index)?;
        let result = decoder.decode(&codeword, stream.width)?;

        match result.classification {
            ErrorClass::None => clean += 1,
            ErrorClass::SingleCorrectable(_) => corrected += 1,
            ErrorClass::DoubleUncorrectable => {
                uncorrectable += 1;
                #[cfg(feature = "logging")]
                warn!("Block {} is uncorrectable", index);
            }
        }

        if let Some(payload) = result.payload() {
            recovered.extend_from_bitslice(payload.bits());
        }

        reports.push(BlockReport {
            index,
            classification: result.classification,
            syndrome: result.syndrome.value,
        });
    }

    let data = if uncorrectable == 0 {
        let mut bytes = recovered.into_vec();
        bytes.truncate(stream.byte_len);
        Some(bytes)
    } else {
        None
    };

    Ok(StreamReport {
        blocks: reports,
        clean,
        corrected,
        uncorrectable,
        data,
    })
}
