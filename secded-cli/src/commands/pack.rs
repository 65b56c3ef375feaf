use anyhow::{Context, Result};
use secded_core::stream::encode_stream;
use secded_core::DataWidth;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::info;

/// On-disk form of an encoded stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackedFile {
    /// Payload width of every block
    pub width: DataWidth,
    /// Number of codewords in the body
    pub blocks: usize,
    /// Length of the original input in bytes
    pub byte_len: usize,
    /// Packed codewords, hex encoded
    pub body: String,
}

pub fn execute(input: &str, output: &str, width: usize) -> Result<()> {
    info!("Packing data from {} to {}", input, output);

    let width = DataWidth::from_bits(width).context("Unsupported block width")?;

    let data =
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;

    let stream = encode_stream(&data, width);

    let packed = PackedFile {
        width: stream.width,
        blocks: stream.blocks,
        byte_len: stream.byte_len,
        body: hex::encode(&stream.body),
    };

    let json = serde_json::to_string_pretty(&packed)
        .with_context(|| "Failed to serialize packed stream")?;

    fs::write(output, json)
        .with_context(|| format!("Failed to write output file: {}", output))?;

    info!(
        "Packed {} bytes into {} blocks ({} bytes encoded)",
        data.len(),
        stream.blocks,
        stream.body.len()
    );

    Ok(())
}
