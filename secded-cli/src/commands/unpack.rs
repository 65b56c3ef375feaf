use anyhow::{bail, Context, Result};
use bytes::Bytes;
use colored::*;
use secded_core::stream::{decode_stream, EncodedStream, StreamReport};
use secded_core::{DecoderConfig, ErrorClass};
use std::fs;
use tracing::{info, warn};

use super::pack::PackedFile;

/// Decode a packed file, writing the recovered bytes to `output`
///
/// Nothing is written when any block is uncorrectable.
pub fn run(input: &str, output: &str, config: DecoderConfig) -> Result<StreamReport> {
    info!("Unpacking {} to {}", input, output);

    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input))?;

    let packed: PackedFile =
        serde_json::from_str(&content).with_context(|| "Failed to parse packed stream")?;

    let body = hex::decode(packed.body.trim()).with_context(|| "Packed body is not valid hex")?;

    let stream = EncodedStream {
        width: packed.width,
        blocks: packed.blocks,
        byte_len: packed.byte_len,
        body: Bytes::from(body),
    };

    let report = decode_stream(&stream, config).context("Failed to decode stream")?;

    for block in &report.blocks {
        match block.classification {
            ErrorClass::SingleCorrectable(pos) => {
                info!("Block {}: corrected bit {}", block.index, pos)
            }
            ErrorClass::DoubleUncorrectable => warn!(
                "Block {}: uncorrectable (syndrome {})",
                block.index, block.syndrome
            ),
            ErrorClass::None => {}
        }
    }

    match &report.data {
        Some(data) => {
            fs::write(output, data)
                .with_context(|| format!("Failed to write output file: {}", output))?;
            info!("Recovered {} bytes", data.len());
        }
        None => warn!("{} blocks uncorrectable, output not written", report.uncorrectable),
    }

    Ok(report)
}

pub fn execute(input: &str, output: &str, config: DecoderConfig) -> Result<()> {
    let report = run(input, output, config)?;

    println!("\n=== Unpack Results ===");
    println!("Blocks:            {}", report.blocks.len());
    println!("Clean:             {}", report.clean);
    println!("Corrected:         {}", report.corrected.to_string().yellow());
    if report.uncorrectable > 0 {
        println!("Uncorrectable:     {}", report.uncorrectable.to_string().red());
    } else {
        println!("Uncorrectable:     {}", report.uncorrectable);
    }

    if !report.is_complete() {
        bail!(
            "{} of {} blocks could not be recovered",
            report.uncorrectable,
            report.blocks.len()
        );
    }

    println!("{} Data recovered", "✓".green());
    Ok(())
}
