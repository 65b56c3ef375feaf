use anyhow::{Context, Result};
use colored::*;
use secded_core::{Codeword, DataWidth, DecodeResult, Decoder, DecoderConfig, ErrorClass, Payload};
use serde::Serialize;
use tracing::info;

use crate::{emit, render, OutputFormat};

/// Decode outcome plus the recovered payload
#[derive(Debug, Serialize)]
pub struct DecodeReport {
    #[serde(flatten)]
    pub result: DecodeResult,
    pub payload: Option<Payload>,
}

/// Decode a `'0'/'1'` codeword carrying a `width`-bit payload
pub fn run(codeword: &str, width: usize, config: DecoderConfig) -> Result<DecodeReport> {
    let received: Codeword = codeword
        .trim()
        .parse()
        .with_context(|| format!("Failed to parse codeword {:?}", codeword))?;
    let width = DataWidth::from_bits(width).context("Unsupported payload width")?;

    let result = Decoder::new(config)
        .decode(&received, width)
        .context("Failed to decode codeword")?;

    info!("Classification: {}", result.classification);

    let payload = result.payload();
    Ok(DecodeReport { result, payload })
}

pub fn execute(
    codeword: &str,
    width: usize,
    config: DecoderConfig,
    format: OutputFormat,
) -> Result<()> {
    let report = run(codeword, width, config)?;

    emit(&report, format, |r| {
        let result = &r.result;
        let layout = secded_core::ParityLayout::new(result.width);

        println!("\n=== Decoding ===");
        println!("Received:       {}", result.received);
        println!(
            "Syndrome:       {} (decimal {})",
            result.syndrome, result.syndrome.value
        );
        println!(
            "Overall check:  {}",
            u8::from(result.overall_parity_check)
        );

        println!("\n=== Result ===");
        match result.classification {
            ErrorClass::None => println!("{} No error detected", "✓".green()),
            ErrorClass::SingleCorrectable(pos) => {
                println!("{} Single error at bit {} corrected", "✓".green(), pos);
                if let Some(corrected) = &result.corrected {
                    println!("Corrected:      {}", corrected);
                    println!();
                    println!("  {}", render::ruler(corrected.len()));
                    println!("  {}", render::bits(corrected, &layout, &[pos]));
                }
            }
            ErrorClass::DoubleUncorrectable => {
                if result.syndrome.is_zero() {
                    println!("{} Double error detected, uncorrectable", "✗".red());
                } else {
                    println!(
                        "{} Double error detected (syndrome {}), uncorrectable",
                        "✗".red(),
                        result.syndrome.value
                    );
                }
            }
        }

        if let Some(payload) = &r.payload {
            println!("Payload:        {}", payload);
        }
    })
}
