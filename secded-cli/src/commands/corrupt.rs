use anyhow::{Context, Result};
use secded_core::{corrupt, Codeword, DataWidth, ParityLayout};
use serde::Serialize;
use tracing::info;

use crate::{emit, render, OutputFormat};

/// Codeword before and after bit flips
#[derive(Debug, Serialize)]
pub struct CorruptReport {
    pub original: Codeword,
    pub positions: Vec<usize>,
    pub corrupted: Codeword,
}

/// Flip the given 1-indexed positions of a `'0'/'1'` codeword
pub fn run(codeword: &str, positions: &[usize]) -> Result<CorruptReport> {
    let original: Codeword = codeword
        .trim()
        .parse()
        .with_context(|| format!("Failed to parse codeword {:?}", codeword))?;

    let corrupted = corrupt(&original, positions)
        .with_context(|| format!("Failed to flip positions {:?}", positions))?;

    let mut positions = positions.to_vec();
    positions.sort_unstable();
    positions.dedup();

    info!("Flipped positions {:?}", positions);

    Ok(CorruptReport {
        original,
        positions,
        corrupted,
    })
}

pub fn execute(codeword: &str, positions: &[usize], format: OutputFormat) -> Result<()> {
    let report = run(codeword, positions)?;
    emit(&report, format, print_text)
}

pub(crate) fn print_text(r: &CorruptReport) {
    println!("\n=== Corruption ===");
    println!("Original:   {}", r.original);
    println!("Corrupted:  {}", r.corrupted);
    println!("Flipped:    {:?}", r.positions);

    // Colour by role only when the length matches a known layout
    if let Some(width) = DataWidth::from_codeword_len(r.corrupted.len()) {
        let layout = ParityLayout::new(width);
        println!();
        println!("  {}", render::ruler(r.corrupted.len()));
        println!("  {}", render::bits(&r.corrupted, &layout, &r.positions));
    }
}
