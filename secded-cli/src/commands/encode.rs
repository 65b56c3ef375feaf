use anyhow::{Context, Result};
use secded_core::{encode, BitRole, Codeword, ParityLayout, Payload};
use serde::Serialize;
use tracing::info;

use crate::{emit, render, OutputFormat};

/// Encoded codeword plus its position plan
#[derive(Debug, Serialize)]
pub struct EncodeReport {
    pub payload: Payload,
    pub width: usize,
    pub parity_count: usize,
    pub data_total: usize,
    pub codeword: Codeword,
    pub roles: Vec<BitRole>,
}

/// Encode a `'0'/'1'` payload; `width` defaults to the payload's own length
pub fn run(payload: &str, width: Option<usize>) -> Result<EncodeReport> {
    let payload = payload.trim();
    let width = width.unwrap_or(payload.len());
    let payload = Payload::parse_with_width(payload, width)
        .with_context(|| format!("Failed to parse payload {:?}", payload))?;

    let layout = ParityLayout::new(payload.width());
    let codeword = encode(&payload);

    info!(
        "Encoded {}-bit payload into {}-bit codeword",
        payload.len(),
        codeword.len()
    );

    Ok(EncodeReport {
        width: layout.width().bits(),
        parity_count: layout.parity_count(),
        data_total: layout.data_total(),
        roles: layout.roles(),
        payload,
        codeword,
    })
}

pub fn execute(payload: &str, width: Option<usize>, format: OutputFormat) -> Result<()> {
    let report = run(payload, width)?;

    emit(&report, format, |r| {
        let layout = ParityLayout::new(r.payload.width());
        println!("\n=== Encoding ===");
        println!("Payload:        {} ({} bits)", r.payload, r.width);
        println!("Parity bits:    {}", r.parity_count);
        println!("Codeword:       {} ({} bits)", r.codeword, r.codeword.len());
        println!();
        println!("  {}", render::ruler(r.codeword.len()));
        println!("  {}", render::bits(&r.codeword, &layout, &[]));
        println!("  {}", render::roles(&layout));
    })
}
