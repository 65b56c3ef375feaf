use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::SeedableRng;
use tracing::debug;

use super::corrupt::{self, CorruptReport};
use crate::{emit, OutputFormat};

/// Pick `count` distinct positions in `1..=len`
///
/// With a seed the choice is reproducible; without one it comes from the
/// OS entropy source.
pub fn pick_positions(len: usize, count: usize, seed: Option<u64>) -> Result<Vec<usize>> {
    if count == 0 {
        bail!("Error count must be at least 1");
    }
    if count > len {
        bail!("Cannot pick {} distinct positions from a {}-bit codeword", count, len);
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut positions: Vec<usize> = sample(&mut rng, len, count)
        .into_iter()
        .map(|idx| idx + 1)
        .collect();
    positions.sort_unstable();

    debug!("Picked positions {:?} (seed {:?})", positions, seed);
    Ok(positions)
}

/// Flip `count` random distinct positions of a codeword
pub fn run(codeword: &str, count: usize, seed: Option<u64>) -> Result<CorruptReport> {
    let len = codeword.trim().chars().count();
    let positions = pick_positions(len, count, seed)?;
    corrupt::run(codeword, &positions)
}

pub fn execute(codeword: &str, count: usize, seed: Option<u64>, format: OutputFormat) -> Result<()> {
    let report = run(codeword, count, seed)?;
    emit(&report, format, corrupt::print_text)
}
