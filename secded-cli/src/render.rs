//! Terminal rendering of codewords

use colored::*;
use secded_core::{BitRole, Codeword, ParityLayout};

/// Render a codeword bit by bit, coloured by role
///
/// Data bits are plain, parity bits cyan, the overall parity bit magenta.
/// Positions listed in `highlight` are shown on a red background.
pub fn bits(codeword: &Codeword, layout: &ParityLayout, highlight: &[usize]) -> String {
    codeword
        .bits()
        .iter()
        .by_vals()
        .enumerate()
        .map(|(idx, bit)| {
            let pos = idx + 1;
            let symbol = if bit { "1" } else { "0" };
            let styled = match layout.role(pos) {
                Some(BitRole::Parity) => symbol.cyan(),
                Some(BitRole::OverallParity) => symbol.magenta(),
                _ => symbol.normal(),
            };
            if highlight.contains(&pos) {
                styled.on_red().to_string()
            } else {
                styled.to_string()
            }
        })
        .collect()
}

/// Position ruler aligned with [`bits`], last digit of each position
pub fn ruler(len: usize) -> String {
    (1..=len)
        .map(|pos| char::from(b'0' + (pos % 10) as u8))
        .collect()
}

/// One-letter role legend aligned with [`bits`]: `D`, `P` or `O`
pub fn roles(layout: &ParityLayout) -> String {
    layout
        .roles()
        .into_iter()
        .map(|role| match role {
            BitRole::Data => 'D',
            BitRole::Parity => 'P',
            BitRole::OverallParity => 'O',
        })
        .collect()
}
