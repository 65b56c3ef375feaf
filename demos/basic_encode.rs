//! Basic encoding example

use secded_core::{encode, ParityLayout, Payload};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Secded Basic Encoding Example\n");

    for s in [
        "10110010",
        "1100101011110000",
        "11011110101011011011111011101111",
    ] {
        let payload: Payload = s.parse()?;
        let layout = ParityLayout::new(payload.width());
        let codeword = encode(&payload);

        println!(
            "{:>2}-bit payload {} -> {} ({} parity bits + overall parity)",
            payload.len(),
            payload,
            codeword,
            layout.parity_count()
        );
    }

    Ok(())
}
