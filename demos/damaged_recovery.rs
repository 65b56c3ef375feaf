//! Damage a codeword and recover it

use secded_core::{corrupt, decode, encode_str, ErrorClass};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Secded Damaged Recovery Example\n");

    let codeword = encode_str("10110010", 8)?;
    println!("Codeword:        {}", codeword);

    // Single error: corrected
    let damaged = corrupt(&codeword, &[6])?;
    let result = decode(&damaged, 8)?;
    println!("\nFlipped bit 6:   {}", damaged);
    println!("Syndrome:        {} ({})", result.syndrome, result.syndrome.value);
    println!("Result:          {}", result.classification);
    if let Some(corrected) = &result.corrected {
        println!("Corrected:       {}", corrected);
    }
    if let Some(payload) = result.payload() {
        println!("Payload:         {}", payload);
    }

    // Double error: detected only
    let damaged = corrupt(&codeword, &[2, 11])?;
    let result = decode(&damaged, 8)?;
    println!("\nFlipped 2 & 11:  {}", damaged);
    println!("Syndrome:        {} ({})", result.syndrome, result.syndrome.value);
    println!("Result:          {}", result.classification);
    assert_eq!(result.classification, ErrorClass::DoubleUncorrectable);

    Ok(())
}
