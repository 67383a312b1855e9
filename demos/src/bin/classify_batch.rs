//! # classify_batch
//!
//! Classifies a small fixed batch (including an empty string, a missing entry
//! and an ill-formed byte sequence) and prints the codes per input.
//!
//! Run with:
//! ```sh
//! cargo run --bin classify_batch
//! ```

use anyhow::Result;
use chartype_batch::{BatchEngine, BatchRequest, CharTypes};

fn main() -> Result<()> {
    // ── 1. Build the batch ────────────────────────────────────────────────────
    let inputs: Vec<Option<&[u8]>> = vec![
        Some(b"A".as_slice()),
        Some(b"".as_slice()),
        None,
        Some(b"1a".as_slice()),
        Some("€ 100".as_bytes()),
        Some(b"ok\xFF".as_slice()),
    ];

    // ── 2. Classify ───────────────────────────────────────────────────────────
    let engine = BatchEngine::default();
    let Some(result) = engine.classify(BatchRequest::new(inputs.clone()))? else {
        println!("(no inputs)");
        return Ok(());
    };

    // ── 3. Print ──────────────────────────────────────────────────────────────
    for (input, types) in inputs.iter().zip(&result.results) {
        let label = match input {
            Some(bytes) => format!("{:?}", String::from_utf8_lossy(bytes)),
            None => "NA".to_string(),
        };
        match types {
            CharTypes::Missing => println!("  {label:<12} → NA"),
            CharTypes::Codes(codes) => {
                let rendered: Vec<String> =
                    codes.iter().map(|c| format!("{}({})", c.code(), c)).collect();
                println!("  {label:<12} → [{}]", rendered.join(", "));
            }
        }
    }

    println!("\nstats: {}", serde_json::to_string(&result.stats)?);
    Ok(())
}
