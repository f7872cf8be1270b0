//! Verify command implementation.

use anyhow::Result;
use primescan_core::pattern::WINDOW_SIZE;
use primescan_core::{SieveCursor, Verification, verify_start};

/// Run the verify command; returns whether every start verified
pub fn run(starts: &[u64], json: bool) -> Result<bool> {
    let mut cursor = SieveCursor::new();
    let results: Vec<Verification> = starts
        .iter()
        .map(|&start| verify_start(&mut cursor, start))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            println!("{}", describe(result));
        }
    }

    Ok(results.iter().all(|r| r.verified))
}

/// One human-readable line per verification
pub fn describe(result: &Verification) -> String {
    let count = if result.prime_count > WINDOW_SIZE {
        format!("more than {}", WINDOW_SIZE)
    } else {
        result.prime_count.to_string()
    };
    let verdict = if result.verified { "OK" } else { "FAIL" };
    format!(
        "N={}: {} primes in [{}, {}] {}",
        result.start, count, result.start, result.end, verdict
    )
}
