//! Sample command implementation.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use primescan_core::{Neighbourhood, ShutdownSignal, SieveCursor, sample_near, sampler_rng};
use tracing::info;

/// Run the sample command, appending verified starts to `output`
pub fn run(
    neighbourhood: Neighbourhood,
    samples: u64,
    seed: Option<u64>,
    output: &Path,
) -> Result<()> {
    let shutdown = Arc::new(ShutdownSignal::new());
    let shutdown_handler = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        info!("Received shutdown signal, stopping...");
        shutdown_handler.trigger();
    })?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(output)
        .with_context(|| format!("Failed to open {}", output.display()))?;

    println!(
        "Sampling {} starts within {} of {}",
        samples, neighbourhood.radius, neighbourhood.center
    );
    println!("Appending verified starts to {}", output.display());

    let mut cursor = SieveCursor::new();
    let mut rng = sampler_rng(seed);
    let summary = sample_near(
        &mut cursor,
        &mut rng,
        neighbourhood,
        samples,
        &shutdown,
        &mut file,
    )?;

    for n in &summary.hits {
        println!("N={}", n);
    }
    println!(
        "Found {} verified starts in {} samples ({} skipped{})",
        summary.hits.len(),
        summary.drawn,
        summary.skipped,
        if summary.cancelled { ", interrupted" } else { "" }
    );
    Ok(())
}
