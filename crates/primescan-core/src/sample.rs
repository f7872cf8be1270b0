//! Random sampling of interval starts near a known solution.
//!
//! Candidates are drawn uniformly from a [`Neighbourhood`], verified by
//! counting primes, and the hits are written out as `N=<n>` lines that
//! [`analyze`](crate::analyze) reads back.

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use crate::analyze::Neighbourhood;
use crate::cursor::PrimeCursor;
use crate::error::Result;
use crate::shutdown::ShutdownSignal;
use crate::verify::verify_start;

/// Samples between progress log lines
const LOG_EVERY: u64 = 100_000;

/// Outcome of a sampling run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleSummary {
    /// Candidates drawn, including skipped ones
    pub drawn: u64,
    /// Candidates that fell outside `1..=u64::MAX`
    pub skipped: u64,
    /// Verified starts in the order they were found
    pub hits: Vec<u64>,
    /// Whether the run stopped early on shutdown
    pub cancelled: bool,
}

/// Seeded generator, or one seeded from the OS when `seed` is `None`
pub fn sampler_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draw `samples` starts uniformly from `neighbourhood` and verify each.
///
/// Every verified start is appended to `sink` as an `N=<n>` line and
/// flushed immediately. Candidates below 1 or beyond `u64::MAX` are
/// skipped but still count as drawn.
pub fn sample_near<C, R, W>(
    cursor: &mut C,
    rng: &mut R,
    neighbourhood: Neighbourhood,
    samples: u64,
    shutdown: &ShutdownSignal,
    sink: &mut W,
) -> Result<SampleSummary>
where
    C: PrimeCursor + ?Sized,
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    let radius = i128::from(neighbourhood.radius);
    let center = i128::from(neighbourhood.center);
    let mut summary = SampleSummary {
        drawn: 0,
        skipped: 0,
        hits: Vec::new(),
        cancelled: false,
    };

    for i in 0..samples {
        if shutdown.is_shutdown() {
            info!("Shutdown requested after {} samples", i);
            summary.cancelled = true;
            break;
        }
        summary.drawn += 1;

        let candidate = center + rng.gen_range(-radius..=radius);
        let Ok(candidate) = u64::try_from(candidate) else {
            summary.skipped += 1;
            continue;
        };
        if candidate == 0 {
            summary.skipped += 1;
            continue;
        }

        if verify_start(cursor, candidate).verified {
            writeln!(sink, "N={}", candidate)?;
            sink.flush()?;
            info!("Verified start {}", candidate);
            summary.hits.push(candidate);
        }

        if (i + 1) % LOG_EVERY == 0 {
            info!(
                "Sampled {}/{} ({} hits)",
                i + 1,
                samples,
                summary.hits.len()
            );
        }
    }
    Ok(summary)
}
