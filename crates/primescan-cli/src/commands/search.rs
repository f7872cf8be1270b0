//! Range search command.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use primescan_core::{
    SearchConfig, SearchOutcome, SearchSummary, Searcher, ShutdownSignal, SieveCursor,
};
use tracing::info;

use crate::reporter::ProtocolReporter;

/// Run the search command
pub fn run(start: u64, end: u64, checkpoint: Option<String>, save_interval: u64) -> Result<()> {
    let config = SearchConfig::builder()
        .range(start, end)
        .checkpoint_path(checkpoint.unwrap_or_default())
        .save_interval(Duration::from_secs(save_interval))
        .build();

    // SIGINT and SIGTERM only request a stop; the loop checkpoints and returns
    let shutdown = Arc::new(ShutdownSignal::new());
    let shutdown_handler = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        info!("Received shutdown signal, stopping...");
        shutdown_handler.trigger();
    })?;

    let summary = execute(config, shutdown, io::stdout())?;
    info!(
        "Search finished: {:?} after {} primes",
        summary.outcome, summary.primes_processed
    );
    Ok(())
}

/// Print the startup banner, run the search and print the result to `out`
pub fn execute<W: Write>(
    config: SearchConfig,
    shutdown: Arc<ShutdownSignal>,
    mut out: W,
) -> Result<SearchSummary> {
    writeln!(out, "Searching from {} to {}", config.start, config.end)?;
    match config.checkpoint_path() {
        Some(path) => writeln!(out, "Checkpoint: {}", path.display())?,
        None => writeln!(out, "Checkpoint: disabled")?,
    }
    writeln!(out, "Save interval: {} seconds", config.save_interval.as_secs())?;
    writeln!(out, "Press Ctrl+C to interrupt gracefully.")?;
    writeln!(out, "Progress output every {} primes.", config.progress_step)?;
    out.flush()?;

    let mut searcher = Searcher::new(config, SieveCursor::new(), shutdown);
    let summary = searcher.run(&mut ProtocolReporter::new(&mut out));

    if let SearchOutcome::Found(found) = summary.outcome {
        writeln!(out, "SUCCESS:{}", found.start)?;
        out.flush()?;
    }
    Ok(summary)
}
