//! Search configuration.
//!
//! Pattern constants are fixed at compile time; everything that varies per
//! run (range bounds, checkpoint location, save cadence) goes through
//! [`SearchConfig`].

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Constants describing the target pattern and loop cadence
pub mod pattern {
    /// Number of primes tracked by the sliding window
    pub const WINDOW_SIZE: usize = 12;

    /// Length of the integer run that must contain exactly the window's primes
    pub const INTERVAL_LEN: u64 = 2004;

    /// Emit a progress line every this many primes
    pub const PROGRESS_STEP: u64 = 10_000_000;

    /// Default seconds between periodic checkpoint saves
    pub const DEFAULT_SAVE_INTERVAL_SECS: u64 = 3600;

    /// Size in bytes of a serialized checkpoint: two scalars plus the window
    pub const CHECKPOINT_SIZE: usize = 16 + 8 * WINDOW_SIZE;
}

/// Configuration for a single search run
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Inclusive lower bound of the search
    pub start: u64,
    /// Inclusive upper bound; primes beyond it end the search
    pub end: u64,
    /// Checkpoint file, `None` disables checkpointing and resume
    pub checkpoint_path: Option<PathBuf>,
    /// Minimum wall-clock time between periodic checkpoint saves
    pub save_interval: Duration,
    /// Primes processed between progress reports
    pub progress_step: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            start: 0,
            end: u64::MAX,
            checkpoint_path: None,
            save_interval: Duration::from_secs(pattern::DEFAULT_SAVE_INTERVAL_SECS),
            progress_step: pattern::PROGRESS_STEP,
        }
    }
}

impl SearchConfig {
    /// Create a new configuration builder
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }

    pub fn checkpoint_path(&self) -> Option<&Path> {
        self.checkpoint_path.as_deref()
    }

    pub fn checkpointing_enabled(&self) -> bool {
        self.checkpoint_path.is_some()
    }
}

/// Builder for SearchConfig
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    start: Option<u64>,
    end: Option<u64>,
    checkpoint_path: Option<PathBuf>,
    save_interval: Option<Duration>,
    progress_step: Option<u64>,
}

impl SearchConfigBuilder {
    /// Set the inclusive range to search
    pub fn range(mut self, start: u64, end: u64) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Enable checkpointing to the given file.
    ///
    /// An empty path leaves checkpointing disabled.
    pub fn checkpoint_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        let path = path.into();
        self.checkpoint_path = if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        };
        self
    }

    /// Set the interval between periodic checkpoint saves
    pub fn save_interval(mut self, interval: Duration) -> Self {
        self.save_interval = Some(interval);
        self
    }

    /// Set the progress reporting cadence (clamped to at least 1)
    pub fn progress_step(mut self, step: u64) -> Self {
        self.progress_step = Some(step.max(1));
        self
    }

    /// Build the configuration
    pub fn build(self) -> SearchConfig {
        let default = SearchConfig::default();
        SearchConfig {
            start: self.start.unwrap_or(default.start),
            end: self.end.unwrap_or(default.end),
            checkpoint_path: self.checkpoint_path,
            save_interval: self.save_interval.unwrap_or(default.save_interval),
            progress_step: self.progress_step.unwrap_or(default.progress_step),
        }
    }
}
