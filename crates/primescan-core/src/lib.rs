//! # primescan-core
//!
//! Core library for the prime cluster search.
//!
//! This crate provides:
//! - Bidirectional prime enumeration (segmented sieve cursor)
//! - A fixed-size sliding window over consecutive primes
//! - Detection of integer intervals holding exactly one window of primes
//! - Resumable search with atomic binary checkpoints and cooperative cancellation
//! - Verification, analysis and local random sampling of interval starts

pub mod analyze;
pub mod checkpoint;
pub mod config;
pub mod cursor;
pub mod detector;
pub mod error;
pub mod sample;
pub mod search;
pub mod shutdown;
pub mod verify;
pub mod window;

pub use analyze::{
    GapStats, Neighbourhood, SolutionReport, analyze_file, analyze_solutions, parse_solutions,
    write_solutions,
};
pub use checkpoint::{CheckpointStore, SearchState};
pub use config::{SearchConfig, SearchConfigBuilder, pattern};
pub use cursor::{PrimeCursor, SieveCursor};
pub use detector::{MatchInterval, detect, match_bounds};
pub use error::{Error, Result};
pub use search::{
    NullReporter, SearchEvent, SearchOutcome, SearchPhase, SearchReporter, SearchSummary,
    Searcher,
};
pub use sample::{SampleSummary, sample_near, sampler_rng};
pub use shutdown::ShutdownSignal;
pub use verify::{Verification, count_primes_between, verify_start};
pub use window::{PrimeWindow, SlidingWindow};
