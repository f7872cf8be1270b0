//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use primescan_core::pattern::DEFAULT_SAVE_INTERVAL_SECS;

#[derive(Parser, Debug)]
#[command(name = "primescan", version)]
#[command(about = "Search for 2004-integer runs holding exactly 12 primes")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub search: SearchArgs,
}

/// Positional arguments of the default search mode
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// First integer of the search range
    #[arg(value_name = "START")]
    pub start: Option<u64>,

    /// Last integer of the search range (inclusive)
    #[arg(value_name = "END")]
    pub end: Option<u64>,

    /// Checkpoint file; empty disables checkpointing
    #[arg(value_name = "CHECKPOINT_PATH")]
    pub checkpoint: Option<String>,

    /// Seconds between periodic checkpoint saves
    #[arg(value_name = "SAVE_INTERVAL_SECONDS", default_value_t = DEFAULT_SAVE_INTERVAL_SECS)]
    pub save_interval: u64,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that each start opens a run with exactly 12 primes
    Verify {
        #[arg(required = true, value_name = "N")]
        starts: Vec<u64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Verify and summarise the starts listed in a solutions file
    Analyze {
        file: PathBuf,

        /// Only consider starts within --radius of this one
        #[arg(long, requires = "radius")]
        center: Option<u64>,

        /// Half-width of the neighbourhood around --center
        #[arg(long, requires = "center")]
        radius: Option<u64>,

        /// Write the verified starts to this file as N=<n> lines
        #[arg(long, value_name = "PATH")]
        export: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Randomly sample starts near a known one and keep those that verify
    Sample {
        /// Known start to sample around
        #[arg(long)]
        center: u64,

        /// Candidates are drawn from [center - radius, center + radius]
        #[arg(long, default_value_t = 100_000_000)]
        radius: u64,

        /// Number of candidates to draw
        #[arg(long, default_value_t = 50_000)]
        samples: u64,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// File the verified starts are appended to
        #[arg(long, value_name = "PATH", default_value = "local_solutions.txt")]
        output: PathBuf,
    },
}
