//! The resumable search loop.
//!
//! [`Searcher`] pulls primes from a [`PrimeCursor`], slides them through the
//! window and evaluates the detector after every step. It moves through
//! [`SearchPhase`]s:
//!
//! - `Init`: load a checkpoint or position the cursor at `start`
//! - `Filling`: read the first `WINDOW_SIZE` primes (fresh start only)
//! - `Running`: evaluate the starting window, then slide, detect, report
//!   progress and checkpoint on a timer
//! - `Terminated` / `Cancelled`: final checkpoint, then return
//!
//! Cancellation is polled once per iteration through a [`ShutdownSignal`].

mod reporter;

use std::sync::Arc;
use std::time::Instant;

use strum::Display;
use tracing::{debug, info, warn};

use crate::checkpoint::{CheckpointStore, SearchState};
use crate::config::SearchConfig;
use crate::cursor::PrimeCursor;
use crate::detector::{MatchInterval, detect};
use crate::shutdown::ShutdownSignal;
use crate::window::PrimeWindow;

pub use reporter::{NullReporter, SearchEvent, SearchReporter};

/// Lifecycle of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SearchPhase {
    Init,
    Filling,
    Running,
    Terminated,
    Cancelled,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A window matched; the search stops at the first one
    Found(MatchInterval),
    /// No match up to `end`
    Exhausted,
    /// Shutdown was requested
    Cancelled,
}

/// Result of [`Searcher::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSummary {
    pub outcome: SearchOutcome,
    /// Primes slid into the window during this run
    pub primes_processed: u64,
    /// Newest prime in the window when the run ended
    pub last_prime: Option<u64>,
    /// Whether the run continued from a checkpoint
    pub resumed: bool,
}

/// Window plus the primes on either side of it
#[derive(Debug)]
struct Frontier {
    window: PrimeWindow,
    /// Prime before the window's first element, 0 if none
    predecessor: u64,
    /// Prime after the window's last element
    successor: Option<u64>,
}

impl Frontier {
    fn state(&self) -> Option<SearchState> {
        SearchState::capture(&self.window, self.predecessor)
    }

    fn detect(&self) -> Option<MatchInterval> {
        // Past the last representable prime nothing bounds the interval on the right
        detect(
            &self.window,
            self.predecessor,
            self.successor.unwrap_or(u64::MAX),
        )
    }
}

/// Drives one search over `[config.start, config.end]`
pub struct Searcher<C: PrimeCursor> {
    config: SearchConfig,
    cursor: C,
    shutdown: Arc<ShutdownSignal>,
    store: Option<CheckpointStore>,
    phase: SearchPhase,
}

impl<C: PrimeCursor> Searcher<C> {
    pub fn new(config: SearchConfig, cursor: C, shutdown: Arc<ShutdownSignal>) -> Self {
        let store = config.checkpoint_path().map(CheckpointStore::new);
        Self {
            config,
            cursor,
            shutdown,
            store,
            phase: SearchPhase::Init,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    fn transition(&mut self, next: SearchPhase) {
        debug!("Search phase: {} -> {}", self.phase, next);
        self.phase = next;
    }

    /// Run until a match, the end of the range, or cancellation.
    ///
    /// With checkpointing enabled a final checkpoint is written before
    /// returning, whatever the outcome.
    pub fn run(&mut self, reporter: &mut dyn SearchReporter) -> SearchSummary {
        self.phase = SearchPhase::Init;

        let (frontier, resumed) = match self.resume(reporter) {
            Some(frontier) => (Some(frontier), true),
            None => (self.fill(reporter), false),
        };
        let Some(mut frontier) = frontier else {
            info!("Fewer than a full window of primes from {}", self.config.start);
            self.transition(SearchPhase::Terminated);
            return SearchSummary {
                outcome: SearchOutcome::Exhausted,
                primes_processed: 0,
                last_prime: None,
                resumed,
            };
        };
        self.transition(SearchPhase::Running);

        let (outcome, primes_processed) = self.advance(&mut frontier, reporter);

        self.transition(match outcome {
            SearchOutcome::Cancelled => SearchPhase::Cancelled,
            _ => SearchPhase::Terminated,
        });
        if let Some(state) = frontier.state()
            && self.save(&state, reporter)
        {
            reporter.report(SearchEvent::FinalCheckpointSaved {
                prime: state.last_emitted_prime,
            });
        }

        SearchSummary {
            outcome,
            primes_processed,
            last_prime: frontier.window.back(),
            resumed,
        }
    }

    /// Restore the frontier from a checkpoint, if one is usable
    fn resume(&mut self, reporter: &mut dyn SearchReporter) -> Option<Frontier> {
        let state = self.store.as_ref()?.load()?;

        // Strictly after the last prime so the successor lies beyond the window
        self.cursor.jump_to(state.last_emitted_prime.saturating_add(1));
        let successor = self.cursor.next_prime();

        info!(
            "Resuming at prime {} (predecessor {})",
            state.last_emitted_prime, state.predecessor
        );
        reporter.report(SearchEvent::Resumed {
            last_prime: state.last_emitted_prime,
            predecessor: state.predecessor,
        });

        Some(Frontier {
            window: state.to_window(),
            predecessor: state.predecessor,
            successor,
        })
    }

    /// Fresh start: fill the window with the first primes `>= start`
    fn fill(&mut self, reporter: &mut dyn SearchReporter) -> Option<Frontier> {
        self.transition(SearchPhase::Filling);
        let start = self.config.start;

        self.cursor.jump_to(start);
        let predecessor = self.cursor.prev_prime().unwrap_or(0);

        self.cursor.jump_to(start);
        let mut window = PrimeWindow::new();
        while !window.is_full() {
            window.slide(self.cursor.next_prime()?);
        }
        let successor = self.cursor.next_prime();

        let first_prime = window.front()?;
        info!(
            "Starting fresh at prime {} (predecessor {})",
            first_prime, predecessor
        );
        reporter.report(SearchEvent::FreshStart {
            first_prime,
            predecessor,
        });

        Some(Frontier {
            window,
            predecessor,
            successor,
        })
    }

    /// The running phase. Returns the outcome and the number of primes slid.
    fn advance(
        &mut self,
        frontier: &mut Frontier,
        reporter: &mut dyn SearchReporter,
    ) -> (SearchOutcome, u64) {
        let end = self.config.end;
        let progress_step = self.config.progress_step.max(1);

        // The starting window, filled or restored, is evaluated before any slide
        if frontier.window.back().is_some_and(|last| last > end) {
            return (SearchOutcome::Exhausted, 0);
        }
        if let Some(found) = frontier.detect() {
            return (SearchOutcome::Found(found), 0);
        }

        let mut processed = 0u64;
        let mut last_save = Instant::now();
        loop {
            if self.shutdown.is_shutdown() {
                info!("Shutdown requested after {} primes", processed);
                return (SearchOutcome::Cancelled, processed);
            }

            let Some(p) = frontier.successor.filter(|&p| p <= end) else {
                return (SearchOutcome::Exhausted, processed);
            };
            frontier.successor = self.cursor.next_prime();
            if let Some(evicted) = frontier.window.slide(p) {
                frontier.predecessor = evicted;
            }
            processed += 1;

            if let Some(found) = frontier.detect() {
                info!("Match at {} (window ends at prime {})", found.start, p);
                return (SearchOutcome::Found(found), processed);
            }

            if processed % progress_step == 0 {
                reporter.report(SearchEvent::Progress { prime: p });
            }

            if self.store.is_some() && last_save.elapsed() >= self.config.save_interval {
                if let Some(state) = frontier.state()
                    && self.save(&state, reporter)
                {
                    reporter.report(SearchEvent::CheckpointSaved { prime: p });
                }
                last_save = Instant::now();
            }
        }
    }

    /// Best-effort checkpoint write; failures are logged and reported, never fatal
    fn save(&self, state: &SearchState, reporter: &mut dyn SearchReporter) -> bool {
        let Some(store) = &self.store else {
            return false;
        };
        match store.save(state) {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    "Failed to save checkpoint to {}: {}",
                    store.path().display(),
                    e
                );
                reporter.report(SearchEvent::CheckpointFailed {
                    prime: state.last_emitted_prime,
                });
                false
            }
        }
    }
}
