//! Observational events emitted by the search loop.

/// Something the loop wants the outside world to know about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    /// Resumed from a checkpoint
    Resumed { last_prime: u64, predecessor: u64 },
    /// Fresh start; `predecessor` is 0 when no prime precedes `first_prime`
    FreshStart { first_prime: u64, predecessor: u64 },
    /// Another `progress_step` primes processed
    Progress { prime: u64 },
    /// Periodic checkpoint written
    CheckpointSaved { prime: u64 },
    /// Checkpoint written on the way out
    FinalCheckpointSaved { prime: u64 },
    /// A checkpoint write failed; the search carries on
    CheckpointFailed { prime: u64 },
}

/// Receives [`SearchEvent`]s; reporting never influences the search
pub trait SearchReporter {
    fn report(&mut self, event: SearchEvent);
}

/// Collects events, mostly useful in tests
impl SearchReporter for Vec<SearchEvent> {
    fn report(&mut self, event: SearchEvent) {
        self.push(event);
    }
}

/// Discards all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl SearchReporter for NullReporter {
    fn report(&mut self, _event: SearchEvent) {}
}
