use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation token.
///
/// Signal handlers only call [`trigger`](Self::trigger); the search loop
/// polls [`is_shutdown`](Self::is_shutdown) once per iteration.
#[derive(Debug)]
pub struct ShutdownSignal {
    shutdown: AtomicBool,
}

impl ShutdownSignal {
    /// Create a new shutdown signal in the non-shutdown state.
    pub fn new() -> Self {
        Self {
            shutdown: AtomicBool::new(false),
        }
    }

    /// Request a graceful stop.
    pub fn trigger(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    /// Check if shutdown has been triggered.
    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
