//! Line protocol rendering of search events.

use std::io::{self, Write};

use primescan_core::{SearchEvent, SearchReporter};
use tracing::debug;

/// Render an event as its stdout line.
///
/// Returns `None` for events that belong on stderr.
pub fn render(event: &SearchEvent) -> Option<String> {
    let line = match *event {
        SearchEvent::Resumed {
            last_prime,
            predecessor,
        } => format!(
            "Loaded checkpoint. Last prime: {}, predecessor: {}",
            last_prime, predecessor
        ),
        SearchEvent::FreshStart {
            first_prime,
            predecessor,
        } => format!(
            "Starting fresh. First prime: {}, predecessor: {}",
            first_prime, predecessor
        ),
        SearchEvent::Progress { prime } => format!("PROGRESS:{}", prime),
        SearchEvent::CheckpointSaved { prime } => format!("Checkpoint saved at prime {}", prime),
        SearchEvent::FinalCheckpointSaved { .. } => "Final checkpoint saved.".to_string(),
        SearchEvent::CheckpointFailed { .. } => return None,
    };
    Some(line)
}

/// Writes events as protocol lines, flushing after each one
pub struct ProtocolReporter<W: Write> {
    out: W,
}

impl<W: Write> ProtocolReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }
}

impl<W: Write> SearchReporter for ProtocolReporter<W> {
    fn report(&mut self, event: SearchEvent) {
        match render(&event) {
            Some(line) => {
                if let Err(e) = self.write_line(&line) {
                    debug!("Failed to write {:?}: {}", line, e);
                }
            }
            None => {
                if let SearchEvent::CheckpointFailed { prime } = event {
                    eprintln!("Failed to save checkpoint at prime {}", prime);
                }
            }
        }
    }
}
