//! Checkpoint persistence for resumable searches.
//!
//! The file is a fixed-width little-endian record:
//!
//! ```text
//! [0..8)    last emitted prime
//! [8..16)   predecessor of the window's first prime (0 = none)
//! [16..)    window contents, WINDOW_SIZE x u64, ascending
//! ```
//!
//! Saves go through a temporary sibling file and a rename so an interrupted
//! write leaves the previous checkpoint intact.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::pattern::{CHECKPOINT_SIZE, WINDOW_SIZE};
use crate::error::{Error, Result};
use crate::window::PrimeWindow;

/// The minimal state needed to resume a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchState {
    pub last_emitted_prime: u64,
    pub predecessor: u64,
    pub window: [u64; WINDOW_SIZE],
}

impl SearchState {
    /// Capture the state of a full window.
    ///
    /// Returns `None` while the window is still filling.
    pub fn capture(window: &PrimeWindow, predecessor: u64) -> Option<Self> {
        let contents = window.snapshot()?;
        Some(Self {
            last_emitted_prime: contents[WINDOW_SIZE - 1],
            predecessor,
            window: contents,
        })
    }

    pub fn to_window(&self) -> PrimeWindow {
        PrimeWindow::restore(self.window)
    }

    pub fn encode(&self) -> [u8; CHECKPOINT_SIZE] {
        let mut buf = [0u8; CHECKPOINT_SIZE];
        buf[0..8].copy_from_slice(&self.last_emitted_prime.to_le_bytes());
        buf[8..16].copy_from_slice(&self.predecessor.to_le_bytes());
        for (chunk, value) in buf[16..].chunks_exact_mut(8).zip(self.window) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        buf
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != CHECKPOINT_SIZE {
            return Err(Error::CheckpointSize {
                expected: CHECKPOINT_SIZE,
                actual: bytes.len(),
            });
        }

        let mut words = bytes.chunks_exact(8).map(|chunk| {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            u64::from_le_bytes(word)
        });
        let mut next = || {
            words
                .next()
                .ok_or_else(|| Error::CorruptCheckpoint("record ended early".to_string()))
        };

        let last_emitted_prime = next()?;
        let predecessor = next()?;
        let mut window = [0u64; WINDOW_SIZE];
        for slot in window.iter_mut() {
            *slot = next()?;
        }

        let state = Self {
            last_emitted_prime,
            predecessor,
            window,
        };
        state.validate()?;
        Ok(state)
    }

    /// Check the ordering invariants a resumed search relies on
    pub fn validate(&self) -> Result<()> {
        if !self.window.windows(2).all(|w| w[0] < w[1]) {
            return Err(Error::CorruptCheckpoint(
                "window is not strictly ascending".to_string(),
            ));
        }
        if self.predecessor != 0 && self.predecessor >= self.window[0] {
            return Err(Error::CorruptCheckpoint(format!(
                "predecessor {} is not below window start {}",
                self.predecessor, self.window[0]
            )));
        }
        if self.last_emitted_prime != self.window[WINDOW_SIZE - 1] {
            return Err(Error::CorruptCheckpoint(format!(
                "last prime {} does not end the window ({})",
                self.last_emitted_prime,
                self.window[WINDOW_SIZE - 1]
            )));
        }
        Ok(())
    }
}

/// Reads and writes one checkpoint file
#[derive(Debug, Clone)]
pub struct CheckpointStore {
    path: PathBuf,
}

impl CheckpointStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(bytes)?;
        file.sync_all()
    }

    /// Write `state`, replacing any previous checkpoint
    pub fn save(&self, state: &SearchState) -> Result<()> {
        let tmp_path = self.tmp_path();
        let written = Self::write_synced(&tmp_path, &state.encode())
            .and_then(|()| fs::rename(&tmp_path, &self.path));
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&tmp_path)
                && cleanup.kind() != std::io::ErrorKind::NotFound
            {
                debug!("Could not remove {}: {}", tmp_path.display(), cleanup);
            }
            return Err(e.into());
        }
        debug!(
            "Checkpoint written to {} at prime {}",
            self.path.display(),
            state.last_emitted_prime
        );
        Ok(())
    }

    /// Read and validate the checkpoint
    pub fn try_load(&self) -> Result<SearchState> {
        let bytes = fs::read(&self.path)?;
        SearchState::decode(&bytes)
    }

    /// Load the checkpoint, treating any failure as "no checkpoint"
    pub fn load(&self) -> Option<SearchState> {
        match self.try_load() {
            Ok(state) => {
                info!(
                    "Loaded checkpoint from {} (last prime {})",
                    self.path.display(),
                    state.last_emitted_prime
                );
                Some(state)
            }
            Err(e) if e.is_not_found() => {
                debug!("No checkpoint at {}", self.path.display());
                None
            }
            Err(e) => {
                warn!("Ignoring checkpoint {}: {}", self.path.display(), e);
                None
            }
        }
    }
}
