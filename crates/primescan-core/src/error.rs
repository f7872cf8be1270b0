use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Checkpoint has unexpected size: expected {expected} bytes, got {actual}")]
    CheckpointSize { expected: usize, actual: usize },

    #[error("Corrupt checkpoint: {0}")]
    CorruptCheckpoint(String),

    #[error("Invalid solution entry: {0}")]
    InvalidSolution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.is_not_found());

        let other_io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err2 = Error::Io(other_io_err);
        assert!(!err2.is_not_found());

        let size_err = Error::CheckpointSize {
            expected: 112,
            actual: 40,
        };
        assert!(!size_err.is_not_found());
    }

    #[test]
    fn test_checkpoint_size_message() {
        let err = Error::CheckpointSize {
            expected: 112,
            actual: 40,
        };
        assert_eq!(
            err.to_string(),
            "Checkpoint has unexpected size: expected 112 bytes, got 40"
        );
    }
}
