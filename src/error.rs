//! Error types for study-timer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that end the program.
///
/// Invalid input is not represented here: the prompt re-asks until it gets
/// a usable number (see [`crate::cli::InputError`]).
#[derive(Debug, Error)]
pub enum StudyError {
    /// Configuration could not be read, parsed, or failed validation.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal or process I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input was closed while waiting for a session length.
    #[error("input closed while waiting for a study length")]
    InputClosed,

    /// A configured sound file does not exist.
    #[error("sound file not found: {}", .0.display())]
    MissingSound(PathBuf),

    /// The async runtime or one of its tasks failed.
    #[error("timer runtime failure: {0}")]
    Runtime(String),
}

impl From<tokio::task::JoinError> for StudyError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::Runtime(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StudyError::Config("bad range".to_string()).to_string(),
            "configuration error: bad range"
        );
        assert_eq!(
            StudyError::MissingSound(PathBuf::from("/tmp/notify.wav")).to_string(),
            "sound file not found: /tmp/notify.wav"
        );
        assert_eq!(
            StudyError::InputClosed.to_string(),
            "input closed while waiting for a study length"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: StudyError = io.into();
        assert!(matches!(err, StudyError::Io(_)));
    }
}
