//! Capability traits the timer core depends on.
//!
//! The concrete terminal implementations live in [`crate::cli`] and
//! [`crate::output`]; tests substitute recording or mocked versions.

use crate::error::StudyError;

/// Source of validated session lengths.
#[cfg_attr(test, mockall::automock)]
pub trait InputProvider {
    /// Get the length of the next study session in minutes.
    ///
    /// Implementations re-prompt on invalid input and only return values
    /// that are at least the configured minimum.
    ///
    /// # Errors
    ///
    /// Returns an error if the input source fails or is closed.
    fn get_study_length(&mut self) -> Result<u32, StudyError>;
}

/// Destination for everything a session shows or plays.
///
/// All operations are fire-and-forget: there is no acknowledgement that a
/// cue finished playing.
#[cfg_attr(test, mockall::automock)]
pub trait OutputSink {
    /// Show a short status line, replacing the previous one.
    ///
    /// Called once per tick while a session runs.
    fn display(&self, text: &str);

    /// Print a message on its own line.
    fn message(&self, text: &str);

    /// Signal that it is time for a short break.
    fn notify_break(&self);

    /// Signal that the study session is over.
    fn notify_complete(&self);
}
