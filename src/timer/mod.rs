//! The concurrent study timer.
//!
//! Three activities share one session:
//! - a deadline tracker that decides when the session ends
//! - an interval notifier that reminds the user to take breaks
//! - a progress reporter that shows elapsed time
//!
//! All three run as tasks on a single thread and only yield at their sleeps.

pub mod coordinator;
pub mod deadline;
pub mod notifier;
pub mod progress;
pub mod session;

use std::time::Duration;

pub use coordinator::{Activity, SessionCoordinator, SessionOutcome, COMPLETE_MESSAGE};
pub use deadline::DeadlineTracker;
pub use notifier::{IntervalNotifier, WaitRange, BREAK_MESSAGE, STARTED_MESSAGE};
pub use progress::ProgressReporter;
pub use session::{ActiveWatch, NotificationEvent, ProgressTick, Session, SessionState};

use crate::config::Config;
use crate::error::StudyError;

/// Runtime settings for the timer core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Length of one tick for the deadline tracker and progress reporter.
    pub tick: Duration,
    /// Range of waits between break reminders.
    pub break_range: WaitRange,
}

impl SessionSettings {
    /// One-second ticks.
    pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

    /// Build settings from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Config` if the configured break range is invalid.
    pub fn from_config(config: &Config) -> Result<Self, StudyError> {
        Ok(Self {
            tick: Self::DEFAULT_TICK,
            break_range: WaitRange::new(config.breaks.min_wait_secs, config.breaks.max_wait_secs)?,
        })
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            tick: Self::DEFAULT_TICK,
            break_range: WaitRange::DEFAULT,
        }
    }
}
