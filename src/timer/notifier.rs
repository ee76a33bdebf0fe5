//! Randomized break reminders.
//!
//! The notifier sleeps for a random number of seconds, then reminds the user
//! to take a break. Cancellation is best-effort and cooperative: the active
//! flag is only checked when a sleep completes, never while one is pending,
//! so a notifier can outlive its session by up to one full wait. The flag is
//! checked before a reminder is emitted, so a notifier that outlives its
//! session exits without a trailing break cue.

use std::rc::Rc;
use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;
use tracing::debug;

use super::session::{ActiveWatch, NotificationEvent};
use crate::core::OutputSink;
use crate::error::StudyError;

/// Line printed when the notifier starts.
pub const STARTED_MESSAGE: &str = "Random Timer Started";

/// Line printed before each break cue.
pub const BREAK_MESSAGE: &str = "Take a 10 second break";

/// Inclusive range of seconds to wait between break reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitRange {
    min_secs: u64,
    max_secs: u64,
}

impl WaitRange {
    /// Six to fifteen minutes.
    pub const DEFAULT: Self = Self {
        min_secs: 360,
        max_secs: 900,
    };

    /// Create a range, rejecting empty or zero-length waits.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Config` if `min_secs` is zero or greater than `max_secs`.
    pub fn new(min_secs: u64, max_secs: u64) -> Result<Self, StudyError> {
        if min_secs == 0 {
            return Err(StudyError::Config(
                "break wait must be at least one second".to_string(),
            ));
        }
        if min_secs > max_secs {
            return Err(StudyError::Config(format!(
                "break wait range is empty: {min_secs}s > {max_secs}s"
            )));
        }
        Ok(Self { min_secs, max_secs })
    }

    /// Shortest wait in seconds.
    #[must_use]
    pub const fn min_secs(&self) -> u64 {
        self.min_secs
    }

    /// Longest wait in seconds.
    #[must_use]
    pub const fn max_secs(&self) -> u64 {
        self.max_secs
    }

    /// Draw a uniformly random wait from the range.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Duration {
        Duration::from_secs(rng.gen_range(self.min_secs..=self.max_secs))
    }
}

impl Default for WaitRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Emits break reminders at random intervals while a session is active.
pub struct IntervalNotifier<R> {
    range: WaitRange,
    watch: ActiveWatch,
    sink: Rc<dyn OutputSink>,
    rng: R,
}

impl<R: Rng> IntervalNotifier<R> {
    /// Create a notifier bound to a session's active flag.
    pub fn new(range: WaitRange, watch: ActiveWatch, sink: Rc<dyn OutputSink>, rng: R) -> Self {
        Self {
            range,
            watch,
            sink,
            rng,
        }
    }

    /// Run until the session is observed inactive after a wake.
    ///
    /// Returns the number of break reminders emitted.
    pub async fn run(mut self) -> u64 {
        self.sink.message(STARTED_MESSAGE);

        let mut breaks = 0;
        while self.watch.is_active() {
            let wait = self.range.sample(&mut self.rng);
            debug!(wait_secs = wait.as_secs(), "waiting for next break");
            sleep(wait).await;

            if !self.watch.is_active() {
                break;
            }

            self.sink.message(BREAK_MESSAGE);
            NotificationEvent::Break.dispatch(self.sink.as_ref());
            breaks += 1;
        }

        debug!(breaks, "interval notifier stopped");
        breaks
    }
}
