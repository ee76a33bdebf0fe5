//! Session coordination.
//!
//! The coordinator starts the deadline tracker, the interval notifier and the
//! progress reporter as local tasks on the current thread, waits for the
//! first one to finish, then lowers the session's active flag. The notifier
//! and reporter are detached, not joined: they stop on their own the next
//! time they wake and see the flag down.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task;
use tracing::{info, warn};

use super::deadline::DeadlineTracker;
use super::notifier::IntervalNotifier;
use super::progress::ProgressReporter;
use super::session::{NotificationEvent, Session};
use super::SessionSettings;
use crate::core::{InputProvider, OutputSink};
use crate::error::StudyError;

/// Line printed when a session ends.
pub const COMPLETE_MESSAGE: &str = "Study Session Complete!";

/// The activity that ended a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    /// The countdown reached the session length.
    Deadline,
    /// The break notifier returned on its own.
    Notifier,
    /// The progress reporter returned on its own.
    Reporter,
}

/// Summary of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Planned length in minutes.
    pub duration_minutes: u32,
    /// Which activity finished first.
    pub first_finished: Activity,
    /// Ticks counted by the deadline tracker, if it finished first.
    pub deadline_ticks: Option<u64>,
    /// When the session started.
    pub started_at: Option<DateTime<Local>>,
    /// When the active flag was lowered.
    pub ended_at: Option<DateTime<Local>>,
}

/// Runs study sessions one after another.
pub struct SessionCoordinator {
    settings: SessionSettings,
    sink: Rc<dyn OutputSink>,
    rng: RefCell<StdRng>,
}

impl SessionCoordinator {
    /// Create a coordinator with an entropy-seeded random source.
    pub fn new(settings: SessionSettings, sink: Rc<dyn OutputSink>) -> Self {
        Self {
            settings,
            sink,
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// Create a coordinator with a fixed seed, for reproducible break times.
    pub fn with_seed(settings: SessionSettings, sink: Rc<dyn OutputSink>, seed: u64) -> Self {
        Self {
            settings,
            sink,
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Run one session of `duration_minutes` to completion.
    ///
    /// The duration is expected to be validated already. Returns as soon as
    /// the deadline passes; the notifier and reporter tasks may still be
    /// asleep at that point.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Runtime` if an activity task panics.
    ///
    /// # Panics
    ///
    /// Must be awaited inside a [`tokio::task::LocalSet`].
    pub async fn start_session(
        &self,
        duration_minutes: u32,
    ) -> Result<SessionOutcome, StudyError> {
        let mut session = Session::new(duration_minutes);
        session.start();
        info!(minutes = duration_minutes, state = %session.state(), "study session started");

        let notifier_rng = StdRng::seed_from_u64(self.rng.borrow_mut().gen());

        let tracker = DeadlineTracker::new(duration_minutes, self.settings.tick);
        let notifier = IntervalNotifier::new(
            self.settings.break_range,
            session.watch(),
            Rc::clone(&self.sink),
            notifier_rng,
        );
        let reporter =
            ProgressReporter::new(self.settings.tick, session.watch(), Rc::clone(&self.sink));

        let mut deadline = task::spawn_local(tracker.run());
        let mut notifying = task::spawn_local(notifier.run());
        let mut reporting = task::spawn_local(reporter.run());

        // Dropping the remaining handles detaches those tasks
        let (first_finished, deadline_ticks) = tokio::select! {
            ticks = &mut deadline => (Activity::Deadline, Some(ticks?)),
            breaks = &mut notifying => {
                breaks?;
                (Activity::Notifier, None)
            }
            ticks = &mut reporting => {
                ticks?;
                (Activity::Reporter, None)
            }
        };

        if first_finished != Activity::Deadline {
            warn!(?first_finished, "session ended before its deadline");
        }

        session.finish();
        info!(minutes = duration_minutes, state = %session.state(), "study session complete");

        self.sink.message(COMPLETE_MESSAGE);
        NotificationEvent::Complete.dispatch(self.sink.as_ref());

        Ok(SessionOutcome {
            duration_minutes,
            first_finished,
            deadline_ticks,
            started_at: session.started_at(),
            ended_at: session.ended_at(),
        })
    }

    /// Prompt for a length and run a session, forever.
    ///
    /// Only returns when the input source fails or a session errors.
    ///
    /// # Errors
    ///
    /// Returns whatever error ended the loop.
    pub async fn run_forever(&self, input: &mut dyn InputProvider) -> Result<(), StudyError> {
        loop {
            let minutes = input.get_study_length()?;
            self.start_session(minutes).await?;
        }
    }
}
