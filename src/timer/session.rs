//! Study session state.
//!
//! A [`Session`] owns the "active" flag shared by the deadline tracker, the
//! interval notifier and the progress reporter. Only the session can write the
//! flag; the activities get a read-only [`ActiveWatch`].

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::core::OutputSink;

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created but not started.
    Pending,
    /// Activities are running.
    Active,
    /// The deadline elapsed.
    Finished,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Active => write!(f, "Active"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

/// Read-only view of a session's active flag.
///
/// Cheap to clone; every activity holds its own copy.
#[derive(Debug, Clone)]
pub struct ActiveWatch {
    flag: Rc<Cell<bool>>,
}

impl ActiveWatch {
    /// Check whether the session is still running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.flag.get()
    }
}

/// A single study session.
#[derive(Debug)]
pub struct Session {
    duration_minutes: u32,
    state: SessionState,
    flag: Rc<Cell<bool>>,
    started_at: Option<DateTime<Local>>,
    ended_at: Option<DateTime<Local>>,
}

impl Session {
    /// Create a pending session of the given length.
    #[must_use]
    pub fn new(duration_minutes: u32) -> Self {
        Self {
            duration_minutes,
            state: SessionState::Pending,
            flag: Rc::new(Cell::new(false)),
            started_at: None,
            ended_at: None,
        }
    }

    /// Planned length in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the active flag is currently set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.flag.get()
    }

    /// Hand out a read-only view of the active flag.
    #[must_use]
    pub fn watch(&self) -> ActiveWatch {
        ActiveWatch {
            flag: Rc::clone(&self.flag),
        }
    }

    /// Mark the session active.
    ///
    /// Only a pending session can start; returns `false` otherwise.
    pub fn start(&mut self) -> bool {
        if self.state != SessionState::Pending {
            return false;
        }
        self.state = SessionState::Active;
        self.started_at = Some(Local::now());
        self.flag.set(true);
        true
    }

    /// Clear the active flag once the deadline has elapsed.
    ///
    /// The flag never goes back to true, so this returns `false` for any
    /// session that is not currently active.
    pub fn finish(&mut self) -> bool {
        if self.state != SessionState::Active {
            return false;
        }
        self.state = SessionState::Finished;
        self.ended_at = Some(Local::now());
        self.flag.set(false);
        true
    }

    /// When the session started, in local time.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    /// When the session finished, in local time.
    #[must_use]
    pub const fn ended_at(&self) -> Option<DateTime<Local>> {
        self.ended_at
    }
}

/// A momentary cue sent to the output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationEvent {
    /// Time for a short break.
    Break,
    /// The session is over.
    Complete,
}

impl NotificationEvent {
    /// Send this event to the sink.
    pub fn dispatch(self, sink: &dyn OutputSink) {
        match self {
            Self::Break => sink.notify_break(),
            Self::Complete => sink.notify_complete(),
        }
    }
}

/// Elapsed time since the session started, as shown on the progress line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProgressTick {
    /// Whole minutes elapsed.
    pub minutes: u64,
    /// Seconds past the last whole minute (0-59).
    pub seconds: u64,
}

impl ProgressTick {
    /// Build a tick from elapsed wall time.
    #[must_use]
    pub const fn from_elapsed(elapsed: Duration) -> Self {
        let total = elapsed.as_secs();
        Self {
            minutes: total / 60,
            seconds: total % 60,
        }
    }
}

impl fmt::Display for ProgressTick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}
