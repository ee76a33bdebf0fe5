//! Deadline tracking.
//!
//! The deadline tracker is the only activity that decides when a session
//! ends. It counts fixed ticks and never looks at the active flag.

use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

/// Counts down a session in fixed ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineTracker {
    length_ticks: u64,
    tick: Duration,
}

impl DeadlineTracker {
    /// Create a tracker for a session of `duration_minutes`.
    ///
    /// The duration is not validated here.
    #[must_use]
    pub fn new(duration_minutes: u32, tick: Duration) -> Self {
        let length = Duration::from_secs(u64::from(duration_minutes) * 60);
        let tick_nanos = tick.as_nanos().max(1);
        let length_ticks = u64::try_from(length.as_nanos() / tick_nanos).unwrap_or(u64::MAX);

        Self { length_ticks, tick }
    }

    /// Number of ticks in the session.
    #[must_use]
    pub const fn length_ticks(&self) -> u64 {
        self.length_ticks
    }

    /// Sleep tick by tick until the session length has passed.
    ///
    /// The counter starts at one and the loop ends once it exceeds the
    /// length, which works out to exactly `length_ticks` sleeps. Returns the
    /// number of ticks slept.
    pub async fn run(self) -> u64 {
        let mut passed: u64 = 1;
        loop {
            sleep(self.tick).await;
            passed += 1;
            if passed > self.length_ticks {
                break;
            }
        }

        let slept = passed - 1;
        debug!(ticks = slept, "deadline reached");
        slept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn test_length_in_ticks() {
        let tracker = DeadlineTracker::new(5, Duration::from_secs(1));
        assert_eq!(tracker.length_ticks(), 300);

        let tracker = DeadlineTracker::new(5, Duration::from_millis(500));
        assert_eq!(tracker.length_ticks(), 600);

        let tracker = DeadlineTracker::new(1, Duration::from_secs(60));
        assert_eq!(tracker.length_ticks(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_minimum_session_takes_300_ticks() {
        let start = Instant::now();
        let slept = DeadlineTracker::new(5, Duration::from_secs(1)).run().await;

        assert_eq!(slept, 300);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(300));
        assert!(elapsed < Duration::from_secs(301));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_matches_duration() {
        for minutes in [5_u32, 15, 90] {
            let start = Instant::now();
            let slept = DeadlineTracker::new(minutes, Duration::from_secs(1)).run().await;

            let expected = u64::from(minutes) * 60;
            assert_eq!(slept, expected);
            assert!(start.elapsed() >= Duration::from_secs(expected));
            assert!(start.elapsed() < Duration::from_secs(expected + 1));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_length_still_sleeps_once() {
        let slept = DeadlineTracker::new(0, Duration::from_secs(1)).run().await;
        assert_eq!(slept, 1);
    }
}
