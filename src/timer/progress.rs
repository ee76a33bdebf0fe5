//! Elapsed-time display.

use std::rc::Rc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use super::session::{ActiveWatch, ProgressTick};
use crate::core::OutputSink;

/// Shows the elapsed session time once per tick.
pub struct ProgressReporter {
    tick: Duration,
    watch: ActiveWatch,
    sink: Rc<dyn OutputSink>,
}

impl ProgressReporter {
    /// Create a reporter bound to a session's active flag.
    pub fn new(tick: Duration, watch: ActiveWatch, sink: Rc<dyn OutputSink>) -> Self {
        Self { tick, watch, sink }
    }

    /// Run until the session is observed inactive after a wake.
    ///
    /// Returns the number of ticks displayed.
    pub async fn run(self) -> u32 {
        let mut ticks: u32 = 0;
        while self.watch.is_active() {
            sleep(self.tick).await;

            if !self.watch.is_active() {
                break;
            }

            ticks += 1;
            let progress = ProgressTick::from_elapsed(self.tick.saturating_mul(ticks));
            self.sink.display(&progress.to_string());
        }

        debug!(ticks, "progress reporter stopped");
        ticks
    }
}
