//! Periodic tick source owned by the controller.
//!
//! A [`TickTimer`] is a spawned task that sends its token into the
//! controller's tick channel once per period. Dropping the handle aborts the
//! task; the token lets the controller ignore a firing that was already
//! queued when the timer was replaced.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Identifies which timer a firing came from.
pub type TimerToken = u64;

#[derive(Debug)]
pub struct TickTimer {
    token: TimerToken,
    task: JoinHandle<()>,
}

impl TickTimer {
    /// Starts firing one full `period` from now.
    pub fn start(period: Duration, token: TimerToken, tx: UnboundedSender<TimerToken>) -> Self {
        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                interval.tick().await;
                if tx.send(token).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(token, ?period, "Tick timer started");
        Self { token, task }
    }

    pub fn token(&self) -> TimerToken {
        self.token
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!(token = self.token, "Tick timer cancelled");
    }
}
