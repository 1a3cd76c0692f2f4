//! Per-question countdown.
//!
//! Ticks from the configured total down to zero on a background task and
//! publishes each value through a watch channel. Reaching zero has no effect
//! on the interview; the value is informational.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::trace;

/// Ticking per-question timer. The background task is aborted on drop.
pub struct Countdown {
    total: u32,
    tick: Duration,
    tx: Arc<watch::Sender<u32>>,
    task: Option<JoinHandle<()>>,
}

impl Countdown {
    /// Idle countdown; call [`Countdown::arm`] to start ticking.
    pub fn new(total: u32, tick: Duration) -> Self {
        let (tx, _rx) = watch::channel(total);
        Self {
            total,
            tick,
            tx: Arc::new(tx),
            task: None,
        }
    }

    /// Resets to the full total and starts ticking, cancelling any previous run.
    pub fn arm(&mut self) {
        self.stop();
        self.tx.send_replace(self.total);

        let tx = Arc::clone(&self.tx);
        let tick = self.tick;
        let total = self.total;
        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + tick, tick);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut remaining = total;
            while remaining > 0 {
                ticker.tick().await;
                remaining -= 1;
                tx.send_replace(remaining);
            }
            trace!("countdown reached zero");
        }));
    }

    /// Freezes the countdown at its current value.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Ticks left.
    pub fn remaining(&self) -> u32 {
        *self.tx.borrow()
    }

    /// Ticks the countdown starts from.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// True while the ticking task is alive.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Receiver that observes every published value
    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.tx.subscribe()
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.stop();
    }
}
