//! Periodic tick driver.
//!
//! [`spawn_ticker`] registers a repeating task on a tokio runtime and hands
//! back a [`TickerHandle`]. The handle is the disposer: cancelling it (or
//! dropping it) stops the task so no timer outlives its owner.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

pub struct TickerHandle {
    task: Option<JoinHandle<()>>,
    period: Duration,
}

impl TickerHandle {
    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop the repeating task. Calling this more than once is harmless.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            log::debug!("Ticker with period {:?} cancelled", self.period);
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Call `on_tick` every `period`, starting immediately. Missed ticks are
/// skipped rather than replayed in a burst.
pub fn spawn_ticker<F>(runtime: &Handle, period: Duration, mut on_tick: F) -> TickerHandle
where
    F: FnMut() + Send + 'static,
{
    let task = runtime.spawn(async move {
        let mut ticks = interval(period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticks.tick().await;
            on_tick();
        }
    });
    log::debug!("Ticker started with period {:?}", period);

    TickerHandle {
        task: Some(task),
        period,
    }
}
