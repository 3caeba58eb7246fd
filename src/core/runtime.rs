//! tokio-backed [`Scheduler`] for the native preview.
//!
//! Timers are `spawn_local` tasks, so the scheduler must be used from inside a
//! [`tokio::task::LocalSet`]. Cancelling a handle aborts its task.

use std::time::Duration;

use tokio::task::spawn_local;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::timer::{Scheduler, TimerHandle, MIN_PERIOD};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalScheduler;

impl Scheduler for LocalScheduler {
    fn set_timeout(&self, delay: Duration, f: Box<dyn FnOnce()>) -> TimerHandle {
        let task = spawn_local(async move {
            time::sleep(delay).await;
            f();
        });
        TimerHandle::new(move || task.abort())
    }

    fn set_interval(&self, period: Duration, mut f: Box<dyn FnMut()>) -> TimerHandle {
        let period = period.max(MIN_PERIOD);
        let task = spawn_local(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                f();
            }
        });
        TimerHandle::new(move || task.abort())
    }
}
