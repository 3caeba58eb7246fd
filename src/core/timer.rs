//! Timer scheduling shared by the widgets.
//!
//! Widgets never talk to a concrete clock. They are handed a [`Scheduler`] and
//! keep the [`TimerHandle`]s it returns; dropping a handle cancels its callback,
//! so a widget that has been torn down cannot be reached by its own timers.
//!
//! [`ManualScheduler`] is a virtual clock used by tests and benchmarks. The
//! tokio-backed scheduler lives in `runtime` and the browser one in the web crate.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Smallest period accepted for recurring timers.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Host timer facility.
pub trait Scheduler {
    /// Run `f` once, `delay` from now.
    fn set_timeout(&self, delay: Duration, f: Box<dyn FnOnce()>) -> TimerHandle;

    /// Run `f` every `period`. The first call happens one full period from now.
    fn set_interval(&self, period: Duration, f: Box<dyn FnMut()>) -> TimerHandle;
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn set_timeout(&self, delay: Duration, f: Box<dyn FnOnce()>) -> TimerHandle {
        (**self).set_timeout(delay, f)
    }

    fn set_interval(&self, period: Duration, f: Box<dyn FnMut()>) -> TimerHandle {
        (**self).set_interval(period, f)
    }
}

/// Ownership token for one scheduled callback. Dropping it cancels the callback.
#[must_use = "dropping a TimerHandle cancels the timer immediately"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Handle for a timer the host refused to schedule. Cancelling it does nothing.
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Virtual clock
// ═══════════════════════════════════════════════════════════════════════════

type TimerId = u64;

/// (deadline, insertion sequence): ties fire in scheduling order.
type QueueKey = (Duration, u64);

enum Task {
    Once(Box<dyn FnOnce()>),
    Every {
        period: Duration,
        f: Box<dyn FnMut()>,
    },
}

#[derive(Default)]
struct Queue {
    now: Duration,
    next_id: TimerId,
    next_seq: u64,
    due: BTreeMap<QueueKey, (TimerId, Task)>,
    keys: HashMap<TimerId, QueueKey>,
}

impl Queue {
    fn push(&mut self, id: TimerId, deadline: Duration, task: Task) {
        let key = (deadline, self.next_seq);
        self.next_seq += 1;
        self.due.insert(key, (id, task));
        self.keys.insert(id, key);
    }

    fn allocate(&mut self) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(key) = self.keys.remove(&id) {
            self.due.remove(&key);
        }
    }

    fn pop_due(&mut self, until: Duration) -> Option<(TimerId, Duration, Task)> {
        match self.due.first_key_value() {
            Some((&(deadline, _), _)) if deadline <= until => {}
            _ => return None,
        }
        let ((deadline, _), (id, task)) = self.due.pop_first()?;
        self.now = deadline;
        Some((id, deadline, task))
    }
}

/// Deterministic single-threaded scheduler driven by [`ManualScheduler::advance`].
///
/// Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of callbacks still waiting to fire.
    pub fn pending(&self) -> usize {
        self.inner.borrow().due.len()
    }

    /// Move the clock forward by `by`, firing every callback that falls due on the
    /// way in deadline order. Callbacks may schedule or cancel timers; anything they
    /// schedule inside the window fires in the same call. Returns the number fired.
    pub fn advance(&self, by: Duration) -> usize {
        let until = self.now() + by;
        let mut fired = 0;

        loop {
            let next = self.inner.borrow_mut().pop_due(until);
            let Some((id, deadline, task)) = next else {
                break;
            };
            fired += 1;

            match task {
                Task::Once(f) => {
                    self.inner.borrow_mut().keys.remove(&id);
                    f();
                }
                Task::Every { period, mut f } => {
                    f();
                    // The callback may have dropped its own handle.
                    let still_armed = self.inner.borrow().keys.contains_key(&id);
                    if still_armed {
                        self.inner
                            .borrow_mut()
                            .push(id, deadline + period, Task::Every { period, f });
                    }
                }
            }
        }

        self.inner.borrow_mut().now = until;
        fired
    }

    fn handle_for(&self, id: TimerId) -> TimerHandle {
        let queue: Weak<RefCell<Queue>> = Rc::downgrade(&self.inner);
        TimerHandle::new(move || {
            if let Some(queue) = queue.upgrade() {
                queue.borrow_mut().cancel(id);
            }
        })
    }
}

impl Scheduler for ManualScheduler {
    fn set_timeout(&self, delay: Duration, f: Box<dyn FnOnce()>) -> TimerHandle {
        let id = {
            let mut q = self.inner.borrow_mut();
            let id = q.allocate();
            let deadline = q.now + delay;
            q.push(id, deadline, Task::Once(f));
            id
        };
        self.handle_for(id)
    }

    fn set_interval(&self, period: Duration, f: Box<dyn FnMut()>) -> TimerHandle {
        let period = period.max(MIN_PERIOD);
        let id = {
            let mut q = self.inner.borrow_mut();
            let id = q.allocate();
            let deadline = q.now + period;
            q.push(id, deadline, Task::Every { period, f });
            id
        };
        self.handle_for(id)
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now())
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn timeouts_fire_in_deadline_order() {
        let sched = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut handles = Vec::new();
        for (delay, tag) in [(300, "c"), (100, "a"), (200, "b"), (100, "a2")] {
            let log = Rc::clone(&log);
            handles.push(sched.set_timeout(ms(delay), Box::new(move || log.borrow_mut().push(tag))));
        }

        assert_eq!(sched.advance(ms(150)), 2);
        assert_eq!(*log.borrow(), vec!["a", "a2"]);

        assert_eq!(sched.advance(ms(1000)), 2);
        assert_eq!(*log.borrow(), vec!["a", "a2", "b", "c"]);
        assert_eq!(sched.pending(), 0);
        assert_eq!(sched.now(), ms(1150));
    }

    #[test]
    fn dropping_handle_cancels_timeout() {
        let sched = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));

        let h = {
            let hits = Rc::clone(&hits);
            sched.set_timeout(ms(10), Box::new(move || hits.set(hits.get() + 1)))
        };
        assert_eq!(sched.pending(), 1);
        drop(h);
        assert_eq!(sched.pending(), 0);

        sched.advance(ms(100));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn interval_repeats_until_cancelled() {
        let sched = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));

        let h = {
            let hits = Rc::clone(&hits);
            sched.set_interval(ms(100), Box::new(move || hits.set(hits.get() + 1)))
        };

        sched.advance(ms(99));
        assert_eq!(hits.get(), 0);
        sched.advance(ms(1));
        assert_eq!(hits.get(), 1);
        sched.advance(ms(450));
        assert_eq!(hits.get(), 5);

        h.cancel();
        sched.advance(ms(1000));
        assert_eq!(hits.get(), 5);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn interval_may_cancel_itself_from_callback() {
        let sched = ManualScheduler::new();
        let slot: Rc<RefCell<Option<TimerHandle>>> = Rc::new(RefCell::new(None));
        let hits = Rc::new(Cell::new(0));

        let handle = {
            let slot = Rc::clone(&slot);
            let hits = Rc::clone(&hits);
            sched.set_interval(
                ms(10),
                Box::new(move || {
                    hits.set(hits.get() + 1);
                    if hits.get() == 3 {
                        slot.borrow_mut().take();
                    }
                }),
            )
        };
        *slot.borrow_mut() = Some(handle);

        sched.advance(ms(100));
        assert_eq!(hits.get(), 3);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn callbacks_can_schedule_within_the_same_advance() {
        let sched = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let keep: Rc<RefCell<Vec<TimerHandle>>> = Rc::new(RefCell::new(Vec::new()));

        let outer = {
            let sched2 = sched.clone();
            let log = Rc::clone(&log);
            let keep = Rc::clone(&keep);
            sched.set_timeout(
                ms(10),
                Box::new(move || {
                    log.borrow_mut().push(sched2.now());
                    let log = Rc::clone(&log);
                    let inner_clock = sched2.clone();
                    let h = sched2.set_timeout(
                        ms(5),
                        Box::new(move || log.borrow_mut().push(inner_clock.now())),
                    );
                    keep.borrow_mut().push(h);
                }),
            )
        };

        sched.advance(ms(20));
        assert_eq!(*log.borrow(), vec![ms(10), ms(15)]);
        drop(outer);
    }

    #[test]
    fn zero_period_interval_is_clamped() {
        let sched = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let _h = {
            let hits = Rc::clone(&hits);
            sched.set_interval(Duration::ZERO, Box::new(move || hits.set(hits.get() + 1)))
        };
        sched.advance(ms(5));
        assert_eq!(hits.get(), 5);
    }

    #[test]
    fn inert_handle_is_harmless() {
        let h = TimerHandle::inert();
        assert!(format!("{h:?}").contains("false"));
        h.cancel();
    }
}
