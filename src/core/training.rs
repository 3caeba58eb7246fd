//! One-shot training animation: a wrong forward pass, the loss, backprop, the
//! weight update, then a correct forward pass.
//!
//! Every stage is scheduled as an independent delay measured from the trigger,
//! not chained from the previous stage, so the offsets in [`SCHEDULE`] are exactly
//! what an observer sees.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::timer::{Scheduler, TimerHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TrainingPhase {
    #[default]
    Idle,
    ForwardBad,
    Error,
    Backprop,
    Update,
    ForwardGood,
    Success,
}

impl TrainingPhase {
    pub fn label(self) -> &'static str {
        match self {
            TrainingPhase::Idle => "idle",
            TrainingPhase::ForwardBad => "forward_bad",
            TrainingPhase::Error => "error",
            TrainingPhase::Backprop => "backprop",
            TrainingPhase::Update => "update",
            TrainingPhase::ForwardGood => "forward_good",
            TrainingPhase::Success => "success",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            TrainingPhase::Idle => "Ready. Press train to run one fine-tuning step.",
            TrainingPhase::ForwardBad => "Forward pass: the model extracts a literal, noisy claim.",
            TrainingPhase::Error => "Loss: the output diverges from the reference claim.",
            TrainingPhase::Backprop => "Backpropagation: gradients flow back through the layers.",
            TrainingPhase::Update => "Update: weights shift toward the reference extraction.",
            TrainingPhase::ForwardGood => "Forward pass: the extraction now matches the reference.",
            TrainingPhase::Success => "Converged: claim extracted correctly.",
        }
    }

    /// A new run may only start from a resting phase.
    pub fn can_trigger(self) -> bool {
        matches!(self, TrainingPhase::Idle | TrainingPhase::Success)
    }

    pub fn is_running(self) -> bool {
        !self.can_trigger()
    }

    pub fn all() -> &'static [TrainingPhase] {
        &[
            TrainingPhase::Idle,
            TrainingPhase::ForwardBad,
            TrainingPhase::Error,
            TrainingPhase::Backprop,
            TrainingPhase::Update,
            TrainingPhase::ForwardGood,
            TrainingPhase::Success,
        ]
    }
}

/// Offset from the trigger at which each phase begins. The first entry is applied
/// synchronously by the trigger; the remaining six are timers.
pub const SCHEDULE: [(Duration, TrainingPhase); 7] = [
    (Duration::from_millis(0), TrainingPhase::ForwardBad),
    (Duration::from_millis(1500), TrainingPhase::Error),
    (Duration::from_millis(2500), TrainingPhase::Backprop),
    (Duration::from_millis(4000), TrainingPhase::Update),
    (Duration::from_millis(5500), TrainingPhase::ForwardGood),
    (Duration::from_millis(7000), TrainingPhase::Success),
    (Duration::from_millis(9000), TrainingPhase::Idle),
];

pub const RUN_LENGTH: Duration = Duration::from_millis(9000);

/// Phase a run shows `elapsed` after its trigger.
pub fn phase_at(elapsed: Duration) -> TrainingPhase {
    SCHEDULE
        .iter()
        .rev()
        .find(|(offset, _)| elapsed >= *offset)
        .map(|(_, phase)| *phase)
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrainingSequencer {
    phase: TrainingPhase,
    runs: u64,
}

impl TrainingSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TrainingPhase {
        self.phase
    }

    /// Completed or in-flight runs since mount.
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Start a run if the guard allows it. Returns false (and changes nothing)
    /// while a run is in flight.
    pub fn begin(&mut self) -> bool {
        if !self.phase.can_trigger() {
            return false;
        }
        self.phase = TrainingPhase::ForwardBad;
        self.runs += 1;
        true
    }

    /// Scheduled transitions are unconditional.
    pub fn advance_to(&mut self, phase: TrainingPhase) {
        self.phase = phase;
    }
}

/// A mounted sequencer. Owns the timers of the current run; dropping the widget
/// cancels whatever is still pending.
pub struct TrainingWidget {
    scheduler: Rc<dyn Scheduler>,
    state: Rc<Cell<TrainingSequencer>>,
    listener: Rc<dyn Fn(TrainingPhase)>,
    pending: RefCell<Vec<TimerHandle>>,
}

impl TrainingWidget {
    pub fn mount(scheduler: Rc<dyn Scheduler>, on_change: impl Fn(TrainingPhase) + 'static) -> Self {
        Self {
            scheduler,
            state: Rc::new(Cell::new(TrainingSequencer::new())),
            listener: Rc::new(on_change),
            pending: RefCell::new(Vec::new()),
        }
    }

    pub fn phase(&self) -> TrainingPhase {
        self.state.get().phase()
    }

    pub fn sequencer(&self) -> TrainingSequencer {
        self.state.get()
    }

    /// Start a run. Ignored (returns false) unless the phase is idle or success.
    pub fn trigger(&self) -> bool {
        let mut seq = self.state.get();
        if !seq.begin() {
            debug!(phase = seq.phase().label(), "training trigger ignored");
            return false;
        }
        self.state.set(seq);

        // Re-triggering from `success` still has the previous run's reset queued.
        let stale = self.pending.take();
        drop(stale);

        debug!(run = seq.runs(), "training run started");
        (self.listener)(TrainingPhase::ForwardBad);

        let handles: Vec<TimerHandle> = SCHEDULE[1..]
            .iter()
            .map(|&(offset, phase)| {
                let state = Rc::downgrade(&self.state);
                let listener = Rc::clone(&self.listener);
                self.scheduler.set_timeout(
                    offset,
                    Box::new(move || {
                        let Some(state) = state.upgrade() else {
                            return;
                        };
                        let mut seq = state.get();
                        seq.advance_to(phase);
                        state.set(seq);
                        debug!(phase = phase.label(), "training phase");
                        listener(phase);
                    }),
                )
            })
            .collect();
        *self.pending.borrow_mut() = handles;
        true
    }

    pub fn unmount(self) {
        debug!(phase = self.phase().label(), "training widget unmounted");
    }
}

impl std::fmt::Debug for TrainingWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrainingWidget")
            .field("sequencer", &self.state.get())
            .field("timers", &self.pending.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualScheduler;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn mount(sched: &ManualScheduler) -> (TrainingWidget, Rc<RefCell<Vec<TrainingPhase>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let widget = {
            let seen = Rc::clone(&seen);
            TrainingWidget::mount(Rc::new(sched.clone()), move |p| seen.borrow_mut().push(p))
        };
        (widget, seen)
    }

    #[test]
    fn phase_at_matches_the_timing_table() {
        let expected = [
            (0, TrainingPhase::ForwardBad),
            (1499, TrainingPhase::ForwardBad),
            (1500, TrainingPhase::Error),
            (2500, TrainingPhase::Backprop),
            (4000, TrainingPhase::Update),
            (5500, TrainingPhase::ForwardGood),
            (7000, TrainingPhase::Success),
            (8999, TrainingPhase::Success),
            (9000, TrainingPhase::Idle),
            (60_000, TrainingPhase::Idle),
        ];
        for (at, phase) in expected {
            assert_eq!(phase_at(ms(at)), phase, "at {at} ms");
        }
    }

    #[test]
    fn guard_only_opens_on_resting_phases() {
        for &p in TrainingPhase::all() {
            let mut seq = TrainingSequencer { phase: p, runs: 0 };
            let started = seq.begin();
            assert_eq!(started, matches!(p, TrainingPhase::Idle | TrainingPhase::Success));
            if !started {
                assert_eq!(seq.phase(), p);
            }
        }
    }

    #[test]
    fn sampled_phases_follow_absolute_offsets() {
        let sched = ManualScheduler::new();
        let (widget, _) = mount(&sched);

        assert!(widget.trigger());
        assert_eq!(widget.phase(), TrainingPhase::ForwardBad);

        let checkpoints = [
            (1500, TrainingPhase::Error),
            (2500, TrainingPhase::Backprop),
            (4000, TrainingPhase::Update),
            (5500, TrainingPhase::ForwardGood),
            (7000, TrainingPhase::Success),
            (9000, TrainingPhase::Idle),
        ];
        let mut now = 0;
        for (at, phase) in checkpoints {
            sched.advance(ms(at - 1 - now));
            assert_ne!(widget.phase(), phase, "fired early at {at} ms");
            sched.advance(ms(1));
            now = at;
            assert_eq!(widget.phase(), phase, "at {at} ms");
            assert_eq!(widget.phase(), phase_at(ms(at)));
        }
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn listener_sees_every_phase_once_in_order() {
        let sched = ManualScheduler::new();
        let (widget, seen) = mount(&sched);
        widget.trigger();
        sched.advance(RUN_LENGTH);

        let expected: Vec<_> = SCHEDULE.iter().map(|(_, p)| *p).collect();
        assert_eq!(*seen.borrow(), expected);
        assert_eq!(widget.sequencer().runs(), 1);
    }

    #[test]
    fn second_trigger_mid_run_is_ignored() {
        let sched = ManualScheduler::new();
        let (widget, seen) = mount(&sched);

        assert!(widget.trigger());
        assert!(!widget.trigger());
        assert_eq!(sched.pending(), 6);

        sched.advance(ms(3000));
        assert!(!widget.trigger());
        assert_eq!(sched.pending(), 4);

        sched.advance(ms(10_000));
        assert_eq!(seen.borrow().len(), 7);
        assert_eq!(widget.sequencer().runs(), 1);
    }

    #[test]
    fn retrigger_from_success_drops_the_old_reset() {
        let sched = ManualScheduler::new();
        let (widget, _) = mount(&sched);

        widget.trigger();
        sched.advance(ms(7000));
        assert_eq!(widget.phase(), TrainingPhase::Success);
        assert_eq!(sched.pending(), 1);

        assert!(widget.trigger());
        assert_eq!(sched.pending(), 6);

        // The first run's 9000 ms reset would land here.
        sched.advance(ms(2000));
        assert_eq!(widget.phase(), TrainingPhase::Error);

        sched.advance(ms(7000));
        assert_eq!(widget.phase(), TrainingPhase::Idle);
        assert_eq!(widget.sequencer().runs(), 2);
    }

    #[test]
    fn run_can_restart_after_returning_to_idle() {
        let sched = ManualScheduler::new();
        let (widget, _) = mount(&sched);
        widget.trigger();
        sched.advance(RUN_LENGTH);
        assert_eq!(widget.phase(), TrainingPhase::Idle);
        assert!(widget.trigger());
        assert_eq!(widget.phase(), TrainingPhase::ForwardBad);
    }

    #[test]
    fn teardown_mid_run_leaves_nothing_behind() {
        let sched = ManualScheduler::new();
        let changes = Rc::new(Cell::new(0u32));
        let widget = {
            let changes = Rc::clone(&changes);
            TrainingWidget::mount(Rc::new(sched.clone()), move |_| changes.set(changes.get() + 1))
        };

        widget.trigger();
        sched.advance(ms(2500));
        assert_eq!(widget.phase(), TrainingPhase::Backprop);
        let before = changes.get();
        assert_eq!(before, 3);

        widget.unmount();
        assert_eq!(sched.pending(), 0);

        sched.advance(ms(20_000));
        assert_eq!(changes.get(), before);
    }

    #[test]
    fn phase_labels_are_unique() {
        let mut labels: Vec<_> = TrainingPhase::all().iter().map(|p| p.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 7);
        for p in TrainingPhase::all() {
            assert!(!p.caption().is_empty());
        }
    }
}
