//! Auto-advancing stage indicator for the claim extraction pipeline diagram.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tracing::trace;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::timer::{Scheduler, TimerHandle};

pub const STAGE_COUNT: u8 = 4;
pub const TICK_PERIOD: Duration = Duration::from_millis(2000);

/// `(step + 1) mod 4`. Out-of-range input is reduced first.
#[inline]
pub fn next_step(step: u8) -> u8 {
    (step % STAGE_COUNT + 1) % STAGE_COUNT
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum PipelineStage {
    SocialPost,
    LlmExtract,
    SelfRefine,
    Claim,
}

impl PipelineStage {
    pub fn from_step(step: u8) -> Self {
        match step % STAGE_COUNT {
            0 => PipelineStage::SocialPost,
            1 => PipelineStage::LlmExtract,
            2 => PipelineStage::SelfRefine,
            _ => PipelineStage::Claim,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PipelineStage::SocialPost => "Social Post",
            PipelineStage::LlmExtract => "LLM Extract",
            PipelineStage::SelfRefine => "Self-Refine",
            PipelineStage::Claim => "Claim",
        }
    }

    pub fn all() -> &'static [PipelineStage] {
        &[
            PipelineStage::SocialPost,
            PipelineStage::LlmExtract,
            PipelineStage::SelfRefine,
            PipelineStage::Claim,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StepCycler {
    step: u8,
}

impl StepCycler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn tick(&mut self) -> u8 {
        self.step = next_step(self.step);
        self.step
    }

    pub fn stage(&self) -> PipelineStage {
        PipelineStage::from_step(self.step)
    }

    pub fn input_active(&self) -> bool {
        self.step == 0
    }

    /// The middle box covers both extraction and refinement.
    pub fn processing_active(&self) -> bool {
        matches!(self.step, 1 | 2)
    }

    pub fn refining(&self) -> bool {
        self.step == 2
    }

    pub fn output_active(&self) -> bool {
        self.step == 3
    }

    pub fn processing_label(&self) -> &'static str {
        if self.refining() {
            PipelineStage::SelfRefine.label()
        } else {
            PipelineStage::LlmExtract.label()
        }
    }

    pub fn first_arrow_lit(&self) -> bool {
        self.step >= 1
    }

    pub fn second_arrow_lit(&self) -> bool {
        self.step >= 3
    }
}

/// A mounted cycler: owns its state and the recurring tick that drives it.
///
/// Dropping (or [`unmount`](Self::unmount)ing) the widget cancels the tick.
#[derive(Debug)]
pub struct StepCyclerWidget {
    state: Rc<Cell<StepCycler>>,
    _tick: TimerHandle,
}

impl StepCyclerWidget {
    pub fn mount(scheduler: &dyn Scheduler, on_change: impl Fn(StepCycler) + 'static) -> Self {
        let state = Rc::new(Cell::new(StepCycler::new()));
        let weak = Rc::downgrade(&state);

        let tick = scheduler.set_interval(
            TICK_PERIOD,
            Box::new(move || {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                let mut cycler = state.get();
                cycler.tick();
                state.set(cycler);
                trace!(step = cycler.step(), stage = cycler.stage().label(), "pipeline tick");
                on_change(cycler);
            }),
        );

        Self { state, _tick: tick }
    }

    pub fn current(&self) -> StepCycler {
        self.state.get()
    }

    pub fn unmount(self) {
        trace!(step = self.state.get().step(), "pipeline cycler unmounted");
    }
}
