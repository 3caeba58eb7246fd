//! Presentation decisions that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test how
//! widget state maps onto classes and styles on the host.

use claimsite::training::{TrainingPhase, SCHEDULE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Info,
    Warning,
    Danger,
    Good,
}

impl Tone {
    pub fn color(self) -> &'static str {
        match self {
            Tone::Neutral => "#a8a29e",
            Tone::Info => "#3b82f6",
            Tone::Warning => "#f59e0b",
            Tone::Danger => "#ef4444",
            Tone::Good => "#16a34a",
        }
    }
}

pub fn phase_tone(phase: TrainingPhase) -> Tone {
    match phase {
        TrainingPhase::Idle => Tone::Neutral,
        TrainingPhase::ForwardBad | TrainingPhase::ForwardGood => Tone::Info,
        TrainingPhase::Error => Tone::Danger,
        TrainingPhase::Backprop | TrainingPhase::Update => Tone::Warning,
        TrainingPhase::Success => Tone::Good,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Done,
    Current,
    Upcoming,
}

/// Progress of each stage of a run, for the row of pills under the training diagram.
pub fn training_track(phase: TrainingPhase) -> Vec<(TrainingPhase, StepState)> {
    let stages = SCHEDULE.iter().map(|(_, p)| *p).filter(|p| *p != TrainingPhase::Idle);
    let current = stages.clone().position(|p| p == phase);

    stages
        .enumerate()
        .map(|(i, p)| {
            let state = match current {
                Some(c) if i < c => StepState::Done,
                Some(c) if i == c => StepState::Current,
                _ => StepState::Upcoming,
            };
            (p, state)
        })
        .collect()
}

pub fn step_state_class(state: StepState) -> &'static str {
    match state {
        StepState::Done => "pill done",
        StepState::Current => "pill current",
        StepState::Upcoming => "pill",
    }
}

pub fn node_class(active: bool) -> &'static str {
    if active {
        "topology-node active"
    } else {
        "topology-node"
    }
}

pub fn stage_box_class(active: bool) -> &'static str {
    if active {
        "stage-box active"
    } else {
        "stage-box"
    }
}

pub fn arrow_style(lit: bool) -> &'static str {
    if lit {
        "opacity: 1; transform: translateX(0);"
    } else {
        "opacity: 0.3; transform: translateX(-5px);"
    }
}

pub fn progress_dot_class(current: bool) -> &'static str {
    if current {
        "progress-dot current"
    } else {
        "progress-dot"
    }
}

pub fn bar_style(height_pct: f32, delay_ms: u32) -> String {
    format!("height: {height_pct:.1}%; transition-delay: {delay_ms}ms;")
}

pub fn nav_class(scrolled: bool) -> &'static str {
    if scrolled {
        "site-nav scrolled"
    } else {
        "site-nav"
    }
}

pub fn fade_in_style(delay_ms: u32) -> String {
    format!("animation-delay: {delay_ms}ms;")
}
