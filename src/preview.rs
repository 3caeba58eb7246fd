//! Headless preview: mounts every widget on real timers and logs what a visitor
//! would see, without a browser.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tokio::time;
use tracing::info;

use crate::config::PreviewConfig;
use crate::dataset::{score_label, DatasetSelector};
use crate::error::SiteError;
use crate::runtime::LocalScheduler;
use crate::step_cycler::StepCyclerWidget;
use crate::timer::Scheduler;
use crate::toggle_set::{node, ToggleSet};
use crate::training::{TrainingPhase, TrainingWidget};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewReport {
    pub pipeline_ticks: u32,
    pub final_step: u8,
    pub phases: Vec<TrainingPhase>,
    pub final_phase: TrainingPhase,
    pub active_nodes: usize,
    pub dataset: &'static str,
}

/// Run the preview for `plan.duration_ms`. Must be awaited inside a `LocalSet`.
pub async fn run(plan: &PreviewConfig) -> Result<PreviewReport, SiteError> {
    let scheduler: Rc<dyn Scheduler> = Rc::new(LocalScheduler);
    let report = Rc::new(RefCell::new(PreviewReport::default()));

    let mut selector = DatasetSelector::new();
    let dataset = selector.select(plan.dataset)?;
    info!(
        "Results chart: {} baseline={} proposed={}",
        dataset.name,
        score_label(dataset.baseline),
        score_label(dataset.proposed)
    );

    let cycler = {
        let report = Rc::clone(&report);
        StepCyclerWidget::mount(&*scheduler, move |c| {
            info!("Pipeline: step {} ({})", c.step(), c.stage().label());
            report.borrow_mut().pipeline_ticks += 1;
        })
    };

    let training = {
        let report = Rc::clone(&report);
        TrainingWidget::mount(Rc::clone(&scheduler), move |phase| {
            info!("Training: {} | {}", phase.label(), phase.caption());
            report.borrow_mut().phases.push(phase);
        })
    };

    let mut nodes = ToggleSet::new();
    for &id in &plan.toggle_nodes {
        let active = nodes.toggle(id);
        let label = node(id).map(|n| n.label).unwrap_or("?");
        info!("Architecture: node {} ({}) active={} | {}", id, label, active, nodes.caption());
    }

    if plan.run_training {
        training.trigger();
    }

    time::sleep(Duration::from_millis(plan.duration_ms)).await;

    let final_step = cycler.current().step();
    let final_phase = training.phase();
    cycler.unmount();
    training.unmount();

    let mut out = report.borrow().clone();
    out.final_step = final_step;
    out.final_phase = final_phase;
    out.active_nodes = nodes.len();
    out.dataset = selector.current().name;
    info!(
        "Preview finished: {} pipeline ticks, {} training phases",
        out.pipeline_ticks,
        out.phases.len()
    );
    Ok(out)
}
