use std::rc::Rc;

use claimsite::content::Results;
use claimsite::dataset::{score_label, DatasetSelector, DATASETS};
use claimsite::step_cycler::{StepCycler, StepCyclerWidget, STAGE_COUNT};
use claimsite::toggle_set::{node, ToggleSet, ARCHITECTURE_EDGES, ARCHITECTURE_NODES};
use claimsite::training::{TrainingPhase, TrainingWidget};
use leptos::prelude::*;

use super::scheduler::BrowserScheduler;
use crate::ui_model::{
    arrow_style, bar_style, node_class, phase_tone, progress_dot_class, stage_box_class,
    step_state_class, training_track,
};

// ═══════════════════════════════════════════════════════════════════════════
// Model architecture (node toggles)
// ═══════════════════════════════════════════════════════════════════════════

#[component]
pub(super) fn NetworkTopologyDiagram() -> impl IntoView {
    let (nodes, set_nodes) = signal(ToggleSet::new());

    let edges = ARCHITECTURE_EDGES
        .iter()
        .filter_map(|e| Some((node(e.from)?, node(e.to)?, e.dashed)))
        .map(|(a, b, dashed)| {
            view! {
                <line
                    x1=format!("{}%", a.x_pct)
                    y1=format!("{}%", a.y_pct)
                    x2=format!("{}%", b.x_pct)
                    y2=format!("{}%", b.y_pct)
                    stroke="#333"
                    stroke-width=if dashed { "1" } else { "2" }
                    stroke-dasharray=if dashed { "4" } else { "" }
                />
            }
        })
        .collect_view();

    let buttons = ARCHITECTURE_NODES
        .iter()
        .map(|n| {
            let id = n.id;
            view! {
                <button
                    class=move || node_class(nodes.with(|s| s.contains(id)))
                    style=format!("left: {}%; top: {}%;", n.x_pct, n.y_pct)
                    title=n.label
                    on:click=move |_| set_nodes.update(|s| {
                        s.toggle(id);
                    })
                >
                    "⬡"
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="diagram card">
            <h3 class="diagram-title">"Model Architecture: FLAN-T5"</h3>
            <p class="diagram-lede">
                "We fine-tuned the 783M parameter FLAN-T5 Large model. Click nodes to simulate the data flow during claim extraction."
            </p>
            <div class="topology">
                <svg class="topology-edges">{edges}</svg>
                {buttons}
            </div>
            <div class="legend">
                <span><span class="swatch active"></span>" Active"</span>
                <span><span class="swatch"></span>" Frozen"</span>
            </div>
            <div class="diagram-caption">{move || nodes.with(|s| s.caption())}</div>
        </div>
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Claim extraction pipeline (auto-advancing stages)
// ═══════════════════════════════════════════════════════════════════════════

#[component]
pub(super) fn ProcessFlowDiagram() -> impl IntoView {
    let (cycler, set_cycler) = signal(StepCycler::new());

    let widget = StoredValue::new_local(Some(StepCyclerWidget::mount(&BrowserScheduler, move |c| {
        set_cycler.set(c)
    })));
    on_cleanup(move || {
        if let Some(Some(w)) = widget.try_update_value(Option::take) {
            w.unmount();
        }
    });

    let dots = (0..STAGE_COUNT)
        .map(|s| {
            view! { <div class=move || progress_dot_class(cycler.get().step() == s)></div> }
        })
        .collect_view();

    view! {
        <div class="diagram card warm">
            <h3 class="diagram-title">"Claim Extraction Pipeline"</h3>
            <p class="diagram-lede">
                "From social media noise to verifiable fact through iterative refinement."
            </p>
            <div class="pipeline">
                <div class="stage">
                    <div class=move || stage_box_class(cycler.get().input_active())>"💬"</div>
                    <span class="stage-label">"Social Post"</span>
                </div>
                <div class="arrow" style=move || arrow_style(cycler.get().first_arrow_lit())>"→"</div>
                <div class="stage">
                    <div class=move || {
                        if cycler.get().processing_active() { "stage-box wide dark" } else { "stage-box wide" }
                    }>
                        {move || if cycler.get().refining() { "🔄" } else { "⚙️" }}
                    </div>
                    <span class="stage-label">{move || cycler.get().processing_label()}</span>
                </div>
                <div class="arrow" style=move || arrow_style(cycler.get().second_arrow_lit())>"→"</div>
                <div class="stage">
                    <div class=move || stage_box_class(cycler.get().output_active())>"✔"</div>
                    <span class="stage-label">"Claim"</span>
                </div>
            </div>
            <div class="progress">{dots}</div>
        </div>
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Fine-tuning loop (one-shot timed sequence)
// ═══════════════════════════════════════════════════════════════════════════

#[component]
pub(super) fn TrainingLoopDiagram() -> impl IntoView {
    let (phase, set_phase) = signal(TrainingPhase::Idle);

    let widget = StoredValue::new_local(Some(TrainingWidget::mount(
        Rc::new(BrowserScheduler),
        move |p| set_phase.set(p),
    )));
    on_cleanup(move || {
        if let Some(Some(w)) = widget.try_update_value(Option::take) {
            w.unmount();
        }
    });

    let train = move |_| {
        widget.with_value(|w| {
            if let Some(w) = w {
                w.trigger();
            }
        });
    };

    view! {
        <div class="diagram card">
            <h3 class="diagram-title">"Fine-tuning Step"</h3>
            <p class="diagram-lede">
                "One supervised update of FLAN-T5: a wrong extraction, the loss, backpropagation and the corrected output."
            </p>
            <div
                class="phase-badge"
                style=move || format!("border-color: {};", phase_tone(phase.get()).color())
            >
                {move || phase.get().label()}
            </div>
            <div class="track">
                {move || {
                    training_track(phase.get())
                        .into_iter()
                        .map(|(p, state)| view! { <span class=step_state_class(state)>{p.label()}</span> })
                        .collect_view()
                }}
            </div>
            <div class="diagram-caption">{move || phase.get().caption()}</div>
            <button
                class="btn"
                prop:disabled=move || phase.get().is_running()
                on:click=train
            >
                {move || if phase.get().is_running() { "Training…" } else { "Train" }}
            </button>
        </div>
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Results bar chart (dataset switch)
// ═══════════════════════════════════════════════════════════════════════════

#[component]
pub(super) fn ResultsChartDiagram(results: Results) -> impl IntoView {
    let (selector, set_selector) = signal(DatasetSelector::new());
    let current = move || *selector.get().current();

    let Results {
        chart_description,
        baseline_label,
        proposed_label,
        metric_name,
        ..
    } = results;

    let buttons = DATASETS
        .iter()
        .enumerate()
        .map(|(i, d)| {
            view! {
                <button
                    class=move || if selector.get().is_selected(i) { "dataset-btn selected" } else { "dataset-btn" }
                    on:click=move |_| set_selector.update(|s| {
                        if let Err(err) = s.select(i) {
                            web_sys::console::error_1(&err.to_string().into());
                        }
                    })
                >
                    {d.name}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="chart card dark">
            <div class="chart-copy">
                <h3 class="diagram-title">"Performance Metrics"</h3>
                <p>{chart_description}</p>
                <div class="dataset-buttons">{buttons}</div>
                <div class="metric-name">{format!("📊 {metric_name} (Higher is Better)")}</div>
            </div>
            <div class="bars">
                <div class="bar-column">
                    <div class="bar-slot">
                        <div class="bar-value">{move || score_label(current().baseline)}</div>
                        <div class="bar baseline" style=move || bar_style(current().baseline_height_pct(), 0)></div>
                    </div>
                    <div class="bar-label">{baseline_label}</div>
                </div>
                <div class="bar-column">
                    <div class="bar-slot">
                        <div class="bar-value">{move || score_label(current().proposed)}</div>
                        <div class="bar proposed" style=move || bar_style(current().proposed_height_pct(), 100)></div>
                    </div>
                    <div class="bar-label accent">{proposed_label}</div>
                </div>
            </div>
        </div>
    }
}
