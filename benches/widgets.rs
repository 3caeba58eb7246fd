//! Criterion benchmarks for the widget timer layer.
//!
//! Run with:
//!   cargo bench
//!
//! Results are saved to target/criterion/

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use claimsite::step_cycler::{StepCyclerWidget, TICK_PERIOD};
use claimsite::timer::ManualScheduler;
use claimsite::training::{TrainingWidget, RUN_LENGTH};

/// Many mounted cyclers sharing one clock, advanced through a minute of ticks.
fn bench_cycler_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycler_ticks");

    for count in [1usize, 16, 256].iter() {
        group.throughput(Throughput::Elements(*count as u64 * 30));

        group.bench_with_input(BenchmarkId::new("mounted", count), count, |b, &count| {
            b.iter(|| {
                let sched = ManualScheduler::new();
                let hits = Rc::new(Cell::new(0u64));
                let widgets: Vec<_> = (0..count)
                    .map(|_| {
                        let hits = Rc::clone(&hits);
                        StepCyclerWidget::mount(&sched, move |_| hits.set(hits.get() + 1))
                    })
                    .collect();
                sched.advance(TICK_PERIOD * 30);
                drop(widgets);
                black_box(hits.get())
            });
        });
    }

    group.finish();
}

/// Full training runs, including the re-entry guard path.
fn bench_training_runs(c: &mut Criterion) {
    c.bench_function("training_run", |b| {
        let sched = ManualScheduler::new();
        let widget = TrainingWidget::mount(Rc::new(sched.clone()), |_| {});
        b.iter(|| {
            widget.trigger();
            widget.trigger();
            sched.advance(RUN_LENGTH + Duration::from_millis(1));
            black_box(widget.phase())
        });
    });
}

criterion_group!(benches, bench_cycler_ticks, bench_training_runs);
criterion_main!(benches);
