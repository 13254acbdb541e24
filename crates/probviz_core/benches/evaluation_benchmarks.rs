//! Criterion benchmarks for curve evaluation
//!
//! Run with: cargo bench -p probviz_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use probviz_core::{DistributionKind, ParameterSession, ParameterValues, evaluate, render_kind};

fn bench_default_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("default_curve");
    let values = ParameterValues::new();

    for kind in DistributionKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            b.iter(|| evaluate(black_box(kind), black_box(&values)))
        });
    }

    group.finish();
}

fn bench_full_render(c: &mut Criterion) {
    let session = ParameterSession::new(DistributionKind::Normal);

    c.bench_function("render_normal", |b| {
        b.iter(|| render_kind(black_box(session.kind()), black_box(session.values())))
    });
}

fn bench_slider_drag(c: &mut Criterion) {
    // One render per slider step across the whole sigma range
    c.bench_function("drag_sigma_full_range", |b| {
        b.iter(|| {
            let mut session = ParameterSession::new(DistributionKind::Normal);
            session.set("sigma", 0.1).ok();
            for _ in 0..990 {
                session.nudge("sigma", 1).ok();
                black_box(render_kind(session.kind(), session.values()).ok());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_default_curves,
    bench_full_render,
    bench_slider_drag
);
criterion_main!(benches);
