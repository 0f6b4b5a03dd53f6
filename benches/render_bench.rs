//! Benchmarks for tab rendering and chart building
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quickcommerce::dashboard::*;

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let loaded = StaticSource::snapshot();
    let empty = MetricGroups::default();

    for tab in Tab::ALL {
        group.bench_function(format!("{}_loaded", tab), |b| {
            b.iter(|| render(black_box(tab), black_box(&loaded)))
        });
    }

    group.bench_function("data_empty", |b| {
        b.iter(|| render(black_box(Tab::Data), black_box(&empty)))
    });

    group.finish();
}

fn bench_charts(c: &mut Criterion) {
    let mut group = c.benchmark_group("charts");

    group.bench_function("trend_charts", |b| b.iter(trend_charts));

    group.bench_function("serialize_trend_charts", |b| {
        let charts = trend_charts();
        b.iter(|| serde_json::to_vec(black_box(&charts)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_charts);
criterion_main!(benches);
