use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use spline_editor::{Anchor, BezierSampler, SampleForm, SplineChain, Vector2};
use std::hint::black_box;

fn build_synthetic_chain(anchor_count: usize) -> SplineChain {
    let mut chain = SplineChain::new();

    for index in 0..anchor_count {
        let x = index as f32 * 40.0;
        let y = if index % 2 == 0 { 100.0 } else { 300.0 };
        chain.push_back(Anchor::new(x, y));
    }

    chain
}

fn bench_bezier_sampling(c: &mut Criterion) {
    let control = [
        Vector2::new(0.0, 0.0),
        Vector2::new(0.0, 50.0),
        Vector2::new(50.0, 100.0),
        Vector2::new(100.0, 100.0),
    ];
    let mut group = c.benchmark_group("bezier_sampling");

    for &segments in &[200usize, 2_000usize] {
        let sampler = BezierSampler::new(segments).expect("Segmentanzahl > 0");

        group.bench_with_input(
            BenchmarkId::new("points", segments),
            &sampler,
            |b, sampler| {
                b.iter(|| {
                    let samples = sampler
                        .sample(black_box(&control), SampleForm::Point)
                        .expect("4 Kontrollpunkte");
                    black_box(samples.len())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("pairs", segments),
            &sampler,
            |b, sampler| {
                b.iter(|| {
                    let samples = sampler
                        .sample(black_box(&control), SampleForm::Pair)
                        .expect("4 Kontrollpunkte");
                    black_box(samples.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_chain_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_queries");
    let sampler = BezierSampler::default();

    for &anchor_count in &[10usize, 100usize] {
        let chain = build_synthetic_chain(anchor_count);

        group.bench_with_input(
            BenchmarkId::new("flatten_absolute", anchor_count),
            &chain,
            |b, chain| b.iter(|| black_box(chain.flatten_absolute().len())),
        );

        group.bench_with_input(
            BenchmarkId::new("bezier_polylines", anchor_count),
            &chain,
            |b, chain| {
                b.iter(|| {
                    let polylines = chain
                        .bezier_polylines(black_box(&sampler))
                        .expect("Fenster mit 4 Punkten");
                    black_box(polylines.len())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("nearest_point", anchor_count),
            &chain,
            |b, chain| {
                b.iter(|| black_box(chain.nearest_point(black_box(Vec2::new(205.0, 110.0)), 30.0)))
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_bezier_sampling, bench_chain_queries);
criterion_main!(core_benches);
