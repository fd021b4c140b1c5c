use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use graph_curve_editor::core::{ControlPoint, ViewGesture};
use graph_curve_editor::{sample, EditMode, SmoothCurve, ViewportTransform};
use std::hint::black_box;

fn build_smooth_curve(point_count: usize) -> SmoothCurve {
    let points = (0..point_count)
        .map(|i| {
            let x = i as f64 / (point_count - 1) as f64;
            ControlPoint::new(x, (x * 7.0).sin() * 0.5 + x)
        })
        .collect();
    SmoothCurve::new(points).expect("gültige Punkte")
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");

    for &point_count in &[2usize, 16, 128] {
        let curve = build_smooth_curve(point_count);
        group.bench_with_input(
            BenchmarkId::new("smooth", point_count),
            &curve,
            |b, curve| b.iter(|| black_box(sample(curve, black_box((0.0, 1.0)), 200).len())),
        );
    }

    for mode in [EditMode::Bezier, EditMode::Elastic, EditMode::Bounce] {
        let curve = mode.default_curve();
        group.bench_function(BenchmarkId::new("segment", format!("{mode:?}")), |b| {
            b.iter(|| black_box(sample(&curve, black_box((0.0, 1.0)), 200).len()))
        });
    }

    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let mut viewport = ViewportTransform::new(1280.0, 720.0).expect("gültige Größe");
    viewport
        .apply_gesture(ViewGesture::Zoom {
            factor: 3.0,
            focus: DVec2::new(640.0, 360.0),
        })
        .expect("Zoom gültig");
    let points: Vec<DVec2> = (0..1000)
        .map(|i| DVec2::new((i % 1280) as f64, ((i * 7) % 720) as f64))
        .collect();

    c.bench_function("screen_graph_round_trip_1000", |b| {
        b.iter(|| {
            let mut acc = DVec2::ZERO;
            for &p in &points {
                acc += viewport.graph_to_screen(viewport.screen_to_graph(black_box(p)));
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_sampling, bench_transform);
criterion_main!(benches);
