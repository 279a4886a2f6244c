#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for DDA and Bresenham line rasterization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_raster::prelude::*;

fn line_algorithm_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");
    let mut canvas =
        PixelCanvas::filled(Size::new(1024, 1024), Rgb::WHITE).expect("canvas creation should succeed");

    for length in [10, 100, 1_000] {
        let end = Point::new(length, length / 3);
        for (name, algorithm) in [("dda", LineAlgorithm::Dda), ("bresenham", LineAlgorithm::Bresenham)] {
            group.bench_with_input(BenchmarkId::new(name, length), &end, |b, &end| {
                b.iter(|| {
                    draw_line(
                        &mut canvas,
                        black_box(Point::ORIGIN),
                        black_box(end),
                        algorithm,
                        LineStyle::Solid,
                        Rgb::BLACK,
                    );
                });
            });
        }
    }

    group.finish();
}

fn line_style_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_style");
    let mut canvas =
        PixelCanvas::filled(Size::new(512, 512), Rgb::WHITE).expect("canvas creation should succeed");

    for style in [LineStyle::Solid, LineStyle::Dashed, LineStyle::Dotted] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{style:?}")), &style, |b, &style| {
            b.iter(|| {
                draw_line(
                    &mut canvas,
                    Point::new(0, 511),
                    Point::new(511, 0),
                    LineAlgorithm::Bresenham,
                    black_box(style),
                    Rgb::RED,
                );
            });
        });
    }

    group.finish();
}

fn polyline_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("polyline");
    let mut canvas =
        PixelCanvas::filled(Size::new(500, 500), Rgb::WHITE).expect("canvas creation should succeed");

    for depth in [2, 4, 6] {
        let path = koch_path(Point::new(100, 100), Point::new(400, 100), Point::new(250, 400), depth);
        group.bench_with_input(BenchmarkId::new("koch", depth), &path, |b, path| {
            b.iter(|| {
                draw_polyline(&mut canvas, black_box(path), LineAlgorithm::Dda, LineStyle::Solid, Rgb::BLACK);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, line_algorithm_benchmark, line_style_benchmark, polyline_benchmark);
criterion_main!(benches);
