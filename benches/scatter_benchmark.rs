//! Benchmark for scatter plot rendering.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_scatter::output::OutputFormat;
use trueno_scatter::prelude::*;

fn render_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scatter_render");

    for size in [100, 1_000, 10_000, 100_000] {
        let x_data: Vec<f32> = (0..size).map(|i| i as f32).collect();
        let y_data: Vec<f32> = (0..size).map(|i| (i as f32).sin()).collect();
        let mut plotter = Plotter::new();
        plotter.enable_grid(10);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let series = SampleSeries::new(black_box(&x_data), black_box(&y_data)).unwrap();
                plotter.render(&series).unwrap()
            });
        });
    }

    group.finish();
}

fn encode_benchmark(c: &mut Criterion) {
    let x_data: Vec<f32> = (0..1_000).map(|i| i as f32).collect();
    let y_data: Vec<f32> = x_data.iter().map(|v| v * v).collect();
    let mut plotter = Plotter::new();
    plotter
        .render(&SampleSeries::new(&x_data, &y_data).unwrap())
        .unwrap();

    let mut group = c.benchmark_group("scatter_encode");
    for format in [OutputFormat::Png, OutputFormat::Jpeg] {
        group.bench_function(format.to_string(), |b| {
            b.iter(|| format.encode(black_box(plotter.framebuffer())).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, render_benchmark, encode_benchmark);
criterion_main!(benches);
