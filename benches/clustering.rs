//! Performance measurement for dominant-color clustering at varying pixel counts

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use covermosaic::analysis::kmeans::cluster_pixels;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ndarray::Array2;
use std::hint::black_box;

// Synthetic covers: a deterministic gradient so runs are comparable
fn gradient_pixels(side: usize) -> Array2<f64> {
    let mut matrix = Array2::zeros((side * side, 3));
    for index in 0..side * side {
        let x = index % side;
        let y = index / side;
        let values = [
            (x * 255 / side) as f64,
            (y * 255 / side) as f64,
            ((x + y) * 255 / (2 * side)) as f64,
        ];
        for (channel, value) in values.iter().enumerate() {
            if let Some(cell) = matrix.get_mut((index, channel)) {
                *cell = *value;
            }
        }
    }
    matrix
}

/// Measures clustering cost as the pixel count grows from thumbnails to full covers
fn bench_cluster_pixels(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster_pixels");

    for side in &[32usize, 64, 128] {
        let pixels = gradient_pixels(*side);

        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, _| {
            b.iter(|| {
                let clustering = cluster_pixels(black_box(&pixels), 3, 0, 50);
                assert!(clustering.is_ok());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cluster_pixels);
criterion_main!(benches);
