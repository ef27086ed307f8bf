//! Benchmarks for buffer summing and normalization.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sawverb::dsp::{mix, normalize};

use crate::BUFFER_SIZES;

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/mix");

    for &size in BUFFER_SIZES {
        let signals: Vec<Vec<f32>> = (0..4)
            .map(|k| (0..size).map(|i| (i as f32 * 0.01 * (k + 1) as f32).sin()).collect())
            .collect();

        // Four-way sum, the shape of the comb bank
        group.bench_with_input(BenchmarkId::new("sum_4", size), &size, |b, _| {
            b.iter(|| mix::sum_buffers(signals.iter().map(|s| black_box(s.as_slice())), size))
        });

        let loud: Vec<f32> = signals[0].iter().map(|s| s * 3.0).collect();
        group.bench_with_input(BenchmarkId::new("normalize", size), &size, |b, _| {
            b.iter(|| normalize::normalize(black_box(&loud)))
        });
    }

    group.finish();
}
