//! Benchmarks for comb/allpass filters and the full reverb.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sawverb::dsp::reverb::{all_pass_filter, comb_filter, SchroederReverb};
use sawverb::ReverbConfig;

use crate::BUFFER_SIZES;

pub fn bench_reverb(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/reverb");
    let config = ReverbConfig::default();

    for &size in BUFFER_SIZES {
        // Generate a test signal (impulse-like with some content)
        let input: Vec<f32> = (0..size)
            .map(|i| {
                if i < 10 {
                    1.0 - (i as f32 / 10.0) // Initial impulse
                } else {
                    (i as f32 * 0.05).sin() * 0.1 // Quiet tail
                }
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("comb", size), &size, |b, _| {
            b.iter(|| comb_filter(black_box(&input), 0.742, 4799.min(size), size))
        });

        group.bench_with_input(BenchmarkId::new("allpass", size), &size, |b, _| {
            b.iter(|| all_pass_filter(black_box(&input), 0.136, 900))
        });

        let reverb = SchroederReverb::new(&config.combs, &config.all_passes);
        group.bench_with_input(BenchmarkId::new("schroeder", size), &size, |b, _| {
            b.iter(|| reverb.process(black_box(&input)))
        });
    }

    group.finish();
}
