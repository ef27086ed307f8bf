//! Benchmarks for additive sawtooth generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sawverb::dsp::SawtoothOscillator;

use crate::BUFFER_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BUFFER_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Cost grows linearly with the partial count (one sin() per harmonic)
        for harmonics in [1usize, 20, 80] {
            let mut osc = SawtoothOscillator::new(0.5, 440.0, 44_100.0);
            group.bench_with_input(
                BenchmarkId::new(format!("saw_h{harmonics}"), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        osc.render(black_box(&mut buffer), black_box(harmonics));
                    })
                },
            );
        }
    }

    group.finish();
}
