//! Benchmarks for complete renders.

use criterion::Criterion;
use sawverb::{RenderConfig, Renderer};

pub fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/render");
    group.sample_size(10);

    // Stock patch: two saws, 20 partials, 1s
    let renderer = Renderer::new(RenderConfig::default()).expect("default config is valid");
    group.bench_function("default_1s", |b| b.iter(|| renderer.render()));

    // Same patch with a 2s decay tail
    let renderer = Renderer::new(RenderConfig {
        tail_secs: 2.0,
        ..Default::default()
    })
    .expect("tail config is valid");
    group.bench_function("default_1s_tail_2s", |b| b.iter(|| renderer.render()));

    group.finish();
}
