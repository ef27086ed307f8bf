//! Real-world scenario benchmarks.
//!
//! These run the whole pipeline the way the `sawverb` binary does, minus the
//! WAV write.

mod render;

pub use render::bench_render;
