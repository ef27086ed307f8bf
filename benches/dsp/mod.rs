//! Benchmarks for low-level DSP primitives.

mod mix;
mod oscillator;
mod reverb;

pub use mix::bench_mix;
pub use oscillator::bench_oscillator;
pub use reverb::bench_reverb;
