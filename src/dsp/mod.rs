//! Offline DSP primitives used by the render engine.
//!
//! Everything here works on whole, fully materialized buffers. Filters take a
//! borrowed input and return a freshly allocated output, so independent stages
//! can share one input without coordination.

/// Elementwise summing of parallel signal paths.
pub mod mix;
/// Peak scanning and normalization.
pub mod normalize;
/// Band-limited additive sawtooth oscillator.
pub mod oscillator;
/// Comb and allpass filters and the Schroeder reverb built from them.
pub mod reverb;

pub use oscillator::SawtoothOscillator;
pub use reverb::{FilterParams, SchroederReverb};
