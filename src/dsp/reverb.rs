//! Reverb - Room Simulation via Delay Networks
//!
//! Reverb simulates the sound of a space by creating many delayed reflections
//! of the input signal. This implementation is the classic Schroeder reverb,
//! run offline over a fully materialized buffer.
//!
//! # Schroeder Reverb Architecture
//!
//! ```text
//! Input ──┬──→ [Comb 1] ──┐
//!         ├──→ [Comb 2] ──┤
//!         ├──→ [Comb 3] ──┼──→ (+) ──→ [Allpass 1] ──→ [Allpass 2] ──→ Output
//!         └──→ [Comb 4] ──┘
//! ```
//!
//! ## Comb Filters
//!
//! A comb filter creates a series of equally-spaced echoes that decay over time.
//! It resonates at multiples of `sample_rate / delay`.
//!
//! ```text
//! y[n] = x[n]                              n < delay
//! y[n] = x[n] + feedback * y[n - delay]    n ≥ delay
//! ```
//!
//! The delay times are chosen to be mutually prime (no common factors) to avoid
//! resonant buildup at specific frequencies.
//!
//! ## Allpass Filters
//!
//! Allpass filters pass all frequencies equally but shift their phase. In reverb,
//! they add density and diffusion without coloring the sound.
//!
//! ```text
//! y[n] = x[n]                                      n < delay
//! y[n] = -g * x[n] + x[n - delay] + g * y[n - delay]   n ≥ delay
//! ```
//!
//! Each allpass stage peak-normalizes its own output before handing it on.
//!
//! # Stability
//!
//! Neither filter clamps its coefficient. With `|g| >= 1` the recursion grows
//! without bound, and a long enough buffer overflows to infinity. Every stage's
//! output is checked for non-finite samples so a blow-up fails the render
//! instead of being hidden by normalization.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::mix::sum_buffers;
use crate::dsp::normalize::normalize_in_place;
use crate::error::{ensure_finite, Error, Result, Stage};

/// Coefficient and delay for one comb or allpass stage.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    /// Feedback (comb) or filter (allpass) coefficient.
    pub coefficient: f32,
    /// Delay in samples.
    pub delay: usize,
}

impl FilterParams {
    pub const fn new(coefficient: f32, delay: usize) -> Self {
        Self { coefficient, delay }
    }

    /// Whether the recursion is guaranteed to decay.
    pub fn is_stable(&self) -> bool {
        self.coefficient.abs() < 1.0
    }
}

/// Run the comb recursion over `input`, producing `output_len` samples.
///
/// Samples past the end of `input` are read as silence, so a short input
/// rings out into the extra length. `delay` may equal `output_len`, in which
/// case the feedback term never applies and the input passes through.
pub fn comb_filter(
    input: &[f32],
    coefficient: f32,
    delay: usize,
    output_len: usize,
) -> Result<Vec<f32>> {
    if delay > output_len {
        return Err(Error::DelayOutOfRange {
            delay,
            len: output_len,
        });
    }

    let x = |i: usize| input.get(i).copied().unwrap_or(0.0);
    let mut y = vec![0.0f32; output_len];

    for i in 0..delay {
        y[i] = x(i);
    }
    for i in delay..output_len {
        y[i] = x(i) + coefficient * y[i - delay];
    }

    Ok(y)
}

/// Run the allpass recursion over `input` and peak-normalize the result.
pub fn all_pass_filter(input: &[f32], coefficient: f32, delay: usize) -> Result<Vec<f32>> {
    let mut y = all_pass_recursion(input, coefficient, delay)?;
    normalize_in_place(&mut y);
    Ok(y)
}

fn all_pass_recursion(input: &[f32], coefficient: f32, delay: usize) -> Result<Vec<f32>> {
    let len = input.len();
    if delay > len {
        return Err(Error::DelayOutOfRange { delay, len });
    }

    let x = input;
    let mut y = vec![0.0f32; len];

    y[..delay].copy_from_slice(&x[..delay]);
    for i in delay..len {
        y[i] = -coefficient * x[i] + x[i - delay] + coefficient * y[i - delay];
    }

    Ok(y)
}

/// A feedback comb filter stage.
#[derive(Debug, Clone, Copy)]
pub struct CombFilter {
    params: FilterParams,
}

impl CombFilter {
    pub fn new(params: FilterParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> FilterParams {
        self.params
    }

    pub fn process(&self, input: &[f32], output_len: usize) -> Result<Vec<f32>> {
        comb_filter(
            input,
            self.params.coefficient,
            self.params.delay,
            output_len,
        )
    }
}

/// An allpass diffusion stage.
#[derive(Debug, Clone, Copy)]
pub struct AllPassFilter {
    params: FilterParams,
}

impl AllPassFilter {
    pub fn new(params: FilterParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> FilterParams {
        self.params
    }

    /// Recursion followed by the stage's own peak normalization.
    pub fn process(&self, input: &[f32]) -> Result<Vec<f32>> {
        all_pass_filter(input, self.params.coefficient, self.params.delay)
    }

    /// Recursion only.
    pub fn process_raw(&self, input: &[f32]) -> Result<Vec<f32>> {
        all_pass_recursion(input, self.params.coefficient, self.params.delay)
    }
}

/// Schroeder reverb: parallel comb bank into a series allpass chain.
pub struct SchroederReverb {
    combs: Vec<CombFilter>,
    all_passes: Vec<AllPassFilter>,
    normalize_all_pass_stages: bool,
}

impl SchroederReverb {
    pub fn new(combs: &[FilterParams], all_passes: &[FilterParams]) -> Self {
        Self {
            combs: combs.iter().copied().map(CombFilter::new).collect(),
            all_passes: all_passes.iter().copied().map(AllPassFilter::new).collect(),
            normalize_all_pass_stages: true,
        }
    }

    /// Toggle the peak normalization each allpass stage applies to its output.
    pub fn with_all_pass_normalization(mut self, enabled: bool) -> Self {
        self.normalize_all_pass_stages = enabled;
        self
    }

    pub fn combs(&self) -> &[CombFilter] {
        &self.combs
    }

    pub fn all_passes(&self) -> &[AllPassFilter] {
        &self.all_passes
    }

    /// Run the comb bank over `input` and return each comb's output, in order.
    ///
    /// The combs only share the read-only input; with the `parallel` feature
    /// they run on the rayon pool.
    pub fn comb_bank(&self, input: &[f32]) -> Result<Vec<Vec<f32>>> {
        let len = input.len();

        #[cfg(feature = "parallel")]
        let outputs: Vec<Vec<f32>> = {
            use rayon::prelude::*;
            self.combs
                .par_iter()
                .map(|comb| comb.process(input, len))
                .collect::<Result<_>>()?
        };

        #[cfg(not(feature = "parallel"))]
        let outputs: Vec<Vec<f32>> = self
            .combs
            .iter()
            .map(|comb| comb.process(input, len))
            .collect::<Result<_>>()?;

        for (index, output) in outputs.iter().enumerate() {
            ensure_finite(Stage::Comb(index), output)?;
        }
        Ok(outputs)
    }

    /// Process a whole buffer. The output has the same length as `input`.
    pub fn process(&self, input: &[f32]) -> Result<Vec<f32>> {
        let comb_outputs = self.comb_bank(input)?;
        let mut wet = sum_buffers(comb_outputs.iter().map(Vec::as_slice), input.len())?;
        ensure_finite(Stage::CombSum, &wet)?;
        tracing::debug!(combs = self.combs.len(), "comb bank summed");

        for (index, all_pass) in self.all_passes.iter().enumerate() {
            wet = if self.normalize_all_pass_stages {
                all_pass.process(&wet)?
            } else {
                all_pass.process_raw(&wet)?
            };
            ensure_finite(Stage::AllPass(index), &wet)?;
            tracing::debug!(stage = index + 1, "allpass applied");
        }

        Ok(wet)
    }
}
