use std::f32::consts::{PI, TAU};

/*
Band-Limited Sawtooth
=====================

An ideal sawtooth contains every harmonic of its fundamental, with the n-th
harmonic at 1/n the amplitude of the first. Sampling it directly aliases:
harmonics above Nyquist fold back down into the audible range as inharmonic
noise.

The additive approach sidesteps this by building the wave from its Fourier
series and simply stopping after H terms:

    saw(θ) = (2/π) · Σ_{n=1}^{H} (−1)^(n+1) · sin(n·θ) / n

  H = 1    pure sine at the fundamental
  H = 20   bright, buzzy saw (440 Hz → top partial at 8.8 kHz)
  H → ∞    ideal sawtooth, plus Gibbs overshoot of ~18% at the edges

More partials means a sharper ramp and more CPU. Nothing here stops you from
choosing H so large that the top partials cross Nyquist; pick H with
`H · frequency < sample_rate / 2` if aliasing matters.

Phase
-----

The phase advances by 2π·f/sr each sample and is wrapped back into [0, 2π).
Since sin(n·θ) is periodic in 2π for integer n, wrapping changes nothing
audible but keeps precision constant over long renders.
*/

pub struct SawtoothOscillator {
    frequency: f32,
    amplitude: f32,
    phase: f32,
    phase_increment: f32,
}

impl SawtoothOscillator {
    pub fn new(amplitude: f32, frequency: f32, sample_rate: f32) -> Self {
        Self {
            frequency,
            amplitude,
            phase: 0.0,
            phase_increment: TAU * frequency / sample_rate,
        }
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// Current phase in radians, always within `[0, 2π)`.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Produce one sample from the first `harmonics` partials and advance by
    /// one sample period. Zero harmonics yields silence.
    pub fn produce_sample(&mut self, harmonics: usize) -> f32 {
        let mut sum = 0.0f32;
        let mut sign = 1.0f32;
        for n in 1..=harmonics {
            let n = n as f32;
            sum += sign / n * (self.phase * n).sin();
            sign = -sign;
        }

        self.phase += self.phase_increment;
        if self.phase >= TAU || self.phase < 0.0 {
            self.phase = self.phase.rem_euclid(TAU);
        }

        (2.0 / PI) * self.amplitude * sum
    }

    /// Fill `out` with consecutive samples.
    pub fn render(&mut self, out: &mut [f32], harmonics: usize) {
        for sample in out.iter_mut() {
            *sample = self.produce_sample(harmonics);
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}
