//! Dry signal synthesis: one sawtooth per tone, summed.

use crate::config::Tone;
use crate::dsp::oscillator::SawtoothOscillator;

/// Sum one sawtooth per tone into a `total_len` buffer.
///
/// Only the first `dry_len` samples are synthesized; the rest stays silent so
/// the reverb has room to decay.
pub fn synthesize_dry(
    tones: &[Tone],
    sample_rate: u32,
    harmonics: usize,
    dry_len: usize,
    total_len: usize,
) -> Vec<f32> {
    let mut oscillators: Vec<SawtoothOscillator> = tones
        .iter()
        .map(|tone| SawtoothOscillator::new(tone.amplitude, tone.frequency, sample_rate as f32))
        .collect();

    let mut buffer = vec![0.0f32; total_len];
    for sample in buffer.iter_mut().take(dry_len) {
        *sample = oscillators
            .iter_mut()
            .map(|osc| osc.produce_sample(harmonics))
            .sum();
    }
    buffer
}
