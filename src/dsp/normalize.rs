//! Peak normalization.

/*
Peak Normalization
==================

Summing four comb filters easily pushes a signal well past full scale. Before
the buffer is quantized to PCM it has to come back into [-1.0, +1.0], or the
integer conversion clips.

    peak = max |x[i]|

    peak > 1.0   →  x[i] / peak   (loudest sample lands exactly on ±1.0)
    peak ≤ 1.0   →  untouched     (quiet signals are never boosted)

This is a whole-buffer operation: it needs to see every sample before it can
scale any of them, which is fine for an offline render and impossible for a
streaming one.
*/

/// Largest absolute sample value, or `0.0` for an empty buffer.
pub fn peak(buffer: &[f32]) -> f32 {
    let mut max = 0.0f32;
    for &sample in buffer {
        if sample.abs() > max {
            max = sample.abs();
        }
    }
    max
}

/// Scale `buffer` down so its peak is at most 1.0.
///
/// Returns the divisor that was applied (`1.0` when the buffer was already in
/// range).
pub fn normalize_in_place(buffer: &mut [f32]) -> f32 {
    let max = peak(buffer);
    if max > 1.0 {
        for sample in buffer.iter_mut() {
            *sample /= max;
        }
        max
    } else {
        1.0
    }
}

/// Copying form of [`normalize_in_place`].
pub fn normalize(buffer: &[f32]) -> Vec<f32> {
    let mut out = buffer.to_vec();
    normalize_in_place(&mut out);
    out
}
