//! Summing primitives for parallel signal paths.

/*
Summing
=======

Mixing is addition. Two oscillators become one dry signal by adding them
sample by sample; four comb filters become one reverb tail the same way.

    output[i] = a[i] + b[i] + ...

No weighting is applied here. Two saws at 0.5 each can peak near 1.2, and four
resonant combs can climb far past that. The level is brought back into range
once, at the end of the chain, by the normalizer.
*/

use crate::error::{Error, Result};

/// Add `src` into `dest` sample by sample. Both must have the same length.
pub fn sum_into(dest: &mut [f32], src: &[f32]) -> Result<()> {
    if dest.len() != src.len() {
        return Err(Error::LengthMismatch {
            expected: dest.len(),
            actual: src.len(),
        });
    }

    for (d, s) in dest.iter_mut().zip(src) {
        *d += s;
    }
    Ok(())
}

/// Elementwise sum of `buffers`, each of which must be `len` samples long.
///
/// Buffers are added in iteration order, so the result is reproducible bit
/// for bit.
pub fn sum_buffers<'a, I>(buffers: I, len: usize) -> Result<Vec<f32>>
where
    I: IntoIterator<Item = &'a [f32]>,
{
    let mut out = vec![0.0f32; len];
    for buffer in buffers {
        sum_into(&mut out, buffer)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_elementwise() {
        let a = [1.0, 2.0, 3.0];
        let b = [0.5, -2.0, 0.25];
        let c = [0.0, 1.0, -1.0];
        let out = sum_buffers([&a[..], &b[..], &c[..]], 3).unwrap();
        assert_eq!(out, vec![1.5, 1.0, 2.25]);
    }

    #[test]
    fn no_buffers_is_silence() {
        let out = sum_buffers(std::iter::empty(), 4).unwrap();
        assert_eq!(out, vec![0.0; 4]);
    }

    #[test]
    fn rejects_length_mismatch() {
        let mut dest = [0.0; 4];
        let err = sum_into(&mut dest, &[1.0; 3]).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn does_not_normalize() {
        let a = [0.9; 2];
        let out = sum_buffers([&a[..], &a[..]], 2).unwrap();
        assert_eq!(out, vec![1.8, 1.8]);
    }
}
