//! Error type shared by every stage of a render.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline stage a buffer came out of. Used to locate numeric blow-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Dry,
    Comb(usize),
    CombSum,
    AllPass(usize),
    Output,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Dry => write!(f, "dry synthesis"),
            Stage::Comb(index) => write!(f, "comb filter {}", index + 1),
            Stage::CombSum => write!(f, "comb bank sum"),
            Stage::AllPass(index) => write!(f, "all-pass filter {}", index + 1),
            Stage::Output => write!(f, "output normalization"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("delay of {delay} samples exceeds buffer length {len}")]
    DelayOutOfRange { delay: usize, len: usize },

    #[error("buffer length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("non-finite sample {value} at index {index} after {stage}; check filter coefficients")]
    NonFinite {
        stage: Stage,
        index: usize,
        value: f32,
    },

    #[error("failed to write audio to {}", path.display())]
    Sink {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("failed to read config file {}", path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "serde")]
    #[error("failed to parse config")]
    ConfigParse(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Fail with [`Error::NonFinite`] on the first NaN or infinite sample.
pub fn ensure_finite(stage: Stage, samples: &[f32]) -> Result<()> {
    match samples.iter().position(|s| !s.is_finite()) {
        Some(index) => Err(Error::NonFinite {
            stage,
            index,
            value: samples[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_buffer_passes() {
        assert!(ensure_finite(Stage::Dry, &[0.0, -1.0, 3.5]).is_ok());
    }

    #[test]
    fn reports_first_bad_sample() {
        let err = ensure_finite(Stage::AllPass(1), &[0.0, f32::INFINITY, f32::NAN]).unwrap_err();
        match err {
            Error::NonFinite { stage, index, .. } => {
                assert_eq!(stage, Stage::AllPass(1));
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn stage_names_are_one_based() {
        assert_eq!(Stage::Comb(0).to_string(), "comb filter 1");
        assert_eq!(Stage::AllPass(1).to_string(), "all-pass filter 2");
    }
}
