//! Render configuration.
//!
//! Every constant of a render lives here and is passed to the engine
//! explicitly. [`RenderConfig::default`] reproduces the stock patch: an A4 and
//! an F4 sawtooth through a four-comb, two-allpass Schroeder reverb.

use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::reverb::FilterParams;
use crate::error::{Error, Result};

/// Bit depths the WAV sink can write.
pub const SUPPORTED_BIT_DEPTHS: [u16; 4] = [8, 16, 24, 32];

/// Longest tone or tail a single render accepts (one hour each).
pub const MAX_SECONDS: f32 = 3_600.0;

/// One oscillator voice in the dry signal.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Fundamental in Hz.
    pub frequency: f32,
    pub amplitude: f32,
}

impl Tone {
    pub const fn new(frequency: f32, amplitude: f32) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
#[derive(Debug, Clone, PartialEq)]
pub struct ReverbConfig {
    /// Parallel comb bank, summed.
    pub combs: Vec<FilterParams>,
    /// Series allpass chain, applied in order.
    pub all_passes: Vec<FilterParams>,
    /// Peak-normalize after every allpass stage as well as at the end.
    pub normalize_all_pass_stages: bool,
}

impl Default for ReverbConfig {
    fn default() -> Self {
        // Delays and gains from the Stanford CCRMA Schroeder reverb notes.
        Self {
            combs: vec![
                FilterParams::new(0.742, 4799),
                FilterParams::new(0.733, 4999),
                FilterParams::new(0.715, 5399),
                FilterParams::new(0.697, 5801),
            ],
            all_passes: vec![FilterParams::new(0.136, 900), FilterParams::new(0.136, 900)],
            normalize_all_pass_stages: true,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub sample_rate: u32,
    pub bit_depth: u16,
    /// Length of the synthesized tone.
    pub duration_secs: f32,
    /// Silence appended after the tone so the reverb can decay.
    pub tail_secs: f32,
    /// Number of Fourier partials per oscillator.
    pub harmonics: i32,
    pub tones: Vec<Tone>,
    pub reverb: ReverbConfig,
    pub output_path: PathBuf,
    /// Number of leading output samples to emit at trace level.
    pub preview_samples: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            bit_depth: 16,
            duration_secs: 1.0,
            tail_secs: 0.0,
            harmonics: 20,
            tones: vec![Tone::new(440.0, 0.5), Tone::new(349.23, 0.5)],
            reverb: ReverbConfig::default(),
            output_path: PathBuf::from("sawtooth_reverb.wav"),
            preview_samples: 150,
        }
    }
}

impl RenderConfig {
    /// Number of synthesized (dry) samples.
    pub fn dry_len(&self) -> usize {
        seconds_to_samples(self.duration_secs, self.sample_rate)
    }

    /// Number of silent samples appended after the dry signal.
    pub fn tail_len(&self) -> usize {
        seconds_to_samples(self.tail_secs, self.sample_rate)
    }

    /// Length of every buffer in the pipeline. Saturates instead of
    /// overflowing; `validate` rejects lengths that large.
    pub fn total_len(&self) -> usize {
        self.dry_len().saturating_add(self.tail_len())
    }

    /// Check every field before a render starts.
    ///
    /// Coefficients with magnitude `>= 1` are allowed but logged, since the
    /// filters may still stay finite over a short buffer.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(Error::invalid("sample_rate", "must be positive"));
        }
        if !SUPPORTED_BIT_DEPTHS.contains(&self.bit_depth) {
            return Err(Error::invalid(
                "bit_depth",
                format!(
                    "{} is not one of {:?}",
                    self.bit_depth, SUPPORTED_BIT_DEPTHS
                ),
            ));
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(Error::invalid(
                "duration_secs",
                format!("{} is not a positive duration", self.duration_secs),
            ));
        }
        if self.duration_secs > MAX_SECONDS {
            return Err(Error::invalid(
                "duration_secs",
                format!("{} exceeds the {MAX_SECONDS}s limit", self.duration_secs),
            ));
        }
        if self.dry_len() == 0 {
            return Err(Error::invalid(
                "duration_secs",
                "shorter than one sample period",
            ));
        }
        if !self.tail_secs.is_finite() || self.tail_secs < 0.0 {
            return Err(Error::invalid(
                "tail_secs",
                format!("{} is negative or not finite", self.tail_secs),
            ));
        }
        if self.tail_secs > MAX_SECONDS {
            return Err(Error::invalid(
                "tail_secs",
                format!("{} exceeds the {MAX_SECONDS}s limit", self.tail_secs),
            ));
        }
        if self.dry_len().checked_add(self.tail_len()).is_none() {
            return Err(Error::invalid("tail_secs", "total length overflows"));
        }
        if self.harmonics < 0 {
            return Err(Error::invalid(
                "harmonics",
                format!("{} is negative", self.harmonics),
            ));
        }

        if self.tones.is_empty() {
            return Err(Error::invalid("tones", "at least one tone is required"));
        }
        for tone in &self.tones {
            if !tone.frequency.is_finite() || tone.frequency <= 0.0 {
                return Err(Error::invalid(
                    "tones",
                    format!("frequency {} is not positive", tone.frequency),
                ));
            }
            if !tone.amplitude.is_finite() {
                return Err(Error::invalid(
                    "tones",
                    format!("amplitude {} is not finite", tone.amplitude),
                ));
            }
        }

        if self.reverb.combs.is_empty() {
            return Err(Error::invalid(
                "reverb.combs",
                "at least one comb filter is required",
            ));
        }
        let len = self.total_len();
        self.validate_filters("reverb.combs", &self.reverb.combs, len)?;
        self.validate_filters("reverb.all_passes", &self.reverb.all_passes, len)?;

        Ok(())
    }

    fn validate_filters(
        &self,
        field: &'static str,
        filters: &[FilterParams],
        len: usize,
    ) -> Result<()> {
        for (index, params) in filters.iter().enumerate() {
            if params.delay >= len {
                return Err(Error::invalid(
                    field,
                    format!(
                        "stage {} delay {} must be within 0..{len}",
                        index + 1,
                        params.delay
                    ),
                ));
            }
            if !params.coefficient.is_finite() {
                return Err(Error::invalid(
                    field,
                    format!("stage {} coefficient is not finite", index + 1),
                ));
            }
            if !params.is_stable() {
                tracing::warn!(
                    stage = index + 1,
                    coefficient = params.coefficient,
                    "{field}: coefficient magnitude >= 1, output may diverge"
                );
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl RenderConfig {
    /// Parse a TOML document. Missing fields keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

fn seconds_to_samples(seconds: f32, sample_rate: u32) -> usize {
    if !seconds.is_finite() || seconds <= 0.0 {
        return 0;
    }
    (seconds as f64 * sample_rate as f64).round() as usize
}
