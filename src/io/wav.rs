//! Mono PCM WAV output through `hound`.

use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{Error, Result};
use crate::io::{OutputFormat, SampleSink};

/// Writes each render to a WAV file at a fixed path.
#[derive(Debug, Clone)]
pub struct WavSink {
    path: PathBuf,
}

impl WavSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn spec(format: &OutputFormat) -> WavSpec {
        WavSpec {
            channels: format.channels,
            sample_rate: format.sample_rate,
            bits_per_sample: format.bit_depth,
            sample_format: if format.bit_depth == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        }
    }

    fn write_samples(&self, format: &OutputFormat, samples: &[f32]) -> hound::Result<()> {
        let mut writer = WavWriter::create(&self.path, Self::spec(format))?;
        match format.bit_depth {
            8 => {
                for &s in samples {
                    writer.write_sample(quantize(s, i8::MAX as f32) as i8)?;
                }
            }
            16 => {
                for &s in samples {
                    writer.write_sample(quantize(s, i16::MAX as f32) as i16)?;
                }
            }
            24 => {
                for &s in samples {
                    writer.write_sample(quantize(s, 8_388_607.0) as i32)?;
                }
            }
            32 => {
                for &s in samples {
                    writer.write_sample(s)?;
                }
            }
            _ => return Err(hound::Error::Unsupported),
        }
        writer.finalize()
    }
}

fn quantize(sample: f32, full_scale: f32) -> f32 {
    (sample.clamp(-1.0, 1.0) * full_scale).round()
}

impl SampleSink for WavSink {
    fn write(&mut self, format: &OutputFormat, samples: &[f32]) -> Result<()> {
        format.check_len(samples)?;
        self.write_samples(format, samples)
            .map_err(|source| Error::Sink {
                path: self.path.clone(),
                source,
            })?;
        tracing::info!(
            path = %self.path.display(),
            samples = samples.len(),
            sample_rate = format.sample_rate,
            bit_depth = format.bit_depth,
            "wrote wav"
        );
        Ok(())
    }
}
