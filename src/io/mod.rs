// Purpose - external interfaces, where rendered audio leaves the crate

pub mod wav;

use crate::error::{Error, Result};

pub use wav::WavSink;

/// Format metadata handed to a sink alongside the samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormat {
    pub channels: u16,
    pub sample_rate: u32,
    pub bit_depth: u16,
    /// Samples per channel.
    pub total_samples: usize,
}

impl OutputFormat {
    pub fn mono(sample_rate: u32, bit_depth: u16, total_samples: usize) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bit_depth,
            total_samples,
        }
    }

    pub(crate) fn check_len(&self, samples: &[f32]) -> Result<()> {
        let expected = self.total_samples * self.channels as usize;
        if samples.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(())
    }
}

/// Destination for a finished render.
pub trait SampleSink {
    fn write(&mut self, format: &OutputFormat, samples: &[f32]) -> Result<()>;
}

/// Keeps the last render in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub format: Option<OutputFormat>,
    pub samples: Vec<f32>,
}

impl SampleSink for MemorySink {
    fn write(&mut self, format: &OutputFormat, samples: &[f32]) -> Result<()> {
        format.check_len(samples)?;
        self.format = Some(*format);
        self.samples = samples.to_vec();
        Ok(())
    }
}
