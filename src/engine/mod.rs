//! Offline render engine.
//!
//! Wires the DSP primitives into one batch pass:
//!
//! ```text
//! tones ──→ dry buffer (+ silent tail) ──→ SchroederReverb ──→ normalize ──→ sink
//! ```
//!
//! Every buffer lives for one call to [`Renderer::render`]; nothing is shared
//! between renders, so the same configuration always yields bit-identical
//! output.

pub mod dry;

use crate::config::RenderConfig;
use crate::dsp::normalize::{normalize_in_place, peak};
use crate::dsp::reverb::SchroederReverb;
use crate::error::{ensure_finite, Result, Stage};
use crate::io::{OutputFormat, SampleSink, WavSink};

pub use dry::synthesize_dry;

/// A finished render.
#[derive(Debug, Clone, PartialEq)]
pub struct Render {
    pub samples: Vec<f32>,
    pub format: OutputFormat,
    /// Divisor applied by the final normalization (`1.0` if none).
    pub gain_divisor: f32,
}

pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Validate `config` and build a renderer for it.
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn reverb(&self) -> SchroederReverb {
        SchroederReverb::new(&self.config.reverb.combs, &self.config.reverb.all_passes)
            .with_all_pass_normalization(self.config.reverb.normalize_all_pass_stages)
    }

    /// Run synthesis, reverb and normalization.
    pub fn render(&self) -> Result<Render> {
        let config = &self.config;
        // validate() rejects negative counts
        let harmonics = config.harmonics as usize;

        let dry = synthesize_dry(
            &config.tones,
            config.sample_rate,
            harmonics,
            config.dry_len(),
            config.total_len(),
        );
        ensure_finite(Stage::Dry, &dry)?;
        tracing::debug!(
            samples = dry.len(),
            tail = config.tail_len(),
            peak = peak(&dry),
            "dry signal synthesized"
        );

        let mut samples = self.reverb().process(&dry)?;
        let gain_divisor = normalize_in_place(&mut samples);
        ensure_finite(Stage::Output, &samples)?;
        tracing::debug!(gain_divisor, "output normalized");

        for (index, sample) in samples.iter().take(config.preview_samples).enumerate() {
            tracing::trace!(index, sample, "output");
        }

        let format = OutputFormat::mono(config.sample_rate, config.bit_depth, samples.len());
        Ok(Render {
            samples,
            format,
            gain_divisor,
        })
    }

    /// Render and hand the result to `sink`.
    pub fn render_to<S: SampleSink + ?Sized>(&self, sink: &mut S) -> Result<Render> {
        let render = self.render()?;
        if let Err(err) = sink.write(&render.format, &render.samples) {
            tracing::error!(
                samples = render.samples.len(),
                peak = peak(&render.samples),
                "render finished but could not be written: {err}"
            );
            return Err(err);
        }
        Ok(render)
    }

    /// Render to a WAV file at the configured output path.
    pub fn render_to_file(&self) -> Result<Render> {
        let mut sink = WavSink::new(&self.config.output_path);
        self.render_to(&mut sink)
    }
}
