//! sawverb - render a reverberated sawtooth chord to WAV
//!
//! # Usage
//!
//! ```bash
//! sawverb
//! sawverb --output chord.wav --duration 2 --tail 1.5
//! sawverb --config patch.toml
//! RUST_LOG=sawverb=trace sawverb   # also logs the first output samples
//! ```

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use sawverb::{RenderConfig, Renderer};

#[derive(Parser)]
#[command(name = "sawverb")]
#[command(
    author,
    version,
    about = "Band-limited sawtooth synthesis through a Schroeder reverb"
)]
struct Args {
    /// TOML file overriding the default render configuration
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// WAV file to write (overrides `output_path` from the config)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Tone duration in seconds
    #[arg(long, short = 'd')]
    duration: Option<f32>,

    /// Silence appended for the reverb tail, in seconds
    #[arg(long)]
    tail: Option<f32>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RenderConfig::from_toml_file(path)
            .wrap_err_with(|| format!("loading {}", path.display()))?,
        None => RenderConfig::default(),
    };
    if let Some(output) = args.output {
        config.output_path = output;
    }
    if let Some(duration) = args.duration {
        config.duration_secs = duration;
    }
    if let Some(tail) = args.tail {
        config.tail_secs = tail;
    }

    tracing::info!(
        sample_rate = config.sample_rate,
        bit_depth = config.bit_depth,
        harmonics = config.harmonics,
        tones = config.tones.len(),
        samples = config.total_len(),
        "rendering"
    );

    let renderer = Renderer::new(config)?;
    let render = renderer.render_to_file().wrap_err("render failed")?;

    tracing::info!(
        path = %renderer.config().output_path.display(),
        seconds = render.samples.len() as f32 / render.format.sample_rate as f32,
        gain_divisor = render.gain_divisor,
        "done"
    );
    Ok(())
}
