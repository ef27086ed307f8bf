pub mod config; // Render parameters and validation
pub mod dsp;
pub mod engine; // Batch synthesis → reverb → normalize pipeline
pub mod error;
pub mod io;

pub use config::{ReverbConfig, RenderConfig, Tone};
pub use engine::{Render, Renderer};
pub use error::{Error, Result, Stage};
