//! Command line options.

use clap::Parser;
use ptty_renderer::{RenderConfig, RenderError};
use std::time::Duration;

/// Animated path-traced spheres rendered as text.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// Frame width in characters.
    #[arg(long, default_value_t = 158)]
    pub width: usize,

    /// Frame height in characters.
    #[arg(long, default_value_t = 42)]
    pub height: usize,

    /// Maximum paths traced per pixel.
    #[arg(long, short = 's', default_value_t = 500)]
    pub samples: u32,

    /// Maximum segments per path.
    #[arg(long, short = 'b', default_value_t = 5)]
    pub bounces: u32,

    /// Horizontal field of view in degrees.
    #[arg(long = "hfov", value_name = "DEGREES", default_value_t = 169.0)]
    pub horizontal_fov: f64,

    /// Vertical field of view in degrees.
    #[arg(long = "vfov", value_name = "DEGREES", default_value_t = 90.0)]
    pub vertical_fov: f64,

    /// Simulated time of the first frame.
    #[arg(long, default_value_t = 0.0)]
    pub start: f64,

    /// Simulated time at which the animation stops.
    #[arg(long, default_value_t = 20.0)]
    pub end: f64,

    /// Simulated time between frames.
    #[arg(long, default_value_t = 0.1)]
    pub step: f64,

    /// Real time to wait between frames, in milliseconds.
    #[arg(long = "delay", value_name = "MS", default_value_t = 1)]
    pub delay_ms: u64,

    /// Seed for the random source. Unseeded runs draw from OS entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Render rows in parallel.
    #[arg(long, short = 'p')]
    pub parallel: bool,

    /// Number of worker threads for parallel rendering (default: all cores).
    #[arg(long, short = 't', value_name = "NUM", requires = "parallel")]
    pub threads: Option<usize>,

    /// Render a single frame at the start time and exit.
    #[arg(long)]
    pub once: bool,

    /// Print frames one after another instead of redrawing in place.
    #[arg(long)]
    pub scroll: bool,
}

impl Options {
    /// Sampling settings, validated.
    pub fn render_config(&self) -> Result<RenderConfig, RenderError> {
        RenderConfig::new(self.samples, self.bounces)
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
