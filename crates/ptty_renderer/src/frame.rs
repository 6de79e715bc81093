//! Frame buffer and whole-frame rendering.
//!
//! A frame is rendered either sequentially from one random stream, or row
//! by row in parallel with rayon, where every row gets its own seeded
//! stream so the result does not depend on thread scheduling.

use crate::renderer::{render_pixel, PixelEstimate};
use crate::{Camera, RenderConfig, RenderError, Scene};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

/// Row-major grid of brightness values, one per pixel.
///
/// Values are not clamped; overlapping lights can exceed the nominal range.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with zeros.
    pub fn new(width: usize, height: usize) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidFrameSize { width, height });
        }
        Ok(Self {
            width,
            height,
            values: vec![0.0; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.values[y * self.width + x]
    }

    /// Set the value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        self.values[y * self.width + x] = value;
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.width)
    }
}

/// Sampling work done for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Paths traced across all pixels
    pub trials: u64,
    /// Pixels that stopped after their first path
    pub single_sample_pixels: usize,
}

impl FrameStats {
    fn record(&mut self, estimate: PixelEstimate) {
        self.trials += u64::from(estimate.trials);
        if estimate.trials == 1 {
            self.single_sample_pixels += 1;
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            trials: self.trials + other.trials,
            single_sample_pixels: self.single_sample_pixels + other.single_sample_pixels,
        }
    }
}

/// Render every pixel of `frame` in row-major order from one random stream.
pub fn render_frame(
    frame: &mut FrameBuffer,
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> FrameStats {
    let (width, height) = (frame.width, frame.height);
    let mut stats = FrameStats::default();

    for y in 0..height {
        for x in 0..width {
            let estimate = render_pixel(camera, scene, x, y, width, height, config, rng);
            frame.set(x, y, estimate.value);
            stats.record(estimate);
        }
    }

    log::debug!(
        "Rendered {}x{} sequentially: {} paths, {} single-sample pixels",
        width,
        height,
        stats.trials,
        stats.single_sample_pixels
    );
    stats
}

/// Render every pixel of `frame` in parallel, one task per row.
///
/// Row `y` draws from `StdRng::seed_from_u64(row_seed(seed, y))`, so a given
/// seed produces the same frame for any number of threads.
pub fn render_frame_parallel(
    frame: &mut FrameBuffer,
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    seed: u64,
) -> FrameStats {
    let (width, height) = (frame.width, frame.height);

    let stats = frame
        .values
        .par_chunks_mut(width)
        .enumerate()
        .map(|(y, row)| {
            let mut rng = StdRng::seed_from_u64(row_seed(seed, y));
            let mut stats = FrameStats::default();
            for (x, value) in row.iter_mut().enumerate() {
                let estimate = render_pixel(camera, scene, x, y, width, height, config, &mut rng);
                *value = estimate.value;
                stats.record(estimate);
            }
            stats
        })
        .reduce(FrameStats::default, FrameStats::merge);

    log::debug!(
        "Rendered {} rows in parallel: {} paths, {} single-sample pixels",
        height,
        stats.trials,
        stats.single_sample_pixels
    );
    stats
}

/// Seed for the random stream of row `y`.
pub fn row_seed(seed: u64, y: usize) -> u64 {
    seed ^ (y as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
