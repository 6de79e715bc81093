//! ptty renderer - stochastic CPU path tracing to a brightness grid
//!
//! A Monte Carlo path tracer over a scene of opaque spheres and spherical
//! lights. Each pixel is a scalar brightness; turning it into something
//! visible is left to the caller.

mod camera;
mod error;
mod frame;
mod hittable;
mod renderer;
mod scene;
mod sphere;

pub use camera::Camera;
pub use error::RenderError;
pub use frame::{render_frame, render_frame_parallel, row_seed, FrameBuffer, FrameStats};
pub use hittable::{HitRecord, Hittable};
pub use renderer::{
    estimate_pixel, render_pixel, roughness_offset, scatter_direction, trace_path, PathOutcome,
    PathSample, PixelEstimate, RenderConfig,
};
pub use scene::{Scene, SceneHit, Surface};
pub use sphere::{LightSource, Sphere};

/// Re-export Vec3 and common math types from ptty_math
pub use ptty_math::{Interval, Ray, Vec3, Vec3Ext};
