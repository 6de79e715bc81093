//! Vector algebra for the ptty path tracer.
//!
//! Everything is double precision. `Vec3` is a plain `Copy` value, so the
//! usual operators (`+`, `-`, `* k`, `/ k`, `dot`, `length`) never alias
//! their inputs.

// Re-export glam for convenience
pub use glam::*;

/// Position, direction and normal type used throughout the tracer.
pub type Vec3 = glam::DVec3;

mod interval;
mod ray;
mod vector;

pub use interval::{Interval, SURFACE_TOLERANCE};
pub use ray::Ray;
pub use vector::Vec3Ext;
