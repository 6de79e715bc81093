//! Camera for primary ray generation.
//!
//! Pixels map to angular offsets rather than points on an image plane: the
//! horizontal angle (yaw) and vertical angle (pitch) of the view direction
//! are shifted by the pixel's offset from the image center times the field
//! of view.

use crate::RenderError;
use ptty_math::{Ray, Vec3, Vec3Ext};

/// Camera for generating rays into the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    direction: Vec3,

    // Field of view in degrees
    horizontal_fov: f64,
    vertical_fov: f64,

    // Cached computed values
    yaw: f64,
    pitch: f64,
    horizontal_span: f64,
    vertical_span: f64,
}

impl Camera {
    /// Create a new camera.
    ///
    /// `direction` does not need to be normalized but must be non-zero.
    pub fn new(
        position: Vec3,
        direction: Vec3,
        horizontal_fov: f64,
        vertical_fov: f64,
    ) -> Result<Self, RenderError> {
        if !position.is_finite() {
            return Err(RenderError::InvalidCameraPosition);
        }
        let direction = direction
            .try_unit()
            .ok_or(RenderError::DegenerateCameraDirection)?;
        for fov in [horizontal_fov, vertical_fov] {
            if !fov.is_finite() {
                return Err(RenderError::InvalidFieldOfView(fov));
            }
        }

        let yaw = direction.z.atan2(direction.x);
        let pitch = direction
            .y
            .atan2((direction.z * direction.z + direction.x * direction.x).sqrt());

        Ok(Self {
            position,
            direction,
            horizontal_fov,
            vertical_fov,
            yaw,
            pitch,
            horizontal_span: horizontal_fov.to_radians(),
            vertical_span: vertical_fov.to_radians(),
        })
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit view direction.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn horizontal_fov(&self) -> f64 {
        self.horizontal_fov
    }

    pub fn vertical_fov(&self) -> f64 {
        self.vertical_fov
    }

    /// Generate the primary ray for pixel (x, y) of a width x height image.
    ///
    /// The image center is at the integer halves `width / 2, height / 2`.
    /// Angles grow with x and y, so row 0 looks down the most.
    pub fn get_ray(&self, x: usize, y: usize, width: usize, height: usize) -> Ray {
        let dx = (x as f64 - (width / 2) as f64) / width as f64;
        let dy = (y as f64 - (height / 2) as f64) / height as f64;

        let horizontal = self.yaw + dx * self.horizontal_span;
        let vertical = self.pitch + dy * self.vertical_span;

        let direction = Vec3::new(
            horizontal.cos() * vertical.cos(),
            vertical.sin(),
            horizontal.sin() * vertical.cos(),
        );

        Ray::new(self.position, direction)
    }
}
