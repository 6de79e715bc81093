use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// The direction is expected to be unit length; intersection distances are
/// measured in multiples of it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}
