//! Hittable trait and HitRecord for ray-object intersection.

use ptty_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub p: Vec3,
    /// Outward surface normal at the intersection (unit length)
    pub normal: Vec3,
    /// Distance along the ray where the intersection occurs
    pub t: f64,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object within the given interval.
    ///
    /// Returns `None` on a miss.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}
