//! Sphere primitives: opaque spheres and emissive light spheres.

use crate::{HitRecord, Hittable, RenderError};
use ptty_math::{Interval, Ray, Vec3};

/// An opaque sphere.
///
/// `reflectance` narrows the diffuse scatter cone: the random perturbation
/// added to a mirror bounce is scaled by `1 / (1 + reflectance)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    reflectance: f64,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64, reflectance: f64) -> Result<Self, RenderError> {
        if !center.is_finite() {
            return Err(RenderError::InvalidCenter);
        }
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(RenderError::InvalidRadius(radius));
        }
        if !(reflectance >= 0.0 && reflectance.is_finite()) {
            return Err(RenderError::InvalidReflectance(reflectance));
        }

        Ok(Self {
            center,
            radius,
            reflectance,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn reflectance(&self) -> f64 {
        self.reflectance
    }

    /// Move the sphere. Non-finite positions are rejected.
    pub fn set_center(&mut self, center: Vec3) -> Result<(), RenderError> {
        if !center.is_finite() {
            return Err(RenderError::InvalidCenter);
        }
        self.center = center;
        Ok(())
    }
}

impl Hittable for Sphere {
    /// Near-side intersection only.
    ///
    /// The ray is projected onto the center to find the closest approach; if
    /// that is within the radius, the entry point sits half a chord earlier.
    /// The far root is never considered, so a ray starting inside the sphere
    /// sees a negative `t` and falls outside any forward interval. A root
    /// accepted just behind the origin is snapped to `t = 0`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let to_center = self.center - ray.origin;
        let t_center = to_center.dot(ray.direction);
        let closest_point = ray.at(t_center);
        let off_center = (closest_point - self.center).length();

        if off_center > self.radius {
            return None;
        }

        let half_chord = (self.radius * self.radius - off_center * off_center).sqrt();
        let t = t_center - half_chord;
        if !ray_t.contains(t) {
            return None;
        }
        let t = t.max(0.0);

        let p = ray.at(t);
        Some(HitRecord {
            p,
            normal: (p - self.center) / self.radius,
            t,
        })
    }
}

/// An emissive sphere. Any hit returns the full brightness; there is no
/// falloff with angle or distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSource {
    sphere: Sphere,
    brightness: f64,
}

impl LightSource {
    pub fn new(sphere: Sphere, brightness: f64) -> Result<Self, RenderError> {
        if !(brightness >= 0.0 && brightness.is_finite()) {
            return Err(RenderError::InvalidBrightness(brightness));
        }
        Ok(Self { sphere, brightness })
    }

    pub fn sphere(&self) -> &Sphere {
        &self.sphere
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub fn set_center(&mut self, center: Vec3) -> Result<(), RenderError> {
        self.sphere.set_center(center)
    }
}

impl Hittable for LightSource {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        self.sphere.hit(ray, ray_t)
    }
}
