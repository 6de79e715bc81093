//! The world the tracer sees: opaque spheres followed by light spheres.
//!
//! The scene is owned by whoever drives the animation. During a frame the
//! renderer only borrows it immutably; lights are moved between frames.

use crate::{HitRecord, Hittable, LightSource, Sphere};
use ptty_math::{Interval, Ray};

/// What kind of surface a ray ended up on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    /// An opaque sphere with its scatter reflectance.
    Opaque { reflectance: f64 },
    /// A light source with its emitted brightness.
    Light { brightness: f64 },
}

/// Closest intersection across the whole scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneHit {
    pub record: HitRecord,
    pub surface: Surface,
}

/// Ordered collections of opaque spheres and light sources.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<LightSource>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    pub fn add_light(&mut self, light: LightSource) {
        self.lights.push(light);
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[LightSource] {
        &self.lights
    }

    /// Mutable access to the lights, for moving them between frames.
    pub fn lights_mut(&mut self) -> &mut [LightSource] {
        &mut self.lights
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.spheres.len() + self.lights.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty() && self.lights.is_empty()
    }

    /// Find the closest hit in front of the ray origin.
    ///
    /// A ray leaving a surface and pointing back into it hits that surface
    /// at `t = 0`, even when its origin is off the surface by rounding.
    /// Opaque spheres are tested before lights, each in insertion order. A
    /// candidate only replaces the current best when it is strictly closer,
    /// so on an exact tie the object tested first wins.
    pub fn closest_hit(&self, ray: &Ray) -> Option<SceneHit> {
        let opaque = self.spheres.iter().map(|sphere| {
            (
                sphere as &dyn Hittable,
                Surface::Opaque {
                    reflectance: sphere.reflectance(),
                },
            )
        });
        let lights = self.lights.iter().map(|light| {
            (
                light as &dyn Hittable,
                Surface::Light {
                    brightness: light.brightness(),
                },
            )
        });

        let mut closest: Option<SceneHit> = None;
        for (object, surface) in opaque.chain(lights) {
            let Some(record) = object.hit(ray, Interval::FORWARD) else {
                continue;
            };
            if closest.map_or(true, |best| record.t < best.record.t) {
                closest = Some(SceneHit { record, surface });
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptty_math::Vec3;

    fn sphere_at(z: f64, reflectance: f64) -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, z), 0.5, reflectance).unwrap()
    }

    fn light_at(z: f64, brightness: f64) -> LightSource {
        LightSource::new(sphere_at(z, 0.0), brightness).unwrap()
    }

    fn forward_ray() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::Z)
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert!(scene.closest_hit(&forward_ray()).is_none());
    }

    #[test]
    fn test_closest_hit_ignores_listing_order() {
        // Surfaces at distance 3 and 5 along +Z
        let near = sphere_at(3.5, 1.0);
        let far = sphere_at(5.5, 2.0);

        for spheres in [[near, far], [far, near]] {
            let mut scene = Scene::new();
            for sphere in spheres {
                scene.add_sphere(sphere);
            }

            let hit = scene.closest_hit(&forward_ray()).unwrap();
            assert_eq!(hit.record.t, 3.0);
            assert_eq!(hit.surface, Surface::Opaque { reflectance: 1.0 });
        }
    }

    #[test]
    fn test_light_closer_than_opaque_wins() {
        let mut scene = Scene::new();
        scene.add_sphere(sphere_at(5.5, 0.0));
        scene.add_light(light_at(3.5, 42.0));

        let hit = scene.closest_hit(&forward_ray()).unwrap();
        assert_eq!(hit.record.t, 3.0);
        assert_eq!(hit.surface, Surface::Light { brightness: 42.0 });
    }

    #[test]
    fn test_opaque_occludes_light() {
        let mut scene = Scene::new();
        scene.add_sphere(sphere_at(3.5, 0.0));
        scene.add_light(light_at(5.5, 42.0));

        let hit = scene.closest_hit(&forward_ray()).unwrap();
        assert_eq!(hit.surface, Surface::Opaque { reflectance: 0.0 });
    }

    #[test]
    fn test_exact_tie_prefers_first_tested() {
        let mut scene = Scene::new();
        scene.add_light(light_at(3.5, 10.0));
        scene.add_light(light_at(3.5, 20.0));
        scene.add_sphere(sphere_at(3.5, 0.0));

        // Opaque spheres are tested before lights
        let hit = scene.closest_hit(&forward_ray()).unwrap();
        assert_eq!(hit.surface, Surface::Opaque { reflectance: 0.0 });

        let mut lights_only = Scene::new();
        lights_only.add_light(light_at(3.5, 10.0));
        lights_only.add_light(light_at(3.5, 20.0));
        let hit = lights_only.closest_hit(&forward_ray()).unwrap();
        assert_eq!(hit.surface, Surface::Light { brightness: 10.0 });
    }

    #[test]
    fn test_objects_behind_origin_are_ignored() {
        let mut scene = Scene::new();
        scene.add_light(light_at(-5.0, 255.0));
        assert_eq!(scene.len(), 1);
        assert!(scene.closest_hit(&forward_ray()).is_none());
    }

    #[test]
    fn test_inward_bounce_hits_own_surface() {
        use crate::scatter_direction;
        use ptty_math::Vec3Ext;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 0.0, 10.0), 4.0, 0.0).unwrap());
        let mut rng = StdRng::seed_from_u64(11);
        let mut inward = 0;

        for i in 0..60 {
            for j in 0..60 {
                let x = -0.45 + 0.9 * i as f64 / 59.0;
                let y = -0.45 + 0.9 * j as f64 / 59.0;
                let ray = Ray::new(Vec3::ZERO, Vec3::new(x, y, 1.0).unit());
                let Some(hit) = scene.closest_hit(&ray) else {
                    continue;
                };

                for _ in 0..4 {
                    let direction =
                        scatter_direction(ray.direction, hit.record.normal, 0.0, &mut rng);
                    if direction.dot(hit.record.normal) > -1e-3 {
                        continue;
                    }
                    inward += 1;

                    let bounce = Ray::new(hit.record.p, direction);
                    let again = scene.closest_hit(&bounce).unwrap();
                    assert!(again.record.t >= 0.0 && again.record.t < 1e-9);
                    assert_eq!(again.surface, Surface::Opaque { reflectance: 0.0 });
                }
            }
        }

        assert!(inward > 100);
    }

    #[test]
    fn test_lights_mut_moves_light() {
        let mut scene = Scene::new();
        scene.add_light(light_at(-5.0, 255.0));

        scene.lights_mut()[0]
            .set_center(Vec3::new(0.0, 0.0, 5.0))
            .unwrap();

        let hit = scene.closest_hit(&forward_ray()).unwrap();
        assert_eq!(hit.record.t, 4.5);
        assert_eq!(scene.lights()[0].sphere().center(), Vec3::new(0.0, 0.0, 5.0));
    }
}
