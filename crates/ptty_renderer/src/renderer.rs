//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing over scalar brightness:
//! - Iterative bouncing with a configurable segment budget
//! - Mirror reflection plus a random roughness offset per bounce
//! - Early exit when a sample resolves on its first segment

use crate::{Camera, RenderError, Scene, Surface};
use ptty_math::{Ray, Vec3, Vec3Ext};
use rand::{Rng, RngCore};

/// Render configuration.
///
/// Only constructible with positive counts, so every render path can rely
/// on at least one sample of at least one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Maximum number of traced paths per pixel
    samples: u32,
    /// Maximum number of segments per path
    bounces: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples: 500,
            bounces: 5,
        }
    }
}

impl RenderConfig {
    /// Create a config, rejecting zero sample or bounce counts.
    pub fn new(samples: u32, bounces: u32) -> Result<Self, RenderError> {
        if samples == 0 {
            return Err(RenderError::ZeroSamples);
        }
        if bounces == 0 {
            return Err(RenderError::ZeroBounces);
        }
        Ok(Self { samples, bounces })
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }

    pub fn bounces(&self) -> u32 {
        self.bounces
    }
}

/// How a single traced path ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOutcome {
    /// Reached a light source of the given brightness.
    Light(f64),
    /// Left the scene without hitting anything.
    Miss,
    /// Ran out of bounces while still hitting opaque surfaces.
    Exhausted,
}

/// One traced path and the number of segments it used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub outcome: PathOutcome,
    pub segments: u32,
}

impl PathSample {
    /// Brightness this path adds to its pixel.
    pub fn contribution(&self) -> f64 {
        match self.outcome {
            PathOutcome::Light(brightness) => brightness,
            PathOutcome::Miss | PathOutcome::Exhausted => 0.0,
        }
    }
}

/// Averaged pixel brightness and the number of paths behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelEstimate {
    pub value: f64,
    pub trials: u32,
}

/// Random roughness offset for a bounce off a surface.
///
/// A point drawn uniformly from the cube [-1, 1]^3, normalized, then scaled
/// by `1 / (1 + reflectance)`. A zero draw stays zero.
pub fn roughness_offset(reflectance: f64, rng: &mut dyn RngCore) -> Vec3 {
    let draw = Vec3::new(
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
    );
    draw.unit() / (1.0 + reflectance)
}

/// Direction leaving a surface: the mirror reflection of `incoming` about
/// `normal`, pushed by a roughness offset and renormalized.
///
/// If the offset exactly cancels the reflection the result is `Vec3::ZERO`.
pub fn scatter_direction(
    incoming: Vec3,
    normal: Vec3,
    reflectance: f64,
    rng: &mut dyn RngCore,
) -> Vec3 {
    (incoming.mirror(normal) + roughness_offset(reflectance, rng)).unit()
}

/// Trace one path of up to `config.bounces()` segments.
pub fn trace_path(
    ray: &Ray,
    scene: &Scene,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> PathSample {
    let bounces = config.bounces();
    let mut ray = *ray;

    for segment in 1..=bounces {
        let Some(hit) = scene.closest_hit(&ray) else {
            return PathSample {
                outcome: PathOutcome::Miss,
                segments: segment,
            };
        };

        match hit.surface {
            Surface::Light { brightness } => {
                return PathSample {
                    outcome: PathOutcome::Light(brightness),
                    segments: segment,
                };
            }
            Surface::Opaque { reflectance } => {
                let direction =
                    scatter_direction(ray.direction, hit.record.normal, reflectance, rng);
                ray = Ray::new(hit.record.p, direction);
            }
        }
    }

    PathSample {
        outcome: PathOutcome::Exhausted,
        segments: bounces,
    }
}

/// Estimate the brightness seen along a primary ray.
///
/// Up to `config.samples()` paths are traced and averaged. As soon as any path
/// finishes within a single segment, sampling stops and only the paths taken
/// so far are averaged. Rays that go straight to a light or straight out of
/// the scene therefore cost one path instead of the full budget.
pub fn estimate_pixel(
    ray: &Ray,
    scene: &Scene,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> PixelEstimate {
    let mut total = 0.0;
    let mut trials = 0;

    for _ in 0..config.samples() {
        let sample = trace_path(ray, scene, config, rng);
        total += sample.contribution();
        trials += 1;

        if sample.segments == 1 {
            break;
        }
    }

    PixelEstimate {
        value: total / trials as f64,
        trials,
    }
}

/// Render a single pixel of a width x height frame.
#[allow(clippy::too_many_arguments)]
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> PixelEstimate {
    let ray = camera.get_ray(x, y, width, height);
    estimate_pixel(&ray, scene, config, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LightSource, Sphere};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn light(center: Vec3, radius: f64, brightness: f64) -> LightSource {
        LightSource::new(Sphere::new(center, radius, 0.0).unwrap(), brightness).unwrap()
    }

    /// Camera ray hits a mirror-ish sphere head on and bounces back toward a
    /// light behind the camera, so every path needs at least two segments.
    fn bounce_scene(reflectance: f64) -> (Scene, Ray) {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, reflectance).unwrap());
        scene.add_light(light(Vec3::new(0.0, 0.0, -20.0), 5.0, 100.0));

        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::Z);
        (scene, ray)
    }

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.samples(), 500);
        assert_eq!(config.bounces(), 5);
        assert_eq!(RenderConfig::new(500, 5), Ok(config));
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(RenderConfig::new(0, 5), Err(RenderError::ZeroSamples));
        assert_eq!(RenderConfig::new(10, 0), Err(RenderError::ZeroBounces));
        assert_eq!(RenderConfig::new(0, 0), Err(RenderError::ZeroSamples));
    }

    #[test]
    fn test_direct_light_uses_one_sample() {
        let mut scene = Scene::new();
        scene.add_light(light(Vec3::new(0.0, 0.0, 10.0), 2.0, 255.0));
        let camera = Camera::new(Vec3::ZERO, Vec3::Z, 169.0, 90.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        for samples in [1, 10, 500] {
            let config = RenderConfig::new(samples, 5).unwrap();
            let estimate = render_pixel(&camera, &scene, 79, 21, 158, 42, &config, &mut rng);
            assert_eq!(estimate.value, 255.0);
            assert_eq!(estimate.trials, 1);
        }
    }

    #[test]
    fn test_empty_space_uses_one_sample() {
        let scene = Scene::new();
        let camera = Camera::new(Vec3::ZERO, Vec3::Z, 169.0, 90.0).unwrap();
        let mut rng = StdRng::seed_from_u64(2);

        let estimate = render_pixel(
            &camera,
            &scene,
            3,
            4,
            158,
            42,
            &RenderConfig::default(),
            &mut rng,
        );
        assert_eq!(estimate.value, 0.0);
        assert_eq!(estimate.trials, 1);
    }

    #[test]
    fn test_occluded_light_is_not_seen() {
        // Opaque sphere at distance 3 hides a light at distance 5
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 0.0, 3.5), 0.5, 1000.0).unwrap());
        scene.add_light(light(Vec3::new(0.0, 0.0, 5.5), 0.5, 255.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let mut rng = StdRng::seed_from_u64(3);

        // The near bounce goes back toward the origin and leaves the scene
        let sample = trace_path(&ray, &scene, &RenderConfig::default(), &mut rng);
        assert_eq!(sample.outcome, PathOutcome::Miss);
        assert_eq!(sample.segments, 2);
    }

    #[test]
    fn test_roughness_scales_with_reflectance() {
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);

        for _ in 0..32 {
            let rough = roughness_offset(0.0, &mut rng_a);
            let smooth = roughness_offset(10.0, &mut rng_b);

            assert!((rough.length() - 1.0).abs() < 1e-12);
            let ratio = rough.length() / smooth.length();
            assert!((ratio - 11.0).abs() < 1e-9, "ratio was {ratio}");
            // Same draw, only the magnitude differs
            assert!((rough.unit() - smooth.unit()).length() < 1e-12);
        }
    }

    #[test]
    fn test_scatter_direction_is_unit() {
        let mut rng = StdRng::seed_from_u64(11);
        let incoming = Vec3::new(1.0, -1.0, 0.0).unit();

        for reflectance in [0.0, 1.0, 50.0] {
            let direction = scatter_direction(incoming, Vec3::Y, reflectance, &mut rng);
            assert!((direction.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_high_reflectance_approaches_mirror() {
        let mut rng = StdRng::seed_from_u64(5);
        let incoming = Vec3::new(1.0, -1.0, 0.0).unit();
        let mirror = Vec3::new(1.0, 1.0, 0.0).unit();

        let direction = scatter_direction(incoming, Vec3::Y, 1e9, &mut rng);
        assert!((direction - mirror).length() < 1e-6);
    }

    #[test]
    fn test_bounce_reaches_light_behind_camera() {
        let (scene, ray) = bounce_scene(1e6);
        let mut rng = StdRng::seed_from_u64(9);

        let sample = trace_path(&ray, &scene, &RenderConfig::default(), &mut rng);
        assert_eq!(sample.outcome, PathOutcome::Light(100.0));
        assert_eq!(sample.segments, 2);
    }

    #[test]
    fn test_light_inside_opaque_sphere_is_never_reached() {
        // Inward bounces must stop on the shell instead of passing through it
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 0.0, 10.0), 4.0, 0.0).unwrap());
        scene.add_light(light(Vec3::new(0.0, 0.0, 10.0), 1.0, 255.0));

        let config = RenderConfig::new(1, 6).unwrap();
        let mut rng = StdRng::seed_from_u64(21);
        let mut rebounced = 0;

        for i in 0..40 {
            for j in 0..40 {
                let x = -0.4 + 0.8 * i as f64 / 39.0;
                let y = -0.4 + 0.8 * j as f64 / 39.0;
                let ray = Ray::new(Vec3::ZERO, Vec3::new(x, y, 1.0).unit());

                let sample = trace_path(&ray, &scene, &config, &mut rng);
                assert!(!matches!(sample.outcome, PathOutcome::Light(_)));
                if sample.segments >= 3 {
                    rebounced += 1;
                }
            }
        }

        assert!(rebounced > 0);
    }

    #[test]
    fn test_exhausted_budget_contributes_nothing() {
        let (scene, ray) = bounce_scene(0.0);
        let mut rng = StdRng::seed_from_u64(9);

        let sample = trace_path(&ray, &scene, &RenderConfig::new(1, 1).unwrap(), &mut rng);
        assert_eq!(sample.outcome, PathOutcome::Exhausted);
        assert_eq!(sample.segments, 1);
        assert_eq!(sample.contribution(), 0.0);
    }

    #[test]
    fn test_pixel_is_mean_of_all_samples() {
        let (scene, ray) = bounce_scene(0.0);
        let config = RenderConfig::new(200, 5).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let estimate = estimate_pixel(&ray, &scene, &config, &mut rng);
        assert_eq!(estimate.trials, 200);

        // Replay the same random stream path by path
        let mut replay = StdRng::seed_from_u64(42);
        let contributions: Vec<f64> = (0..config.samples())
            .map(|_| trace_path(&ray, &scene, &config, &mut replay).contribution())
            .collect();
        let mean = contributions.iter().sum::<f64>() / contributions.len() as f64;

        assert!((estimate.value - mean).abs() < 1e-9);
        assert!(contributions.iter().any(|&c| c == 100.0));
        assert!(contributions.iter().any(|&c| c == 0.0));
    }

    #[test]
    fn test_single_bounce_budget_stops_after_one_sample() {
        // Every path is cut off on its first segment
        let (scene, ray) = bounce_scene(0.0);
        let config = RenderConfig::new(50, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(4);

        let estimate = estimate_pixel(&ray, &scene, &config, &mut rng);
        assert_eq!(estimate.trials, 1);
        assert_eq!(estimate.value, 0.0);
    }
}
