//! The demo scene and the clock that moves its lights.
//!
//! One diffuse sphere sits in front of the camera. Two small bright lights
//! orbit it at different rates while a huge dim light below acts as the
//! floor.

use ptty_renderer::{Camera, LightSource, RenderError, Scene, Sphere, Vec3};

/// Index of the light orbiting in the XY plane.
pub const ORBIT_LIGHT: usize = 0;
/// Index of the floor light.
pub const FLOOR_LIGHT: usize = 1;
/// Index of the light orbiting in the YZ plane.
pub const SWING_LIGHT: usize = 2;

const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 1.0, -3.0);
const CAMERA_DIRECTION: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Camera looking down +Z from just behind the origin.
pub fn demo_camera(horizontal_fov: f64, vertical_fov: f64) -> Result<Camera, RenderError> {
    Camera::new(CAMERA_POSITION, CAMERA_DIRECTION, horizontal_fov, vertical_fov)
}

/// Build the demo scene with lights at their time-zero positions.
pub fn demo_scene() -> Result<Scene, RenderError> {
    let mut scene = Scene::new();

    scene.add_sphere(Sphere::new(Vec3::new(0.0, 0.0, 10.0), 4.0, 0.0)?);

    let (orbit, swing) = light_positions(0.0);
    scene.add_light(LightSource::new(Sphere::new(orbit, 5.0, 0.0)?, 255.0)?);
    scene.add_light(LightSource::new(
        Sphere::new(Vec3::new(0.0, -1200.0, 0.0), 1000.0, 0.0)?,
        100.0,
    )?);
    scene.add_light(LightSource::new(Sphere::new(swing, 5.0, 0.0)?, 255.0)?);

    log::info!(
        "Demo scene: {} spheres, {} lights",
        scene.spheres().len(),
        scene.lights().len()
    );
    Ok(scene)
}

/// Centers of the two moving lights at simulated time `time`.
pub fn light_positions(time: f64) -> (Vec3, Vec3) {
    let orbit = Vec3::new(20.0 * time.sin(), 5.0 + 10.0 * time.cos(), 5.0);
    let swing = Vec3::new(
        0.0,
        20.0 * (time * 0.77).cos(),
        10.0 + 20.0 * (time * 0.77).sin(),
    );
    (orbit, swing)
}

/// Move the demo scene's lights to where they are at `time`.
pub fn animate(scene: &mut Scene, time: f64) -> Result<(), RenderError> {
    let (orbit, swing) = light_positions(time);
    let lights = scene.lights_mut();
    lights[ORBIT_LIGHT].set_center(orbit)?;
    lights[SWING_LIGHT].set_center(swing)?;
    Ok(())
}

/// Simulated time for successive frames: `start`, `start + step`, ... while
/// below `end`.
#[derive(Debug, Clone)]
pub struct FrameClock {
    time: f64,
    step: f64,
    end: f64,
}

impl FrameClock {
    pub fn new(start: f64, step: f64, end: f64) -> Self {
        Self {
            time: start,
            step,
            end,
        }
    }

    /// A clock that yields `time` once.
    pub fn single(time: f64) -> Self {
        Self::new(time, f64::INFINITY, f64::INFINITY)
    }
}

impl Iterator for FrameClock {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        // A non-positive step would never reach the end
        if !(self.time < self.end && self.step > 0.0) {
            return None;
        }
        let time = self.time;
        self.time += self.step;
        Some(time)
    }
}
