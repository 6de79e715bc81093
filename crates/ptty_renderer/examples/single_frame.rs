//! Single frame example.
//!
//! Renders one frame of a small scene and saves it as a grayscale PGM.

use ptty_renderer::{
    render_frame_parallel, Camera, FrameBuffer, LightSource, RenderConfig, RenderError, Scene,
    Sphere, Vec3,
};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("ptty path tracer - single frame");
    println!("===============================");

    let scene = build_scene()?;
    let camera = Camera::new(Vec3::new(0.0, 1.0, -3.0), Vec3::Z, 120.0, 80.0)?;
    let config = RenderConfig::new(200, 5)?;

    let mut frame = FrameBuffer::new(320, 200)?;

    let start = std::time::Instant::now();
    let stats = render_frame_parallel(&mut frame, &camera, &scene, &config, 42);
    println!(
        "Rendered {}x{} in {:?} ({} paths)",
        frame.width(),
        frame.height(),
        start.elapsed(),
        stats.trials
    );

    let filename = "frame.pgm";
    save_pgm(&frame, filename)?;
    println!("Saved to {}", filename);
    Ok(())
}

fn build_scene() -> Result<Scene, RenderError> {
    let mut scene = Scene::new();

    // A rough sphere and a polished one
    scene.add_sphere(Sphere::new(Vec3::new(-3.0, 0.0, 8.0), 2.5, 0.0)?);
    scene.add_sphere(Sphere::new(Vec3::new(3.0, 0.0, 8.0), 2.5, 20.0)?);

    // Key light above, dim floor below
    scene.add_light(LightSource::new(
        Sphere::new(Vec3::new(0.0, 12.0, 6.0), 4.0, 0.0)?,
        255.0,
    )?);
    scene.add_light(LightSource::new(
        Sphere::new(Vec3::new(0.0, -1200.0, 0.0), 1000.0, 0.0)?,
        100.0,
    )?);

    Ok(scene)
}

fn save_pgm(frame: &FrameBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P2")?;
    writeln!(writer, "{} {}", frame.width(), frame.height())?;
    writeln!(writer, "255")?;

    // Row 0 looks down and column 0 looks right, so flip both axes
    let rows: Vec<&[f64]> = frame.rows().collect();
    for row in rows.iter().rev() {
        let line: Vec<String> = row
            .iter()
            .rev()
            .map(|value| (value.clamp(0.0, 255.0) as u8).to_string())
            .collect();
        writeln!(writer, "{}", line.join(" "))?;
    }

    Ok(())
}
