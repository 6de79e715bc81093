//! ptty viewer - animates the demo scene in the terminal.
//!
//! Logging goes to stderr (`RUST_LOG=debug` for per-frame stats), frames go
//! to stdout.

mod animation;
mod display;
mod options;

use anyhow::{Context, Result};
use clap::Parser;
use ptty_renderer::{render_frame, render_frame_parallel, FrameBuffer, FrameStats};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io::{stdout, BufWriter};
use std::time::Instant;

use animation::{animate, demo_camera, demo_scene, FrameClock};
use display::TextDisplay;
use options::Options;

fn main() -> Result<()> {
    env_logger::init();

    let options = Options::parse();
    let config = options.render_config().context("Invalid render settings")?;

    if let Some(threads) = options.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure render threads")?;
    }

    let camera = demo_camera(options.horizontal_fov, options.vertical_fov)
        .context("Invalid camera settings")?;
    let mut scene = demo_scene().context("Failed to build scene")?;
    let mut frame = FrameBuffer::new(options.width, options.height).context("Invalid frame size")?;

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut display = TextDisplay::new(BufWriter::new(stdout().lock()), !options.scroll);

    log::info!(
        "Rendering {}x{} @ {} samples, {} bounces ({})",
        frame.width(),
        frame.height(),
        config.samples(),
        config.bounces(),
        if options.parallel { "parallel" } else { "sequential" }
    );

    let clock = if options.once {
        FrameClock::single(options.start)
    } else {
        FrameClock::new(options.start, options.step, options.end)
    };

    let mut frames = 0u32;
    for time in clock {
        animate(&mut scene, time).context("Failed to move lights")?;

        let start = Instant::now();
        let stats = if options.parallel {
            render_frame_parallel(&mut frame, &camera, &scene, &config, rng.next_u64())
        } else {
            render_frame(&mut frame, &camera, &scene, &config, &mut rng)
        };
        log_frame(time, &stats, start);

        display.present(&frame).context("Failed to write frame")?;
        frames += 1;

        if !options.once {
            std::thread::sleep(options.frame_delay());
        }
    }

    if frames == 0 {
        log::warn!(
            "No frames rendered: start {} is not before end {} with step {}",
            options.start,
            options.end,
            options.step
        );
    }

    Ok(())
}

fn log_frame(time: f64, stats: &FrameStats, start: Instant) {
    log::debug!(
        "t={:.2}: {} paths, {} single-sample pixels, {:?}",
        time,
        stats.trials,
        stats.single_sample_pixels,
        start.elapsed()
    );
}
