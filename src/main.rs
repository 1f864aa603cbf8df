use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;

mod config;
mod constants;
mod field;
mod motion;
mod overlay;
mod particle;
mod recorder;
mod render;
mod texture_loader;
mod timing;
mod track;

use crate::config::FieldConfig;
use crate::constants::*;
use crate::field::ParticleField;
use crate::motion::Viewport;
use crate::recorder::Recorder;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_orientation};
use crate::timing::TimeDriver;
use crate::track::{ImageTrack, ScrollDirection, TilePlacement};

#[derive(Parser)]
#[command(name = "confetti-scroll", about = "Animated confetti backdrop with scrolling image tracks")]
struct Cli {
    /// Directory of images for the scrolling tracks; placeholder cards are
    /// drawn when omitted.
    image_dir: Option<PathBuf>,

    /// Number of confetti pieces.
    #[arg(long, default_value_t = DEFAULT_PARTICLE_COUNT)]
    count: u32,

    /// Confetti scroll speed.
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    speed: f32,

    /// Use the mixed-shape confetti variant (circles, triangles, stars, sway).
    #[arg(long)]
    mixed_shapes: bool,

    /// Render offline into this video file instead of animating live.
    #[arg(long)]
    record: Option<PathBuf>,

    /// Recording length in seconds.
    #[arg(long, default_value_t = 30.0)]
    duration: f32,
}

/// Direction and speed per track, rightmost first.
const TRACK_SPECS: [(ScrollDirection, f32); TRACK_COUNT] = [
    (ScrollDirection::Up, 60.0),
    (ScrollDirection::Down, 40.0),
    (ScrollDirection::Up, 60.0),
];

const BACKGROUND: Color = Color { r: 0x1a, g: 0x1a, b: 0x2e, a: 255 };

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = FieldConfig::new(cli.count, cli.speed, FieldConfig::default_palette())?;
    let mut rng = rand::rng();
    let field = if cli.mixed_shapes {
        ParticleField::mixed(config.particle_count, &mut rng)
    } else {
        ParticleField::new(&config, &mut rng)
    };
    let mut driver = TimeDriver::new(config.speed);

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Confetti Scroll")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // Split the image directory round-robin across the tracks; a track with
    // no images falls back to placeholder slots.
    let per_track_paths: Vec<Vec<PathBuf>> = match &cli.image_dir {
        Some(dir) => split_round_robin(load_sorted_image_paths(dir)?, TRACK_COUNT),
        None => vec![Vec::new(); TRACK_COUNT],
    };

    let mut tracks = Vec::with_capacity(TRACK_COUNT);
    let mut track_textures: Vec<Vec<Option<Texture2D>>> = Vec::with_capacity(TRACK_COUNT);
    for ((direction, speed), paths) in TRACK_SPECS.iter().zip(&per_track_paths) {
        let slots = paths.len().max(PLACEHOLDER_SLOTS);
        tracks.push(ImageTrack::new(*direction, *speed, TILE_HEIGHT, TILE_SPACING, slots)?);

        let mut textures: Vec<Option<Texture2D>> = (0..slots).map(|_| None).collect();
        for (i, path) in paths.iter().enumerate() {
            match load_texture_with_orientation(&mut rl, &thread, path) {
                Ok(texture) => textures[i] = Some(texture),
                Err(e) => eprintln!("warning: {e:#}"), // card keeps its placeholder
            }
        }
        track_textures.push(textures);
    }

    match cli.record {
        Some(path) => record(
            &mut rl, &thread, &field, &mut driver, &mut tracks, &track_textures, &path,
            cli.duration,
        ),
        None => {
            run_live(&mut rl, &thread, &field, &mut driver, &mut tracks, &track_textures);
            Ok(())
        }
    }
}

fn split_round_robin(paths: Vec<PathBuf>, buckets: usize) -> Vec<Vec<PathBuf>> {
    let mut out = vec![Vec::new(); buckets];
    for (i, path) in paths.into_iter().enumerate() {
        out[i % buckets].push(path);
    }
    out
}

/// X position of a track column, counted from the right edge.
fn track_x(viewport: Viewport, index: usize) -> f32 {
    viewport.width - TRACK_RIGHT_PADDING - (index as f32 + 1.0) * TRACK_WIDTH
        - index as f32 * TRACK_GAP
}

fn run_live(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    field: &ParticleField,
    driver: &mut TimeDriver,
    tracks: &mut [ImageTrack],
    track_textures: &[Vec<Option<Texture2D>>],
) {
    while !rl.window_should_close() {
        // A long suspension shows up as one large frame time; the driver
        // lands where the wall clock is now, with no catch-up.
        let dt = rl.get_frame_time();
        driver.advance(dt);

        let viewport = Viewport::new(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
        );
        let confetti = field.transforms(driver.progress(), viewport);
        let placements: Vec<Vec<TilePlacement>> = tracks
            .iter_mut()
            .map(|track| track.placements(driver.elapsed(), viewport.height))
            .collect();

        let mut d = rl.begin_drawing(thread);
        d.clear_background(BACKGROUND);
        render::draw_confetti(&mut d, &confetti);
        for (i, track_placements) in placements.iter().enumerate() {
            render::draw_track(
                &mut d,
                track_placements,
                &track_textures[i],
                track_x(viewport, i),
                TRACK_WIDTH,
                TILE_HEIGHT,
            );
        }
        overlay::draw_overlay(&mut d, viewport);
    }
}

/// Offline render at a fixed frame time into a 1920x1080 render texture,
/// piping every frame to ffmpeg while previewing in the window.
fn record(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    field: &ParticleField,
    driver: &mut TimeDriver,
    tracks: &mut [ImageTrack],
    track_textures: &[Vec<Option<Texture2D>>],
    output: &std::path::Path,
    duration: f32,
) -> Result<()> {
    let mut framebuffer = rl
        .load_render_texture(thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow::anyhow!("failed to create render texture: {e}"))?;
    let mut recorder = Recorder::spawn(RENDER_WIDTH, RENDER_HEIGHT, FPS, output)?;

    let viewport = Viewport::new(RENDER_WIDTH as f32, RENDER_HEIGHT as f32);
    let total_frames = (duration * FPS as f32) as u32;

    for _ in 0..total_frames {
        if rl.window_should_close() {
            break;
        }
        driver.advance(FRAME_TIME);

        let confetti = field.transforms(driver.progress(), viewport);
        let placements: Vec<Vec<TilePlacement>> = tracks
            .iter_mut()
            .map(|track| track.placements(driver.elapsed(), viewport.height))
            .collect();

        rl.draw_texture_mode(thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(BACKGROUND);
            render::draw_confetti(&mut d, &confetti);
            for (i, track_placements) in placements.iter().enumerate() {
                render::draw_track(
                    &mut d,
                    track_placements,
                    &track_textures[i],
                    track_x(viewport, i),
                    TRACK_WIDTH,
                    TILE_HEIGHT,
                );
            }
            overlay::draw_overlay(&mut d, viewport);
        });

        // Preview: blit the framebuffer (flipped) to the window.
        let mut d = rl.begin_drawing(thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
        drop(d);

        let image = framebuffer
            .load_image()
            .map_err(|e| anyhow::anyhow!("failed to read framebuffer pixels: {e}"))?;
        recorder.write(&image)?;
    }

    drop(recorder); // close the pipe and wait for ffmpeg
    Ok(())
}
