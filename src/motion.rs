use std::f32::consts::TAU;

use raylib::prelude::*;

use crate::constants::WRAP_MARGIN;
use crate::particle::{Particle, Shape};

/// Host surface dimensions in pixels, re-read every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// False until the host has reported a real size; nothing is drawn
    /// before then.
    pub fn is_renderable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// One frame's draw primitive for a confetti piece.
#[derive(Debug, Clone, Copy)]
pub struct ConfettiTransform {
    pub x: f32,
    pub y: f32,
    /// Degrees.
    pub rotation: f32,
    pub size: f32,
    pub color: Color,
    pub shape: Shape,
}

/// Maps a particle and the sawtooth time signal to screen space.
///
/// The vertical position wraps modulo `height + WRAP_MARGIN`, shifted down by
/// half the margin, so a piece fully exits the bottom before reappearing
/// above the top; the particle itself is never reset. Returns `None` while
/// the viewport is unknown.
pub fn particle_transform(
    particle: &Particle,
    progress: f32,
    viewport: Viewport,
) -> Option<ConfettiTransform> {
    if !viewport.is_renderable() {
        return None;
    }

    let sway = if particle.sway_amplitude > 0.0 {
        (TAU * particle.sway_frequency * progress).sin() * particle.sway_amplitude
    } else {
        0.0
    };
    let x = particle.norm_x * viewport.width + sway;

    let band = viewport.height + WRAP_MARGIN;
    let raw_y = particle.norm_y * viewport.height + progress * viewport.height * particle.fall_rate;
    let y = raw_y.rem_euclid(band) - WRAP_MARGIN / 2.0;

    let rotation = particle.rotation_base + progress * 360.0 * particle.rotation_rate;

    Some(ConfettiTransform {
        x,
        y,
        rotation,
        size: particle.size,
        color: particle.color,
        shape: particle.shape,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_particle() -> Particle {
        Particle {
            id: 0,
            norm_x: 0.25,
            norm_y: -0.5,
            color: Color::RED,
            size: 8.0,
            rotation_base: 45.0,
            rotation_rate: 1.5,
            fall_rate: 2.0,
            shape: Shape::Rectangle,
            sway_amplitude: 0.0,
            sway_frequency: 0.0,
        }
    }

    #[test]
    fn zero_viewport_is_not_renderable() {
        let p = test_particle();
        assert!(particle_transform(&p, 0.5, Viewport::new(0.0, 0.0)).is_none());
        assert!(particle_transform(&p, 0.5, Viewport::new(400.0, 0.0)).is_none());

        let t = particle_transform(&p, 0.5, Viewport::new(400.0, 800.0)).unwrap();
        assert!(t.x.is_finite() && t.y.is_finite() && t.rotation.is_finite());
    }

    #[test]
    fn x_follows_normalized_position() {
        let p = test_particle();
        let t = particle_transform(&p, 0.0, Viewport::new(400.0, 800.0)).unwrap();
        assert_eq!(t.x, 100.0);
    }

    #[test]
    fn wrapped_y_stays_in_padded_band() {
        let viewport = Viewport::new(400.0, 800.0);
        let p = test_particle();
        // Sweep well past several wraps, including t > 1 to exercise the
        // modulo for arbitrary inputs.
        let mut t = 0.0f32;
        while t < 5.0 {
            let out = particle_transform(&p, t, viewport).unwrap();
            assert!(
                out.y >= -WRAP_MARGIN / 2.0 && out.y < viewport.height + WRAP_MARGIN / 2.0,
                "y={} out of band at t={}",
                out.y,
                t
            );
            t += 0.013;
        }
    }

    #[test]
    fn wrapped_y_is_defined_for_negative_seed() {
        let mut p = test_particle();
        p.norm_y = -1.0;
        let out = particle_transform(&p, 0.0, Viewport::new(400.0, 800.0)).unwrap();
        assert!(out.y >= -WRAP_MARGIN / 2.0);
    }

    #[test]
    fn rotation_is_linear_in_progress() {
        let p = test_particle();
        let viewport = Viewport::new(400.0, 800.0);
        let t = particle_transform(&p, 0.5, viewport).unwrap();
        assert!((t.rotation - (45.0 + 0.5 * 360.0 * 1.5)).abs() < 1e-4);
    }

    #[test]
    fn transform_repeats_once_per_cycle() {
        let p = test_particle();
        let viewport = Viewport::new(400.0, 800.0);
        let mut driver = crate::timing::TimeDriver::new(100.0);

        driver.advance(3.7);
        let a = particle_transform(&p, driver.progress(), viewport).unwrap();
        driver.advance(driver.cycle_secs());
        let b = particle_transform(&p, driver.progress(), viewport).unwrap();

        assert!((a.x - b.x).abs() < 1e-2);
        assert!((a.y - b.y).abs() < 1e-2);
        assert!((a.rotation - b.rotation).abs() < 1e-2);
    }

    #[test]
    fn sway_only_moves_x() {
        let mut p = test_particle();
        p.sway_amplitude = 30.0;
        p.sway_frequency = 2.0;
        let viewport = Viewport::new(400.0, 800.0);

        let still = particle_transform(&test_particle(), 0.1, viewport).unwrap();
        let swaying = particle_transform(&p, 0.1, viewport).unwrap();
        assert_ne!(still.x, swaying.x);
        assert_eq!(still.y, swaying.y);
    }
}
