use rand::Rng;

use crate::config::FieldConfig;
use crate::motion::{ConfettiTransform, Viewport, particle_transform};
use crate::particle::{self, Particle};

/// Owns the confetti particle set for one animated field.
///
/// The set is fixed at construction; a different particle count means
/// building a new field. Each frame the render loop samples the time driver
/// and asks for one batch of transforms.
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Flat variant: rectangles colored from the config palette.
    pub fn new<R: Rng + ?Sized>(config: &FieldConfig, rng: &mut R) -> Self {
        Self {
            particles: particle::generate(config.particle_count, &config.palette, rng),
        }
    }

    /// Mixed variant: all shapes, HSV hue sweep colors, sway.
    pub fn mixed<R: Rng + ?Sized>(count: u32, rng: &mut R) -> Self {
        Self {
            particles: particle::generate_mixed(count, rng),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Computes each particle's draw primitive for the current time signal.
    /// Empty while the viewport is unknown; drawing mutates nothing.
    pub fn transforms(&self, progress: f32, viewport: Viewport) -> Vec<ConfettiTransform> {
        if !viewport.is_renderable() {
            return Vec::new();
        }
        self.particles
            .iter()
            .filter_map(|p| particle_transform(p, progress, viewport))
            .collect()
    }
}
