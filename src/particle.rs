use rand::Rng;
use raylib::prelude::*;

/// Shapes a confetti piece can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangle,
    Circle,
    Triangle,
    Star,
}

/// A single confetti piece. All fields are fixed at generation time; only
/// the rendered transform changes as the time signal advances.
#[derive(Debug, Clone)]
pub struct Particle {
    pub id: u32,
    /// Horizontal position as a fraction of the viewport width.
    pub norm_x: f32,
    /// Initial vertical seed; negative values start above the visible area.
    pub norm_y: f32,
    pub color: Color,
    /// Side length in pixels.
    pub size: f32,
    /// Initial rotation (degrees).
    pub rotation_base: f32,
    /// Full turns per cycle, signed.
    pub rotation_rate: f32,
    /// Relative fall speed multiplier.
    pub fall_rate: f32,
    pub shape: Shape,
    /// Horizontal sway in pixels; zero disables sway.
    pub sway_amplitude: f32,
    /// Sway oscillations per cycle.
    pub sway_frequency: f32,
}

/// Generates the flat variant: rectangles colored from `palette`, no sway.
///
/// Deterministic whenever `rng` is seeded. `palette` must be non-empty
/// (enforced by `FieldConfig` before the field is built).
pub fn generate<R: Rng + ?Sized>(count: u32, palette: &[Color], rng: &mut R) -> Vec<Particle> {
    debug_assert!(!palette.is_empty());
    (0..count)
        .map(|id| Particle {
            id,
            norm_x: rng.random_range(0.0..1.0),
            norm_y: rng.random_range(-1.0..1.0),
            color: palette[rng.random_range(0..palette.len())],
            size: rng.random_range(4.0..12.0),
            rotation_base: rng.random_range(0.0..360.0),
            rotation_rate: rng.random_range(-2.0..2.0),
            fall_rate: rng.random_range(1.0..3.0),
            shape: Shape::Rectangle,
            sway_amplitude: 0.0,
            sway_frequency: 0.0,
        })
        .collect()
}

/// Generates the mixed variant: all four shapes, colors on an HSV hue sweep
/// at fixed saturation/value, and sinusoidal horizontal sway.
pub fn generate_mixed<R: Rng + ?Sized>(count: u32, rng: &mut R) -> Vec<Particle> {
    (0..count)
        .map(|id| Particle {
            id,
            norm_x: rng.random_range(0.0..1.0),
            norm_y: rng.random_range(-1.0..1.0),
            color: Color::color_from_hsv(rng.random_range(0.0..360.0), 0.8, 0.9),
            size: rng.random_range(6.0..16.0),
            rotation_base: rng.random_range(0.0..360.0),
            rotation_rate: rng.random_range(-3.0..3.0),
            fall_rate: rng.random_range(0.8..2.3),
            shape: match rng.random_range(0..4) {
                0 => Shape::Rectangle,
                1 => Shape::Circle,
                2 => Shape::Triangle,
                _ => Shape::Star,
            },
            sway_amplitude: rng.random_range(10.0..40.0),
            sway_frequency: rng.random_range(1.0..3.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generates_distinct_ids_and_palette_colors() {
        let palette = vec![Color::RED, Color::GREEN, Color::BLUE];
        let mut rng = StdRng::seed_from_u64(7);
        let particles = generate(3, &palette, &mut rng);

        assert_eq!(particles.len(), 3);
        let ids: Vec<u32> = particles.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        for p in &particles {
            assert!(palette.contains(&p.color));
        }
    }

    #[test]
    fn generated_fields_stay_in_range() {
        let palette = vec![Color::WHITE];
        let mut rng = StdRng::seed_from_u64(42);
        for p in generate(200, &palette, &mut rng) {
            assert!(p.size > 0.0);
            assert!((0.0..1.0).contains(&p.norm_x));
            assert!((-1.0..1.0).contains(&p.norm_y));
            assert!(p.fall_rate > 0.0);
            assert!((-2.0..2.0).contains(&p.rotation_rate));
            assert_eq!(p.shape, Shape::Rectangle);
            assert_eq!(p.sway_amplitude, 0.0);
        }
    }

    #[test]
    fn mixed_variant_has_sway_and_larger_sizes() {
        let mut rng = StdRng::seed_from_u64(42);
        for p in generate_mixed(200, &mut rng) {
            assert!((6.0..16.0).contains(&p.size));
            assert!((10.0..40.0).contains(&p.sway_amplitude));
            assert!((1.0..3.0).contains(&p.sway_frequency));
            assert!((0.8..2.3).contains(&p.fall_rate));
        }
    }

    #[test]
    fn mixed_variant_draws_every_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let particles = generate_mixed(200, &mut rng);
        for shape in [Shape::Rectangle, Shape::Circle, Shape::Triangle, Shape::Star] {
            assert!(particles.iter().any(|p| p.shape == shape), "missing {shape:?}");
        }
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let palette = vec![Color::RED, Color::BLUE];
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        let left = generate(20, &palette, &mut a);
        let right = generate(20, &palette, &mut b);
        for (l, r) in left.iter().zip(&right) {
            assert_eq!(l.norm_x, r.norm_x);
            assert_eq!(l.size, r.size);
            assert_eq!(l.color, r.color);
        }
    }
}
