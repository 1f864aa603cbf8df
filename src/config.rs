use anyhow::{Result, bail};
use raylib::prelude::*;

/// Per-field configuration. Invalid values are caller programming errors,
/// so construction rejects them instead of rendering nothing.
pub struct FieldConfig {
    pub particle_count: u32,
    pub speed: f32,
    pub palette: Vec<Color>,
}

impl FieldConfig {
    pub fn new(particle_count: u32, speed: f32, palette: Vec<Color>) -> Result<Self> {
        if particle_count == 0 {
            bail!("particle count must be greater than zero");
        }
        if !speed.is_finite() || speed <= 0.0 {
            bail!("speed must be a positive number, got {speed}");
        }
        if palette.is_empty() {
            bail!("color palette must not be empty");
        }
        Ok(Self { particle_count, speed, palette })
    }

    /// Soft pastel palette used by the backdrop screen.
    pub fn default_palette() -> Vec<Color> {
        vec![
            Color::new(0x4f, 0xc3, 0xf7, 255),
            Color::new(0x81, 0xc7, 0x84, 255),
            Color::new(0xff, 0xb7, 0x4d, 255),
            Color::new(0xe5, 0x73, 0x73, 255),
            Color::new(0xba, 0x68, 0xc8, 255),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_config() {
        let config = FieldConfig::new(50, 100.0, FieldConfig::default_palette()).unwrap();
        assert_eq!(config.particle_count, 50);
        assert_eq!(config.speed, 100.0);
        assert_eq!(config.palette.len(), 5);
    }

    #[test]
    fn rejects_zero_particle_count() {
        assert!(FieldConfig::new(0, 100.0, FieldConfig::default_palette()).is_err());
    }

    #[test]
    fn rejects_non_positive_speed() {
        assert!(FieldConfig::new(50, 0.0, FieldConfig::default_palette()).is_err());
        assert!(FieldConfig::new(50, -1.0, FieldConfig::default_palette()).is_err());
        assert!(FieldConfig::new(50, f32::NAN, FieldConfig::default_palette()).is_err());
    }

    #[test]
    fn rejects_empty_palette() {
        assert!(FieldConfig::new(50, 100.0, Vec::new()).is_err());
    }
}
