use crate::constants::CYCLE_BASE;

/// The sole time source for all motion.
///
/// Accumulates host frame time into an unbounded elapsed clock and derives a
/// sawtooth `progress` from it. The host feeds whatever the wall clock says
/// each frame, so a long suspension arrives as a single large `dt` and the
/// driver simply lands wherever the clock now is; skipped frames are never
/// replayed.
pub struct TimeDriver {
    elapsed: f64,
    cycle_secs: f64,
}

impl TimeDriver {
    /// Cycle duration is `CYCLE_BASE / speed` seconds (10 s at the default
    /// speed of 100). `speed` is validated by `FieldConfig` beforehand.
    pub fn new(speed: f32) -> Self {
        Self {
            elapsed: 0.0,
            cycle_secs: (CYCLE_BASE / speed.max(f32::EPSILON)) as f64,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        if dt > 0.0 {
            self.elapsed += f64::from(dt);
        }
    }

    /// Sawtooth signal in `[0, 1)`, wrapping once per cycle.
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.cycle_secs).fract() as f32
    }

    /// Unbounded elapsed seconds; never resets within a session.
    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    pub fn cycle_secs(&self) -> f32 {
        self.cycle_secs as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_controls_cycle_duration() {
        assert_eq!(TimeDriver::new(100.0).cycle_secs(), 10.0);
        assert_eq!(TimeDriver::new(200.0).cycle_secs(), 5.0);
    }

    #[test]
    fn progress_advances_linearly_and_wraps() {
        let mut driver = TimeDriver::new(100.0);
        driver.advance(5.0);
        assert!((driver.progress() - 0.5).abs() < 1e-6);

        driver.advance(5.0);
        assert!(driver.progress().abs() < 1e-6, "progress should wrap to 0");

        driver.advance(2.5);
        assert!((driver.progress() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn elapsed_is_monotonic_across_wraps() {
        let mut driver = TimeDriver::new(100.0);
        let mut last = 0.0;
        for _ in 0..1000 {
            driver.advance(0.1);
            assert!(driver.elapsed() > last);
            last = driver.elapsed();
        }
        assert!((driver.elapsed() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn non_positive_dt_is_ignored() {
        let mut driver = TimeDriver::new(100.0);
        driver.advance(-1.0);
        driver.advance(0.0);
        assert_eq!(driver.elapsed(), 0.0);
    }

    #[test]
    fn progress_is_periodic() {
        let mut driver = TimeDriver::new(100.0);
        driver.advance(3.7);
        let before = driver.progress();
        driver.advance(driver.cycle_secs());
        assert!((driver.progress() - before).abs() < 1e-5);
    }
}
