use std::time::Instant;

/// Minimal frame clock - tracks the delta between ticks in milliseconds.
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Get delta time since last tick and advance clock.
    /// Returns delta in milliseconds.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f64() * 1000.0;
        self.last_tick = now;
        delta
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Rotation accumulator for the orbiting light: 0.2 revolutions per second
/// (one full turn every 5 seconds), wrapped modulo 360 degrees.
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    degrees: f64,
}

/// 0.2 rev/s expressed in degrees.
pub const DEGREES_PER_SECOND: f64 = 0.2 * 360.0;

impl Rotation {
    pub fn new() -> Self {
        Self { degrees: 0.0 }
    }

    /// Advances the angle by the elapsed time and wraps it into [0, 360).
    pub fn advance(&mut self, delta_ms: f64) {
        self.degrees = (self.degrees + DEGREES_PER_SECOND * delta_ms / 1000.0) % 360.0;
    }

    pub fn degrees(&self) -> f32 {
        self.degrees as f32
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta_in_millis() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        // Should be roughly 10ms
        assert!(delta >= 9.0 && delta <= 20.0);
    }

    #[test]
    fn one_second_advances_72_degrees() {
        let mut rotation = Rotation::new();
        rotation.advance(1000.0);
        assert!((rotation.degrees() - 72.0).abs() < 1e-5);
    }

    #[test]
    fn angle_wraps_modulo_360() {
        let mut rotation = Rotation::new();
        // Walk up to 350 degrees, then one more second wraps to 62.
        for _ in 0..35 {
            rotation.advance(10.0 / 0.072); // 10 degrees per step
        }
        assert!((rotation.degrees() - 350.0).abs() < 1e-3);

        rotation.advance(1000.0);
        assert!((rotation.degrees() - 62.0).abs() < 1e-3);
    }

    #[test]
    fn zero_delta_leaves_angle_unchanged() {
        let mut rotation = Rotation::new();
        rotation.advance(500.0);
        let before = rotation.degrees();
        rotation.advance(0.0);
        assert_eq!(rotation.degrees(), before);
    }
}
