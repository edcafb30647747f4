use lights::clock::{Rotation, DEGREES_PER_SECOND};

#[cfg(test)]
mod rotation_tests {
    use super::*;

    #[test]
    fn test_rate_is_one_revolution_per_five_seconds() {
        assert_eq!(DEGREES_PER_SECOND, 72.0);
    }

    #[test]
    fn test_1000ms_advances_exactly_72_degrees() {
        let mut rotation = Rotation::new();
        rotation.advance(1000.0);
        assert!((rotation.degrees() - 72.0).abs() < 1e-5);
    }

    #[test]
    fn test_wraps_from_350_to_62() {
        let mut rotation = Rotation::new();
        // 350 degrees takes 350/72 seconds.
        rotation.advance(350.0 / 72.0 * 1000.0);
        assert!((rotation.degrees() - 350.0).abs() < 1e-3);

        rotation.advance(1000.0);
        assert!((rotation.degrees() - 62.0).abs() < 1e-3);
    }

    #[test]
    fn test_angle_stays_in_range_over_many_frames() {
        let mut rotation = Rotation::new();
        for _ in 0..10_000 {
            rotation.advance(16.7);
            let deg = rotation.degrees();
            assert!((0.0..360.0).contains(&deg), "angle out of range: {}", deg);
        }
    }
}
