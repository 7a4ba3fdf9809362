//! Shared utility functions for vedic calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Locate an angle among `count` equal segments of `span_deg`.
///
/// Returns the 1-based segment index and the elapsed fraction [0, 1).
/// Floating-point input at the upper bound clamps to the last segment.
pub fn segment_position(angle_deg: f64, span_deg: f64, count: u8) -> (u8, f64) {
    let a = normalize_360(angle_deg);
    let idx = ((a / span_deg).floor() as u8).min(count - 1);
    let fraction = ((a - idx as f64 * span_deg) / span_deg).clamp(0.0, 1.0 - f64::EPSILON);
    (idx + 1, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert_eq!(normalize_360(0.0), 0.0);
    }

    #[test]
    fn normalize_360_wraps() {
        assert_eq!(normalize_360(360.0), 0.0);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        let r = normalize_360(-1e-20);
        assert!((0.0..360.0).contains(&r), "r = {r}");
    }

    #[test]
    fn segment_start_and_middle() {
        assert_eq!(segment_position(0.0, 12.0, 30), (1, 0.0));
        let (idx, frac) = segment_position(54.0, 12.0, 30);
        assert_eq!(idx, 5);
        assert!((frac - 0.5).abs() < 1e-12);
    }

    #[test]
    fn segment_upper_bound_clamps() {
        let (idx, frac) = segment_position(360.0 - 1e-13, 360.0 / 27.0, 27);
        assert_eq!(idx, 27);
        assert!(frac < 1.0);
    }
}
