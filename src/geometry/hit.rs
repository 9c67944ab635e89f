//! Point-in-wedge tests for touch input
//!
//! Leaf angles are stored un-normalized; each end is normalized on its own
//! here, so a leaf crossing north (0 rad) is detected by `end <= start`.

use std::cmp::Ordering;

use glam::DVec2;

use crate::math::{angle_of_point, approx_eq, compare, normalize_angle};

/// Check if a clockwise-from-north `angle` lies within `[start, end]`
pub fn is_angle_inside(angle: f64, start: f64, end: f64) -> bool {
    let norm_end = normalize_angle(end);
    let norm_start = normalize_angle(start);

    if norm_end <= norm_start && !approx_eq(start, end) {
        // Wraparound through north (full turns land here too)
        compare(angle, norm_end) != Ordering::Greater
            || compare(angle, norm_start) != Ordering::Less
    } else {
        compare(angle, norm_start) == Ordering::Greater
            && compare(angle, norm_end) == Ordering::Less
    }
}

/// Check if `point` lies inside the wedge centered at `center`
pub fn wedge_contains_point(
    point: DVec2,
    center: DVec2,
    start_angle: f64,
    end_angle: f64,
    radius: f64,
) -> bool {
    if point.distance(center) >= radius {
        return false;
    }
    let angle = angle_of_point(center, point);
    is_angle_inside(angle, start_angle, end_angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::polar_point;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

    const CENTER: DVec2 = DVec2::new(200.0, 200.0);

    #[test]
    fn test_half_circle() {
        let inside = polar_point(CENTER, 50.0, FRAC_PI_2);
        assert!(wedge_contains_point(inside, CENTER, 0.0, PI, 100.0));

        let opposite = polar_point(CENTER, 50.0, 3.0 * FRAC_PI_2);
        assert!(!wedge_contains_point(opposite, CENTER, 0.0, PI, 100.0));

        for angle in [0.3, FRAC_PI_2, 2.0, 4.0] {
            let far = polar_point(CENTER, 150.0, angle);
            assert!(!wedge_contains_point(far, CENTER, 0.0, PI, 100.0));
        }
    }

    #[test]
    fn test_wraparound() {
        let start = 7.0 * FRAC_PI_4;
        let end = FRAC_PI_4;

        let north = polar_point(CENTER, 40.0, 0.0);
        assert!(wedge_contains_point(north, CENTER, start, end, 100.0));

        let east = polar_point(CENTER, 40.0, FRAC_PI_2);
        assert!(!wedge_contains_point(east, CENTER, start, end, 100.0));
    }

    #[test]
    fn test_unnormalized_angles() {
        // 3π/2 .. 5π/2 is the same wrapped wedge around north
        assert!(is_angle_inside(0.1, 3.0 * FRAC_PI_2, 5.0 * FRAC_PI_2));
        assert!(is_angle_inside(TAU - 0.1, 3.0 * FRAC_PI_2, 5.0 * FRAC_PI_2));
        assert!(!is_angle_inside(PI, 3.0 * FRAC_PI_2, 5.0 * FRAC_PI_2));
    }

    #[test]
    fn test_full_turn_accepts_everything() {
        for angle in [0.0, 1.0, PI, 5.0] {
            assert!(is_angle_inside(angle, 0.0, TAU));
        }
    }

    #[test]
    fn test_collapsed_wedge_rejects() {
        assert!(!is_angle_inside(0.0, 0.0, 0.0));
        assert!(!is_angle_inside(1.0, 0.0, 0.0));
        let p = polar_point(CENTER, 10.0, 0.5);
        assert!(!wedge_contains_point(p, CENTER, 0.0, 0.0, 100.0));
    }

    #[test]
    fn test_boundaries_are_exclusive() {
        assert!(!is_angle_inside(0.0, 0.0, PI));
        assert!(!is_angle_inside(PI, 0.0, PI));
        assert!(is_angle_inside(0.01, 0.0, PI));
    }
}
