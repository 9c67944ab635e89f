//! Scalar angle math shared by the geometry, renderer and hit-testing code
//!
//! Angles are measured in radians, clockwise from north (12 o'clock), in
//! screen space where y grows downward. A point at angle `a` and distance `r`
//! from `center` is `(center.x + r·sin a, center.y − r·cos a)`.

use std::cmp::Ordering;
use std::f64::consts::{FRAC_PI_2, TAU};

use glam::DVec2;

use crate::consts::EPSILON;

/// Compare two scalars, treating them as equal when `|l - r| <= eps`
#[inline]
pub fn compare_with(l: f64, r: f64, eps: f64) -> Ordering {
    if (l - r).abs() <= eps {
        Ordering::Equal
    } else if l < r {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Compare two scalars with the default [`EPSILON`]
#[inline]
pub fn compare(l: f64, r: f64) -> Ordering {
    compare_with(l, r, EPSILON)
}

#[inline]
pub fn approx_eq(l: f64, r: f64) -> bool {
    compare(l, r) == Ordering::Equal
}

/// Map any finite angle into `[0, 2π)`.
///
/// Angles already inside the range pass through untouched, so values a hair
/// under a full turn are not snapped to zero.
pub fn normalize_angle(angle: f64) -> f64 {
    if angle >= 0.0 && compare(angle, TAU) == Ordering::Less {
        return angle;
    }

    // rem_euclid can round up to exactly TAU for tiny negative inputs
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Half-angle consumed by a rounded corner of `corner_radius` whose tangent
/// circle sits inside a circle of `outer_radius`.
///
/// Returns 0 when the corner does not fit.
pub fn corner_delta_angle(outer_radius: f64, corner_radius: f64) -> f64 {
    if outer_radius <= corner_radius || approx_eq(outer_radius, corner_radius) {
        return 0.0;
    }
    (corner_radius / (outer_radius - corner_radius)).atan()
}

/// Point at `angle` (clockwise from north) and `radius` from `center`
#[inline]
pub fn polar_point(center: DVec2, radius: f64, angle: f64) -> DVec2 {
    DVec2::new(
        center.x + radius * angle.sin(),
        center.y - radius * angle.cos(),
    )
}

/// Clockwise-from-north angle of `point` around `center`, in `[0, 2π)`
pub fn angle_of_point(center: DVec2, point: DVec2) -> f64 {
    let dx = point.x - center.x;
    let dy = center.y - point.y;

    if approx_eq(dy, 0.0) {
        return if dx > 0.0 { FRAC_PI_2 } else { 3.0 * FRAC_PI_2 };
    }

    let angle = dx.atan2(dy);
    if angle < 0.0 { angle + TAU } else { angle }
}

/// Signed shortest rotation from `from` to `to`, in `(-π, π]`
pub fn shortest_sweep(from: f64, to: f64) -> f64 {
    use std::f64::consts::PI;

    let mut sweep = (to - from).rem_euclid(TAU);
    if sweep > PI {
        sweep -= TAU;
    }
    sweep
}
