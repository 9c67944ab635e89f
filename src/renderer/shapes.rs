//! Leaf outline construction
//!
//! A leaf is a pie slice whose two outer corners are rounded. The rounding
//! circle of each corner is tangent to the radial edge and to the line that
//! touches the outer circle at `edge ± delta`, where `delta` is the corner
//! delta angle for the current corner radius.

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::DVec2;
use kurbo::BezPath;

use super::path::{OutlinePath, flatten_outline, to_point};
use crate::color::Color;
use crate::consts::{CORNER_COEF, CORNER_RADIUS, FLATTEN_TOLERANCE};
use crate::geometry::WedgeDescriptor;
use crate::math::{approx_eq, corner_delta_angle, polar_point};

/// A closed leaf outline ready to be filled and stroked
#[derive(Debug, Clone)]
pub struct WedgePath {
    pub path: BezPath,
    pub fill_color: Color,
    pub stroke_color: Color,
    /// Corner radius actually used (after thin-leaf capping)
    pub corner_radius: f64,
    /// Angle eaten by each rounded corner at the outer edge
    pub delta_angle: f64,
    /// True when the outer arc collapsed to a single point
    pub too_small_angle: bool,
}

impl WedgePath {
    /// Outline as a single closed polygon (apex first)
    pub fn polygon(&self) -> Vec<DVec2> {
        flatten_outline(&self.path, FLATTEN_TOLERANCE)
            .into_iter()
            .next()
            .unwrap_or_default()
    }
}

/// Corner radius for a leaf of the given sweep and outer radius
pub fn corner_radius_for(sweep: f64, outer_radius: f64) -> f64 {
    if sweep >= TAU {
        return 0.0;
    }
    if sweep < FRAC_PI_2 {
        // Thin leaves: keep the two corners from overlapping
        let cap = (sweep.sin() * outer_radius * CORNER_COEF).floor().max(0.0);
        return CORNER_RADIUS.min(cap);
    }
    CORNER_RADIUS
}

/// Build the outline of `wedge` around `center`.
///
/// Returns `None` for leaves too small to draw.
pub fn wedge_outline(wedge: &WedgeDescriptor, center: DVec2) -> Option<WedgePath> {
    let radius = wedge.outer_radius;
    if radius <= CORNER_RADIUS {
        return None;
    }

    let start = wedge.start_angle;
    let end = wedge.end_angle;
    let sweep = wedge.sweep();

    let corner_radius = corner_radius_for(sweep, radius);
    let delta = corner_delta_angle(radius, corner_radius);
    if approx_eq(delta.cos(), 0.0) {
        return None;
    }

    let too_small_angle = delta * 2.0 >= sweep;
    let guiding_radius = radius / delta.cos();

    let first_corner = polar_point(center, guiding_radius, start);
    let second_corner = polar_point(center, guiding_radius, end);
    let first_tangent = polar_point(center, radius, start + delta);

    let mut path = BezPath::new();
    path.move_to(to_point(center));
    path.arc_to(first_corner, first_tangent, corner_radius);

    if too_small_angle {
        path.line_to(to_point(polar_point(center, radius, wedge.mid_angle())));
    } else {
        path.arc_around(center, radius, start + delta, end - delta);
    }

    path.arc_to(second_corner, center, corner_radius);
    path.line_to(to_point(center));
    path.close_path();

    Some(WedgePath {
        path,
        fill_color: wedge.fill_color,
        stroke_color: wedge.effective_stroke_color(),
        corner_radius,
        delta_angle: delta,
        too_small_angle,
    })
}
