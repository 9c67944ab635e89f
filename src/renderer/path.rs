//! Leaf outline paths on top of [`kurbo::BezPath`]
//!
//! Arcs use the diagram's angle convention (clockwise from north, y down), so
//! a positive sweep always runs in the direction of increasing angle. kurbo
//! measures from +x in the same y-down space, a quarter turn behind.

use std::f64::consts::FRAC_PI_2;

use glam::DVec2;
use kurbo::{Arc, BezPath, PathEl, Point, Vec2};

use crate::consts::ARC_TOLERANCE;
use crate::math::{angle_of_point, approx_eq, polar_point, shortest_sweep};

#[inline]
pub fn to_point(p: DVec2) -> Point {
    Point::new(p.x, p.y)
}

#[inline]
pub fn to_dvec(p: Point) -> DVec2 {
    DVec2::new(p.x, p.y)
}

/// Circle arc in diagram angles
pub fn diagram_arc(center: DVec2, radius: f64, start_angle: f64, sweep: f64) -> Arc {
    Arc {
        center: to_point(center),
        radii: Vec2::new(radius, radius),
        start_angle: start_angle - FRAC_PI_2,
        sweep_angle: sweep,
        x_rotation: 0.0,
    }
}

/// Arc and tangent-corner building for [`BezPath`]
pub trait OutlinePath {
    /// End point of the last element, `None` when empty or just closed
    fn pen_position(&self) -> Option<DVec2>;

    /// Arc around `center` from `start_angle` to `end_angle`, preceded by a
    /// line from the current point to the arc start.
    fn arc_around(&mut self, center: DVec2, radius: f64, start_angle: f64, end_angle: f64);

    /// Round the corner at `corner` between the segment from the current
    /// point and the segment toward `next`, with a tangent arc of `radius`
    /// (what a 2D canvas `arcTo` does).
    ///
    /// Emits a line to the first tangent point and the arc, ending on the
    /// second tangent point. Degenerate input (no current point, coincident
    /// points, collinear segments, zero radius) degrades to a straight line
    /// to `corner`.
    fn arc_to(&mut self, corner: DVec2, next: DVec2, radius: f64);
}

impl OutlinePath for BezPath {
    fn pen_position(&self) -> Option<DVec2> {
        match self.elements().last()? {
            PathEl::MoveTo(p)
            | PathEl::LineTo(p)
            | PathEl::QuadTo(_, p)
            | PathEl::CurveTo(_, _, p) => Some(to_dvec(*p)),
            PathEl::ClosePath => None,
        }
    }

    fn arc_around(&mut self, center: DVec2, radius: f64, start_angle: f64, end_angle: f64) {
        let start = polar_point(center, radius, start_angle);
        if self.pen_position().is_some() {
            self.line_to(to_point(start));
        } else {
            self.move_to(to_point(start));
        }
        let arc = diagram_arc(center, radius, start_angle, end_angle - start_angle);
        self.extend(arc.append_iter(ARC_TOLERANCE));
    }

    fn arc_to(&mut self, corner: DVec2, next: DVec2, radius: f64) {
        let Some(from) = self.pen_position() else {
            self.move_to(to_point(corner));
            return;
        };

        let to_prev = from - corner;
        let to_next = next - corner;
        if radius <= 0.0
            || approx_eq(to_prev.length(), 0.0)
            || approx_eq(to_next.length(), 0.0)
        {
            self.line_to(to_point(corner));
            return;
        }

        let d1 = to_prev.normalize();
        let d2 = to_next.normalize();
        if approx_eq(d1.perp_dot(d2), 0.0) {
            self.line_to(to_point(corner));
            return;
        }

        // Interior angle between the two edges at the corner
        let half = d1.dot(d2).clamp(-1.0, 1.0).acos() / 2.0;
        let tangent_len = radius / half.tan();
        let t1 = corner + d1 * tangent_len;
        let t2 = corner + d2 * tangent_len;
        let center = corner + (d1 + d2).normalize() * (radius / half.sin());

        let a1 = angle_of_point(center, t1);
        let a2 = angle_of_point(center, t2);

        self.line_to(to_point(t1));
        let arc = diagram_arc(center, radius, a1, shortest_sweep(a1, a2));
        self.extend(arc.append_iter(ARC_TOLERANCE));
    }
}

/// Flatten into polylines, one per subpath, within `tolerance`
pub fn flatten_outline(path: &BezPath, tolerance: f64) -> Vec<Vec<DVec2>> {
    let mut polylines: Vec<Vec<DVec2>> = Vec::new();
    let mut current: Vec<DVec2> = Vec::new();

    kurbo::flatten(path.iter(), tolerance, |el| match el {
        PathEl::MoveTo(p) => {
            if current.len() > 1 {
                polylines.push(std::mem::take(&mut current));
            }
            current.clear();
            current.push(to_dvec(p));
        }
        PathEl::LineTo(p) => push_distinct(&mut current, to_dvec(p)),
        PathEl::ClosePath => {
            if current.len() > 1 {
                polylines.push(std::mem::take(&mut current));
            }
        }
        // flatten only emits lines
        PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => {
            push_distinct(&mut current, to_dvec(p))
        }
    });

    if current.len() > 1 {
        polylines.push(current);
    }
    polylines
}

fn push_distinct(points: &mut Vec<DVec2>, p: DVec2) {
    if points.last().is_none_or(|last| last.distance(p) > 1e-9) {
        points.push(p);
    }
}
