//! Wedge layout: weighted values to leaf geometry
//!
//! The first value gets the largest radius and every following leaf shrinks
//! by an equal step, down to `outer / MIN_RADIUS_RATIO`. Angles accumulate in
//! value order around the configured sweep.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::{LEAF_INTERSECTION, MIN_RADIUS_RATIO};

/// Geometry and style of a single leaf
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WedgeDescriptor {
    /// Start angle (radians, clockwise from north, not normalized)
    pub start_angle: f64,
    /// End angle (radians, >= start_angle)
    pub end_angle: f64,
    pub outer_radius: f64,
    pub fill_color: Color,
    /// Stroke color, `None` strokes with the fill color
    pub stroke_color: Option<Color>,
}

impl WedgeDescriptor {
    /// Angular width of the leaf
    #[inline]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    #[inline]
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    #[inline]
    pub fn effective_stroke_color(&self) -> Color {
        self.stroke_color.unwrap_or(self.fill_color)
    }
}

/// One weighted entry of the diagram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeafInput {
    pub value: f64,
    pub color: Color,
}

/// Sum of the values, or `None` when there is nothing to lay out
fn positive_sum(inputs: &[LeafInput]) -> Option<f64> {
    let sum: f64 = inputs.iter().map(|input| input.value).sum();
    if inputs.is_empty() || !sum.is_finite() || sum <= 0.0 {
        None
    } else {
        Some(sum)
    }
}

/// Radii for `count` leaves under an outer bound
pub fn wedge_radii(count: usize, outer_radius: f64) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }

    let min_radius = outer_radius / MIN_RADIUS_RATIO;
    let radius_delta = (outer_radius - min_radius) / count as f64;
    let mut radius = outer_radius;

    (0..count)
        .map(|_| {
            let current = radius;
            radius = min_radius.max(radius - radius_delta);
            current
        })
        .collect()
}

/// Lay out leaves for the given values.
///
/// Returns an empty list when the values do not sum to a positive number.
pub fn layout_wedges(
    inputs: &[LeafInput],
    outer_radius: f64,
    total_sweep_angle: f64,
    stroke_color: Option<Color>,
) -> Vec<WedgeDescriptor> {
    let Some(full_sum) = positive_sum(inputs) else {
        return Vec::new();
    };

    let radii = wedge_radii(inputs.len(), outer_radius);
    let mut angle = 0.0;

    inputs
        .iter()
        .zip(radii)
        .map(|(input, radius)| {
            let start_angle = (angle - LEAF_INTERSECTION).max(0.0);
            let percent = input.value / full_sum;
            angle += percent * total_sweep_angle;
            WedgeDescriptor {
                start_angle,
                end_angle: angle,
                outer_radius: radius,
                fill_color: input.color,
                stroke_color,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::TAU;

    fn inputs(values: &[f64]) -> Vec<LeafInput> {
        values
            .iter()
            .map(|&value| LeafInput {
                value,
                color: Color::WHITE,
            })
            .collect()
    }

    #[test]
    fn test_preview_layout() {
        let values = [0.54, 0.11, 0.1, 0.08, 0.06, 0.06, 0.05];
        let wedges = layout_wedges(&inputs(&values), 150.0, TAU, None);

        assert_eq!(wedges.len(), 7);
        assert_eq!(wedges[0].start_angle, 0.0);
        assert!((wedges[0].end_angle - 0.54 * TAU).abs() < 1e-9);
        assert_eq!(wedges[0].outer_radius, 150.0);
        assert!((wedges[0].sweep() - 0.54 * TAU).abs() < 1e-9);

        assert!((wedges[6].end_angle - TAU).abs() < 1e-9);
        // 150 - 6 steps of (150 - 100) / 7
        assert!((wedges[6].outer_radius - (150.0 - 6.0 * 50.0 / 7.0)).abs() < 1e-9);
        assert!(wedges[6].outer_radius >= 100.0);

        // Each start overlaps the previous end
        for pair in wedges.windows(2) {
            assert!((pair[1].start_angle - (pair[0].end_angle - LEAF_INTERSECTION)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_degenerate_values() {
        assert!(layout_wedges(&[], 150.0, TAU, None).is_empty());
        assert!(layout_wedges(&inputs(&[0.0, 0.0]), 150.0, TAU, None).is_empty());
        assert!(layout_wedges(&inputs(&[-1.0, 0.5]), 150.0, TAU, None).is_empty());
    }

    #[test]
    fn test_zero_value_leaf_keeps_slot() {
        let wedges = layout_wedges(&inputs(&[1.0, 0.0, 1.0]), 90.0, TAU, None);
        assert_eq!(wedges.len(), 3);
        assert!((wedges[1].end_angle - wedges[0].end_angle).abs() < 1e-12);
    }

    #[test]
    fn test_partial_sweep_and_stroke() {
        let stroke = Color::BLACK;
        let wedges = layout_wedges(&inputs(&[1.0, 3.0]), 60.0, TAU / 2.0, Some(stroke));
        assert!((wedges[1].end_angle - TAU / 2.0).abs() < 1e-12);
        assert!((wedges[0].end_angle - TAU / 8.0).abs() < 1e-12);
        assert_eq!(wedges[0].effective_stroke_color(), stroke);
    }

    #[test]
    fn test_radii_floor() {
        let radii = wedge_radii(3, 90.0);
        assert_eq!(radii.len(), 3);
        assert_eq!(radii[0], 90.0);
        assert!((radii[1] - 80.0).abs() < 1e-12);
        assert!((radii[2] - 70.0).abs() < 1e-12);
        assert!(wedge_radii(0, 90.0).is_empty());
    }

    proptest! {
        #[test]
        fn radii_non_increasing(values in prop::collection::vec(0.01f64..100.0, 1..32),
                                outer in 10.0f64..1000.0) {
            let wedges = layout_wedges(&inputs(&values), outer, TAU, None);
            prop_assert_eq!(wedges.len(), values.len());
            prop_assert_eq!(wedges[0].outer_radius, outer);
            for pair in wedges.windows(2) {
                prop_assert!(pair[1].outer_radius < pair[0].outer_radius);
            }
            let last = wedges[wedges.len() - 1].outer_radius;
            prop_assert!(last >= outer / MIN_RADIUS_RATIO - 1e-9);
        }

        #[test]
        fn sweep_reconstructs_total(values in prop::collection::vec(0.01f64..100.0, 1..32),
                                    sweep in 0.5f64..TAU) {
            let wedges = layout_wedges(&inputs(&values), 100.0, sweep, None);
            let mut covered = 0.0;
            let mut prior_end = 0.0;
            for wedge in &wedges {
                prop_assert!(wedge.end_angle >= prior_end);
                prop_assert!(wedge.start_angle >= 0.0);
                // Undo the seam overlap before summing
                covered += wedge.end_angle - wedge.start_angle.max(prior_end);
                prior_end = wedge.end_angle;
            }
            prop_assert!((covered - sweep).abs() < 1e-9);
        }
    }
}
