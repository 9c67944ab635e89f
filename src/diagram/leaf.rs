//! Leaf handles
//!
//! [`LeafShape`] is the drawable record (geometry + colors). [`Leaf`] wraps it
//! with the interactive state: the angles currently on screen while an
//! animation runs, and highlight feedback.

use glam::DVec2;

use super::animation::AnimatableAngles;
use crate::color::Color;
use crate::config::SelectionStyle;
use crate::geometry::{WedgeDescriptor, wedge_contains_point};
use crate::renderer::{WedgePath, wedge_outline};

/// Geometry and style of a drawn leaf
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeafShape {
    pub start_angle: f64,
    pub end_angle: f64,
    pub radius: f64,
    pub fill_color: Color,
    pub stroke_color: Color,
}

impl LeafShape {
    pub fn from_descriptor(descriptor: &WedgeDescriptor) -> Self {
        Self {
            start_angle: descriptor.start_angle,
            end_angle: descriptor.end_angle,
            radius: descriptor.outer_radius,
            fill_color: descriptor.fill_color,
            stroke_color: descriptor.effective_stroke_color(),
        }
    }

    pub fn descriptor(&self) -> WedgeDescriptor {
        WedgeDescriptor {
            start_angle: self.start_angle,
            end_angle: self.end_angle,
            outer_radius: self.radius,
            fill_color: self.fill_color,
            stroke_color: Some(self.stroke_color),
        }
    }

    pub fn outline(&self, center: DVec2) -> Option<WedgePath> {
        wedge_outline(&self.descriptor(), center)
    }

    pub fn contains_point(&self, point: DVec2, center: DVec2) -> bool {
        wedge_contains_point(point, center, self.start_angle, self.end_angle, self.radius)
    }
}

impl AnimatableAngles for LeafShape {
    fn angles(&self) -> (f64, f64) {
        (self.start_angle, self.end_angle)
    }

    fn set_angles(&mut self, start: f64, end: f64) {
        self.start_angle = start;
        self.end_angle = end;
    }
}

/// Highlight feedback to apply when drawing a leaf
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeafAppearance {
    /// Alpha multiplier
    pub opacity: f64,
    /// Scale around the diagram center
    pub scale: f64,
}

impl Default for LeafAppearance {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
        }
    }
}

/// A live leaf of the diagram.
///
/// `model` holds the angles the leaf is headed to (used for hit-testing),
/// `presentation` what is currently on screen.
#[derive(Debug, Clone)]
pub struct Leaf {
    model: LeafShape,
    presentation: LeafShape,
    selection_style: SelectionStyle,
    highlighted: bool,
}

impl Leaf {
    pub fn new(descriptor: &WedgeDescriptor, selection_style: SelectionStyle) -> Self {
        let shape = LeafShape::from_descriptor(descriptor);
        Self {
            model: shape,
            presentation: shape,
            selection_style,
            highlighted: false,
        }
    }

    pub fn model(&self) -> &LeafShape {
        &self.model
    }

    pub fn presentation(&self) -> &LeafShape {
        &self.presentation
    }

    /// Move the final angles without touching what is on screen
    pub fn set_model_angles(&mut self, start: f64, end: f64) {
        self.model.set_angles(start, end);
    }

    /// Resize in place (model and presentation)
    pub fn set_radius(&mut self, radius: f64) {
        self.model.radius = radius;
        self.presentation.radius = radius;
    }

    /// Drop any in-flight animation: show the model angles
    pub fn settle(&mut self) {
        self.presentation = self.model;
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    pub fn appearance(&self) -> LeafAppearance {
        if !self.highlighted {
            return LeafAppearance::default();
        }
        LeafAppearance {
            opacity: self.selection_style.highlighted_opacity(),
            scale: self.selection_style.highlighted_scale(),
        }
    }

    pub fn contains_point(&self, point: DVec2, center: DVec2) -> bool {
        self.model.contains_point(point, center)
    }
}

impl AnimatableAngles for Leaf {
    fn angles(&self) -> (f64, f64) {
        self.presentation.angles()
    }

    fn set_angles(&mut self, start: f64, end: f64) {
        self.presentation.set_angles(start, end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn descriptor() -> WedgeDescriptor {
        WedgeDescriptor {
            start_angle: 0.0,
            end_angle: PI,
            outer_radius: 100.0,
            fill_color: Color::WHITE,
            stroke_color: None,
        }
    }

    #[test]
    fn test_model_and_presentation_split() {
        let mut leaf = Leaf::new(&descriptor(), SelectionStyle::None);
        leaf.set_model_angles(0.0, 0.0);
        assert_eq!(leaf.angles(), (0.0, PI));
        assert_eq!(leaf.model().angles(), (0.0, 0.0));

        leaf.settle();
        assert_eq!(leaf.angles(), (0.0, 0.0));
    }

    #[test]
    fn test_highlight_appearance() {
        let mut leaf = Leaf::new(&descriptor(), SelectionStyle::Opacity(0.5));
        assert_eq!(leaf.appearance(), LeafAppearance::default());
        leaf.set_highlighted(true);
        assert_eq!(leaf.appearance().opacity, 0.5);
        assert_eq!(leaf.appearance().scale, 1.0);

        let mut leaf = Leaf::new(&descriptor(), SelectionStyle::Scale(0.9));
        leaf.set_highlighted(true);
        assert_eq!(leaf.appearance().scale, 0.9);
    }

    #[test]
    fn test_stroke_falls_back_to_fill() {
        let shape = LeafShape::from_descriptor(&descriptor());
        assert_eq!(shape.stroke_color, Color::WHITE);
    }

    #[test]
    fn test_hit_uses_model_angles() {
        let center = DVec2::new(100.0, 100.0);
        let east = DVec2::new(150.0, 100.0);
        let mut leaf = Leaf::new(&descriptor(), SelectionStyle::None);
        assert!(leaf.contains_point(east, center));
        leaf.set_model_angles(0.0, 0.0);
        assert!(!leaf.contains_point(east, center));
    }
}
