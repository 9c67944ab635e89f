//! Diagram configuration
//!
//! Fixed at construction. Serializable so hosts can keep it next to their
//! own view settings.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::{DEFAULT_ANIMATION_DURATION, HIGHLIGHTED_OPACITY, HIGHLIGHTED_SCALE};
use crate::error::{DiagramError, Result};

/// Visual feedback applied to a leaf while it is pressed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SelectionStyle {
    /// No feedback
    None,
    /// Multiply leaf alpha by the factor
    Opacity(f64),
    /// Scale the leaf around the diagram center by the factor
    Scale(f64),
}

impl Default for SelectionStyle {
    fn default() -> Self {
        SelectionStyle::Scale(HIGHLIGHTED_SCALE)
    }
}

impl SelectionStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionStyle::None => "none",
            SelectionStyle::Opacity(_) => "opacity",
            SelectionStyle::Scale(_) => "scale",
        }
    }

    /// Parse a style name, using the default factor for that style
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" | "identity" => Some(SelectionStyle::None),
            "opacity" | "alpha" => Some(SelectionStyle::Opacity(HIGHLIGHTED_OPACITY)),
            "scale" => Some(SelectionStyle::Scale(HIGHLIGHTED_SCALE)),
            _ => None,
        }
    }

    /// Alpha multiplier while highlighted
    pub fn highlighted_opacity(&self) -> f64 {
        match self {
            SelectionStyle::Opacity(factor) => *factor,
            _ => 1.0,
        }
    }

    /// Scale factor while highlighted
    pub fn highlighted_scale(&self) -> f64 {
        match self {
            SelectionStyle::Scale(factor) => *factor,
            _ => 1.0,
        }
    }

    fn validate(&self) -> Result<()> {
        match *self {
            SelectionStyle::None => Ok(()),
            SelectionStyle::Opacity(factor) | SelectionStyle::Scale(factor) => {
                if factor.is_finite() && factor > 0.0 {
                    Ok(())
                } else {
                    Err(DiagramError::InvalidSelectionFactor {
                        style: self.as_str(),
                        factor,
                    })
                }
            }
        }
    }
}

/// Diagram configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Radius of the largest leaf. `0` derives it from the bounds as
    /// `min(width, height) / 2`.
    pub fixed_radius: f64,
    /// Angle between the start of the first leaf and the end of the last one
    pub total_sweep_angle: f64,
    /// Feedback while a leaf is pressed
    pub selection_style: SelectionStyle,
    /// Uniform stroke color. `None` strokes each leaf with its fill color.
    pub stroke_color: Option<Color>,
    /// Duration of each reload phase in seconds
    pub animation_duration: f64,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            fixed_radius: 0.0,
            total_sweep_angle: TAU,
            selection_style: SelectionStyle::default(),
            stroke_color: None,
            animation_duration: DEFAULT_ANIMATION_DURATION,
        }
    }
}

impl DiagramConfig {
    /// Config with a fixed leaf radius
    pub fn with_radius(radius: f64) -> Self {
        Self {
            fixed_radius: radius,
            ..Self::default()
        }
    }

    pub fn with_selection_style(mut self, style: SelectionStyle) -> Self {
        self.selection_style = style;
        self
    }

    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }

    pub fn with_sweep_angle(mut self, angle: f64) -> Self {
        self.total_sweep_angle = angle;
        self
    }

    /// Reject values that indicate a programming error
    pub fn validate(&self) -> Result<()> {
        if !self.fixed_radius.is_finite() || self.fixed_radius < 0.0 {
            return Err(DiagramError::InvalidRadius(self.fixed_radius));
        }
        if !self.total_sweep_angle.is_finite() || self.total_sweep_angle <= 0.0 {
            return Err(DiagramError::InvalidSweepAngle(self.total_sweep_angle));
        }
        if !self.animation_duration.is_finite() || self.animation_duration < 0.0 {
            return Err(DiagramError::InvalidAnimationDuration(
                self.animation_duration,
            ));
        }
        self.selection_style.validate()
    }

    /// Outer leaf radius for a render surface of the given size
    pub fn leaf_radius(&self, width: f64, height: f64) -> f64 {
        if self.fixed_radius > 0.0 {
            self.fixed_radius
        } else {
            width.min(height).max(0.0) / 2.0
        }
    }

    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DiagramConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("Loaded diagram config: {:?}", config);
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
