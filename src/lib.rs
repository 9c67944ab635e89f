//! Leaves Diagram - an animated circular "leaves" chart control
//!
//! Core modules:
//! - `math`: Epsilon comparisons and clockwise-from-north angle helpers
//! - `geometry`: Wedge layout from weighted values, wedge hit-testing
//! - `renderer`: Rounded wedge outlines, path flattening, vertex tessellation
//! - `diagram`: The controller (reload state machine, touches, resize)
//! - `config`: Construction-time configuration and selection styles
//!
//! The host owns the platform surface. It feeds bounds, touch points and
//! frame time into [`LeavesDiagram`] and draws what [`LeavesDiagram::render`]
//! hands back.

pub mod color;
pub mod config;
pub mod diagram;
pub mod error;
pub mod geometry;
pub mod math;
pub mod renderer;

pub use color::Color;
pub use config::{DiagramConfig, SelectionStyle};
pub use diagram::{
    LeafAppearance, LeavesDataSource, LeavesDelegate, LeavesDiagram, ReloadCompletion,
    ReloadPhase, RenderedLeaf,
};
pub use error::{DiagramError, Result};
pub use geometry::{WedgeDescriptor, layout_wedges, wedge_contains_point};
pub use renderer::{WedgePath, wedge_outline};

/// Diagram design constants
pub mod consts {
    /// Tolerance used by the scalar comparisons (16 ulps at 1.0)
    pub const EPSILON: f64 = f64::EPSILON * 16.0;

    /// Smallest leaf radius is the largest divided by this ratio
    pub const MIN_RADIUS_RATIO: f64 = 1.5;
    /// Backward overlap applied to each leaf start angle to hide seams (radians)
    pub const LEAF_INTERSECTION: f64 = 0.02;

    /// Rounded corner radius of every leaf
    pub const CORNER_RADIUS: f64 = 5.0;
    /// Thin-leaf corner cap: `sin(sweep) * radius * CORNER_COEF`
    pub const CORNER_COEF: f64 = 0.4;

    /// Highlight alpha for `SelectionStyle::Opacity`
    pub const HIGHLIGHTED_OPACITY: f64 = 0.95;
    /// Highlight scale for `SelectionStyle::Scale`
    pub const HIGHLIGHTED_SCALE: f64 = 1.1;

    /// Duration of each reload phase (collapse, expand) in seconds
    pub const DEFAULT_ANIMATION_DURATION: f64 = 0.25;

    /// Max distance between an arc and its cubic approximation
    pub const ARC_TOLERANCE: f64 = 0.01;
    /// Max distance between a curve and its flattened polyline
    pub const FLATTEN_TOLERANCE: f64 = 0.05;
    /// Default stroke width for outline tessellation
    pub const STROKE_WIDTH: f64 = 1.0;
}
