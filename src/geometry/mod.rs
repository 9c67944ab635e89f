//! Leaf geometry
//!
//! Pure functions, no rendering or platform dependencies:
//! - `wedge`: values to leaf descriptors (angles, radii, colors)
//! - `hit`: point-in-leaf tests for touch input

pub mod hit;
pub mod wedge;

pub use hit::{is_angle_inside, wedge_contains_point};
pub use wedge::{LeafInput, WedgeDescriptor, layout_wedges, wedge_radii};
