//! Leaf rendering
//!
//! Produces outlines and triangle lists; the host decides how to put them on
//! screen.

pub mod path;
pub mod shapes;
pub mod vertex;

pub use path::{OutlinePath, flatten_outline};
pub use shapes::{WedgePath, corner_radius_for, wedge_outline};
pub use vertex::{Vertex, fill_vertices, stroke_vertices};
