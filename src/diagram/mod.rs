//! Diagram controller
//!
//! - `source`: data source / delegate contracts supplied by the host
//! - `leaf`: drawable leaf records and their interactive wrapper
//! - `animation`: angle tweens and the reload phases
//! - `view`: [`LeavesDiagram`], tying layout, reload, touches and rendering

pub mod animation;
pub mod leaf;
pub mod source;
pub mod view;

pub use animation::{AngleTween, AnimatableAngles, ReloadCompletion, ReloadPhase, Transition};
pub use leaf::{Leaf, LeafAppearance, LeafShape};
pub use source::{LeavesDataSource, LeavesDelegate, collect_inputs};
pub use view::{LeavesDiagram, RenderedLeaf};
