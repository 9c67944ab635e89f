//! The diagram controller
//!
//! Owns the leaves and the reload state machine:
//!
//! ```text
//! Idle --reload(animated)--> Collapsing --done--> Expanding --done--> Idle
//!   ^                            |                    |
//!   +------- superseded ---------+--------------------+
//! ```
//!
//! A reload that arrives while another one is animating cancels it first:
//! the old leaves snap to their final angles and the old completion fires
//! `false` before the new collapse starts.

use glam::DVec2;

use super::animation::{AngleTween, AnimatableAngles, ReloadCompletion, ReloadPhase, Transition};
use super::leaf::{Leaf, LeafAppearance};
use super::source::{LeavesDataSource, LeavesDelegate, collect_inputs};
use crate::config::DiagramConfig;
use crate::consts::STROKE_WIDTH;
use crate::error::Result;
use crate::geometry::{WedgeDescriptor, layout_wedges};
use crate::math::approx_eq;
use crate::renderer::WedgePath;
use crate::renderer::vertex::{Vertex, fill_vertices, scale_about, stroke_vertices};

/// A leaf as it should be drawn this frame
#[derive(Debug, Clone)]
pub struct RenderedLeaf {
    /// Index in data source order
    pub index: usize,
    pub outline: WedgePath,
    pub appearance: LeafAppearance,
}

impl RenderedLeaf {
    /// Fill then stroke triangles, with highlight feedback applied
    pub fn vertices(&self, center: DVec2) -> Vec<Vertex> {
        let polygon = scale_about(&self.outline.polygon(), center, self.appearance.scale);
        let opacity = self.appearance.opacity as f32;
        let fill = self.outline.fill_color.with_alpha_factor(opacity).to_array();
        let stroke = self.outline.stroke_color.with_alpha_factor(opacity).to_array();

        let mut vertices = fill_vertices(&polygon, fill);
        vertices.extend(stroke_vertices(&polygon, STROKE_WIDTH, stroke));
        vertices
    }
}

/// Circular leaves diagram
#[derive(Debug)]
pub struct LeavesDiagram {
    config: DiagramConfig,
    /// Index 0 is the first data source leaf (largest, front-most)
    leaves: Vec<Leaf>,
    /// Last known render-surface size
    bounds: DVec2,
    /// Set when a newer reload supersedes the in-flight one
    pending_cancellation: bool,
    transition: Option<Transition>,
    highlighted: Option<usize>,
}

impl LeavesDiagram {
    pub fn new(config: DiagramConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            leaves: Vec::new(),
            bounds: DVec2::ZERO,
            pending_cancellation: false,
            transition: None,
            highlighted: None,
        })
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    pub fn bounds(&self) -> DVec2 {
        self.bounds
    }

    /// Apex of every leaf: the middle of the bounds
    pub fn center(&self) -> DVec2 {
        self.bounds * 0.5
    }

    /// Radius of the first (largest) leaf for the current bounds
    pub fn leaf_radius(&self) -> f64 {
        self.config.leaf_radius(self.bounds.x, self.bounds.y)
    }

    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    pub fn phase(&self) -> ReloadPhase {
        self.transition
            .as_ref()
            .map_or(ReloadPhase::Idle, Transition::phase)
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn highlighted_leaf(&self) -> Option<usize> {
        self.highlighted
    }

    // === Layout ===

    /// Record new bounds. When the resolved radius changes, leaf radii are
    /// recomputed in place, angles untouched.
    pub fn layout(&mut self, bounds: DVec2, source: Option<&dyn LeavesDataSource>) {
        let prev_radius = self.leaf_radius();
        self.bounds = bounds;
        let new_radius = self.leaf_radius();

        if !approx_eq(prev_radius, new_radius) {
            self.update_leaves_radius(source);
        }
    }

    fn update_leaves_radius(&mut self, source: Option<&dyn LeavesDataSource>) {
        let models = self.create_models(source);
        if models.len() != self.leaves.len() {
            // Data changed without a reload; stale radii stay until the next one
            log::debug!(
                "Skipping radius update: {} models for {} leaves",
                models.len(),
                self.leaves.len()
            );
            return;
        }

        for (leaf, model) in self.leaves.iter_mut().zip(&models) {
            leaf.set_radius(model.outer_radius);
        }
    }

    fn create_models(&self, source: Option<&dyn LeavesDataSource>) -> Vec<WedgeDescriptor> {
        let Some(source) = source else {
            return Vec::new();
        };
        layout_wedges(
            &collect_inputs(source),
            self.leaf_radius(),
            self.config.total_sweep_angle,
            self.config.stroke_color,
        )
    }

    fn create_leaves(&self, models: &[WedgeDescriptor]) -> Vec<Leaf> {
        models
            .iter()
            .map(|model| Leaf::new(model, self.config.selection_style))
            .collect()
    }

    // === Reload ===

    /// Rebuild every leaf from `source`.
    ///
    /// Without animation the new leaves appear at once and `completion(true)`
    /// runs before this returns. With animation the current leaves collapse,
    /// the source is queried, and the new leaves expand; `completion` runs
    /// from [`advance`](Self::advance) with `false` if a newer reload
    /// superseded this one.
    pub fn reload_data(
        &mut self,
        source: Option<&dyn LeavesDataSource>,
        animated: bool,
        completion: impl FnOnce(bool) + 'static,
    ) {
        let completion: ReloadCompletion = Box::new(completion);
        self.cancel_animations();

        if !animated {
            self.reload_now(source);
            completion(true);
            return;
        }

        if self.leaves.is_empty() {
            // Nothing to collapse
            self.begin_expand(source, completion);
        } else {
            self.begin_collapse(completion);
        }
    }

    fn reload_now(&mut self, source: Option<&dyn LeavesDataSource>) {
        self.clear_highlight();
        let models = self.create_models(source);
        self.leaves = self.create_leaves(&models);
        log::debug!("Reloaded {} leaves", self.leaves.len());
    }

    /// Cut the in-flight phase short. Its completion fires `false` now.
    fn cancel_animations(&mut self) {
        let Some(transition) = self.transition.take() else {
            return;
        };

        log::debug!("Cancelling {:?} reload", transition.phase());
        self.pending_cancellation = true;
        for leaf in &mut self.leaves {
            leaf.settle();
        }
        self.finish_transition(transition, None);
    }

    fn begin_collapse(&mut self, completion: ReloadCompletion) {
        self.clear_highlight();
        let tweens = self
            .leaves
            .iter_mut()
            .map(|leaf| {
                let from = leaf.angles();
                leaf.set_model_angles(0.0, 0.0);
                AngleTween::new(from, (0.0, 0.0))
            })
            .collect();

        log::debug!("Collapsing {} leaves", self.leaves.len());
        self.transition = Some(Transition::new(
            ReloadPhase::Collapsing,
            tweens,
            self.config.animation_duration,
            completion,
        ));
    }

    fn begin_expand(&mut self, source: Option<&dyn LeavesDataSource>, completion: ReloadCompletion) {
        self.clear_highlight();
        let models = self.create_models(source);
        let mut leaves = self.create_leaves(&models);

        if leaves.is_empty() {
            self.leaves = leaves;
            log::debug!("Reload produced no leaves");
            completion(true);
            return;
        }

        let tweens = models
            .iter()
            .map(|model| AngleTween::new((0.0, 0.0), (model.start_angle, model.end_angle)))
            .collect();
        for leaf in &mut leaves {
            leaf.set_angles(0.0, 0.0);
        }
        self.leaves = leaves;

        log::debug!("Expanding {} leaves", self.leaves.len());
        self.transition = Some(Transition::new(
            ReloadPhase::Expanding,
            tweens,
            self.config.animation_duration,
            completion,
        ));
    }

    /// Phase boundary: consume the cancellation flag and move on
    fn finish_transition(&mut self, transition: Transition, source: Option<&dyn LeavesDataSource>) {
        let finished = !std::mem::take(&mut self.pending_cancellation);
        let (phase, completion) = transition.into_completion();

        match phase {
            ReloadPhase::Collapsing if finished => self.begin_expand(source, completion),
            _ => {
                log::debug!("{:?} reload ended, finished: {}", phase, finished);
                completion(finished);
            }
        }
    }

    /// Advance animations by `dt` seconds. `source` is queried when a
    /// collapse completes and the new leaves are built.
    pub fn advance(&mut self, dt: f64, source: Option<&dyn LeavesDataSource>) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };

        let done = transition.advance(dt);
        transition.apply(&mut self.leaves);
        if !done {
            return;
        }

        if let Some(transition) = self.transition.take() {
            self.finish_transition(transition, source);
        }
    }

    // === Touches ===

    /// Index of the leaf under `point`, front-most first. `None` when the
    /// point only hits the diagram background.
    pub fn hit_test(&self, point: DVec2) -> Option<usize> {
        let center = self.center();
        self.leaves
            .iter()
            .position(|leaf| leaf.contains_point(point, center))
    }

    /// Press: highlight the leaf under `point`
    pub fn touch_down(&mut self, point: DVec2) -> Option<usize> {
        self.clear_highlight();
        let index = self.hit_test(point)?;
        self.leaves[index].set_highlighted(true);
        self.highlighted = Some(index);
        Some(index)
    }

    /// Release: report a tap when released over the pressed leaf
    pub fn touch_up(
        &mut self,
        point: DVec2,
        delegate: Option<&mut dyn LeavesDelegate>,
    ) -> Option<usize> {
        let pressed = self.highlighted?;
        self.clear_highlight();

        if self.hit_test(point) != Some(pressed) {
            return None;
        }
        log::debug!("Tapped leaf {}", pressed);
        if let Some(delegate) = delegate {
            delegate.did_tap_leaf(pressed);
        }
        Some(pressed)
    }

    pub fn touch_cancelled(&mut self) {
        self.clear_highlight();
    }

    fn clear_highlight(&mut self) {
        if let Some(index) = self.highlighted.take() {
            if let Some(leaf) = self.leaves.get_mut(index) {
                leaf.set_highlighted(false);
            }
        }
    }

    // === Rendering ===

    /// Drawable leaves, back to front
    pub fn render(&self) -> Vec<RenderedLeaf> {
        let center = self.center();
        self.leaves
            .iter()
            .enumerate()
            .rev()
            .filter_map(|(index, leaf)| {
                leaf.presentation().outline(center).map(|outline| RenderedLeaf {
                    index,
                    outline,
                    appearance: leaf.appearance(),
                })
            })
            .collect()
    }

    /// Triangles for the whole diagram, back to front
    pub fn vertices(&self) -> Vec<Vertex> {
        let center = self.center();
        self.render()
            .iter()
            .flat_map(|leaf| leaf.vertices(center))
            .collect()
    }
}
