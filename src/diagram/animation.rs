//! Tweened angle animations for the collapse/expand reload
//!
//! Each reload phase is one [`Transition`]: a shared clock plus one
//! [`AngleTween`] per leaf. The host advances the clock; every step pushes the
//! interpolated angles into the leaves through [`AnimatableAngles`].

use serde::{Deserialize, Serialize};

/// Current phase of the reload state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReloadPhase {
    /// Nothing in flight
    #[default]
    Idle,
    /// Old leaves shrinking to a zero-width sliver at north
    Collapsing,
    /// New leaves growing from zero width to their real angles
    Expanding,
}

/// Invoked once per reload: `true` if the whole sequence ran without being
/// superseded by a newer reload.
pub type ReloadCompletion = Box<dyn FnOnce(bool)>;

/// Something drawn with a start and end angle that can be animated
pub trait AnimatableAngles {
    fn angles(&self) -> (f64, f64);
    fn set_angles(&mut self, start: f64, end: f64);
}

/// Linear interpolation of a `(start, end)` angle pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleTween {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

impl AngleTween {
    pub fn new(from: (f64, f64), to: (f64, f64)) -> Self {
        Self { from, to }
    }

    /// Angles at progress `t` in `0.0..=1.0`
    pub fn sample(&self, t: f64) -> (f64, f64) {
        let t = t.clamp(0.0, 1.0);
        (
            self.from.0 + (self.to.0 - self.from.0) * t,
            self.from.1 + (self.to.1 - self.from.1) * t,
        )
    }
}

/// One in-flight reload phase
pub struct Transition {
    phase: ReloadPhase,
    elapsed: f64,
    duration: f64,
    tweens: Vec<AngleTween>,
    completion: ReloadCompletion,
}

impl Transition {
    pub fn new(
        phase: ReloadPhase,
        tweens: Vec<AngleTween>,
        duration: f64,
        completion: ReloadCompletion,
    ) -> Self {
        Self {
            phase,
            elapsed: 0.0,
            duration,
            tweens,
            completion,
        }
    }

    pub fn phase(&self) -> ReloadPhase {
        self.phase
    }

    /// Progress in `0.0..=1.0`. A zero duration is complete immediately.
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Advance the clock. Returns true once the phase is complete.
    pub fn advance(&mut self, dt: f64) -> bool {
        self.elapsed += dt.max(0.0);
        self.is_finished()
    }

    /// Push the current interpolated angles into `targets` (same order as the
    /// tweens)
    pub fn apply<T: AnimatableAngles>(&self, targets: &mut [T]) {
        let t = self.progress();
        for (tween, target) in self.tweens.iter().zip(targets.iter_mut()) {
            let (start, end) = tween.sample(t);
            target.set_angles(start, end);
        }
    }

    /// Give up the completion callback
    pub fn into_completion(self) -> (ReloadPhase, ReloadCompletion) {
        (self.phase, self.completion)
    }
}

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("phase", &self.phase)
            .field("elapsed", &self.elapsed)
            .field("duration", &self.duration)
            .field("tweens", &self.tweens.len())
            .finish()
    }
}
