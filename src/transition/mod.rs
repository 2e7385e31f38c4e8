//! Page transitions
//!
//! Every mounted page is wrapped in a [`Transition`], a small state machine:
//!
//! ```text
//! ENTERING -> SETTLED -> EXITING -> REMOVED
//! ```
//!
//! Time only moves when the owner calls [`Transition::tick`]; phase changes
//! are reported back from it, which is how the [`Presence`] coordinator
//! learns that an exit has completed and the next page may mount.

mod easing;
mod presence;
mod spring;
mod tween;

pub use easing::CubicBezier;
pub use presence::{Change, Instance, InstanceId, Presence};
pub use spring::Spring;
pub use tween::{Tween, Visual};

use std::fmt;
use std::time::Duration;

use crate::config::TransitionConfig;
use crate::view::{el, Node};

/// Lifecycle phase of a wrapped page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Settled,
    Exiting,
    Removed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Entering => "entering",
            Phase::Settled => "settled",
            Phase::Exiting => "exiting",
            Phase::Removed => "removed",
        };
        f.write_str(name)
    }
}

/// Fixed parameters of a page transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    pub duration: Duration,
    pub easing: CubicBezier,
    /// State a page mounts in
    pub initial: Visual,
    /// State a page settles in
    pub settled: Visual,
    /// State a page leaves in
    pub exit: Visual,
}

impl TransitionSpec {
    pub fn from_config(config: &TransitionConfig) -> Self {
        Self {
            duration: Duration::from_millis(config.duration_ms),
            easing: CubicBezier::from_points(config.easing),
            initial: Visual::new(0.0, config.enter_offset),
            settled: Visual::new(1.0, 0.0),
            exit: Visual::new(0.0, config.exit_offset),
        }
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::from_config(&TransitionConfig::default())
    }
}

/// Enter/exit animation state of one mounted page
#[derive(Debug, Clone)]
pub struct Transition {
    spec: TransitionSpec,
    phase: Phase,
    tween: Tween,
}

impl Transition {
    /// Start entering
    pub fn mount(spec: TransitionSpec) -> Self {
        Self {
            spec,
            phase: Phase::Entering,
            tween: Tween::new(spec.initial, spec.settled, spec.duration, spec.easing),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current visual state
    pub fn visual(&self) -> Visual {
        match self.phase {
            Phase::Removed => self.spec.exit,
            _ => self.tween.value(),
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Exiting)
    }

    /// Advance the animation clock, returning the new phase if it changed
    pub fn tick(&mut self, dt: Duration) -> Option<Phase> {
        if !self.is_animating() || !self.tween.advance(dt) {
            return None;
        }

        self.phase = match self.phase {
            Phase::Entering => Phase::Settled,
            _ => Phase::Removed,
        };
        Some(self.phase)
    }

    /// Start exiting from wherever the page currently is
    ///
    /// Returns `false` if the page is already exiting or removed.
    pub fn exit(&mut self) -> bool {
        match self.phase {
            Phase::Entering | Phase::Settled => {
                let from = self.tween.value();
                self.tween = Tween::new(from, self.spec.exit, self.spec.duration, self.spec.easing);
                self.phase = Phase::Exiting;
                true
            }
            Phase::Exiting | Phase::Removed => false,
        }
    }

    /// Drop the page without finishing its animation
    pub fn remove(&mut self) {
        self.phase = Phase::Removed;
    }

    /// Wrap page content in the animated container
    pub fn wrap(&self, content: Node) -> Node {
        el("div")
            .class("page-transition")
            .attr("data-phase", self.phase.to_string())
            .attr("style", self.visual().style())
            .child(content)
            .into()
    }
}
