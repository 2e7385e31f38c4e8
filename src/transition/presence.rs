//! Wait-mode presence: one keyed page at a time, exit before enter

use std::time::Duration;

use super::{Phase, Transition, TransitionSpec};
use crate::config::InterruptionPolicy;

/// Identifies one mounted page instance
pub type InstanceId = u64;

/// A mounted, keyed page instance
#[derive(Debug, Clone)]
pub struct Instance {
    pub id: InstanceId,
    pub key: String,
    pub transition: Transition,
}

/// Lifecycle change the owner has to act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Construct the page for `key`; it starts entering now
    Mount { id: InstanceId, key: String },
    Settled { id: InstanceId },
    Exiting { id: InstanceId },
    /// Tear the page down; it is gone from the render tree
    Unmount { id: InstanceId },
}

/// Coordinates keyed page instances in wait mode
///
/// A new key never mounts while the previous instance is still on screen:
/// the old instance exits first and the new one mounts once the exit is
/// complete. While an exit is in flight only the latest requested key is
/// remembered; what happens to the running exit is decided by the
/// [`InterruptionPolicy`].
#[derive(Debug)]
pub struct Presence {
    spec: TransitionSpec,
    policy: InterruptionPolicy,
    current: Option<Instance>,
    pending: Option<String>,
    next_id: InstanceId,
}

impl Presence {
    pub fn new(spec: TransitionSpec, policy: InterruptionPolicy) -> Self {
        Self {
            spec,
            policy,
            current: None,
            pending: None,
            next_id: 1,
        }
    }

    /// The instance currently in the render tree
    pub fn current(&self) -> Option<&Instance> {
        self.current.as_ref()
    }

    /// Key waiting for the current instance to finish exiting
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Whether anything still has to happen without further input
    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
            || self
                .current
                .as_ref()
                .map(|i| i.transition.is_animating())
                .unwrap_or(false)
    }

    /// Request that `key` be shown
    pub fn show(&mut self, key: &str) -> Vec<Change> {
        let Some(current) = self.current.as_mut() else {
            return vec![self.mount(key)];
        };

        match current.transition.phase() {
            Phase::Entering | Phase::Settled if current.key == key => Vec::new(),
            Phase::Entering | Phase::Settled => {
                current.transition.exit();
                self.pending = Some(key.to_string());
                vec![Change::Exiting { id: current.id }]
            }
            Phase::Exiting => match self.policy {
                InterruptionPolicy::CancelAndSwitch => {
                    current.transition.remove();
                    let id = current.id;
                    self.current = None;
                    self.pending = None;
                    tracing::debug!("exit of instance {} cut short for {}", id, key);
                    vec![Change::Unmount { id }, self.mount(key)]
                }
                InterruptionPolicy::FinishThenSwitch => {
                    self.pending = Some(key.to_string());
                    Vec::new()
                }
            },
            Phase::Removed => {
                let id = current.id;
                self.current = None;
                vec![Change::Unmount { id }, self.mount(key)]
            }
        }
    }

    /// Advance the current instance's animation
    pub fn tick(&mut self, dt: Duration) -> Vec<Change> {
        let mut changes = Vec::new();

        if let Some(current) = self.current.as_mut() {
            match current.transition.tick(dt) {
                Some(Phase::Settled) => changes.push(Change::Settled { id: current.id }),
                Some(Phase::Removed) => changes.push(Change::Unmount { id: current.id }),
                _ => {}
            }
        }

        if matches!(changes.last(), Some(Change::Unmount { .. })) {
            self.current = None;
        }

        if self.current.is_none() {
            if let Some(key) = self.pending.take() {
                changes.push(self.mount(&key));
            }
        }

        changes
    }

    fn mount(&mut self, key: &str) -> Change {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Instance {
            id,
            key: key.to_string(),
            transition: Transition::mount(self.spec),
        });
        Change::Mount {
            id,
            key: key.to_string(),
        }
    }
}
